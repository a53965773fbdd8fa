//! # Printer Module
//!
//! This module provides printer profiles.
//!
//! ## Modules
//!
//! - [`config`]: Page geometry and protocol parameters

pub mod config;

pub use config::{PAPER_WIDTH, PrinterConfig};
