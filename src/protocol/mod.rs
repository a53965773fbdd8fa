//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS-style
//! protocol used by common thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Document commands (init, code page, feed, cut)
//! - [`text`]: Text styling (alignment, emphasis, underline, size)
//! - [`graphics`]: Raster bit image framing
//! - [`sanitize`]: Unicode to code-page-safe text
//!
//! ## Usage Example
//!
//! ```
//! use briefprint::protocol::{commands, text, sanitize::sanitize};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::codepage(commands::CP858));
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::emphasis(true));
//! data.extend(sanitize("RECEIPT\n"));
//! data.extend(text::emphasis(false));
//! data.extend(commands::feed_and_cut(3));
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! ```

pub mod commands;
pub mod graphics;
pub mod sanitize;
pub mod text;
