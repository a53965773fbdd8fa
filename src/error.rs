//! # Error Types
//!
//! This module defines error types used throughout the briefprint library.

use thiserror::Error;

/// Main error type for briefprint operations
#[derive(Debug, Error)]
pub enum BriefprintError {
    /// Malformed raster input (width not a multiple of 8, length mismatch,
    /// empty or oversized image). Rejected before anything is emitted.
    #[error("Invalid raster: {0}")]
    InvalidRaster(String),

    /// Encoded polyline text that cannot be decoded
    #[error("Invalid polyline: {0}")]
    InvalidPolyline(String),

    /// QR encoding error (usually data too long for any QR version)
    #[error("QR error: {0}")]
    Qr(String),

    /// Transport-level errors (device open, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image load/save error
    #[error("Image error: {0}")]
    Image(String),

    /// Printer profile could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
