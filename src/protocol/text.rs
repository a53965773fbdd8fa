//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Emphasis | ESC E n | **Bold** text |
//! | Underline | ESC - n | Underlined text |
//! | Alignment | ESC a n | Left / center / right |
//! | Size | GS ! n | Double height and/or width |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines and raster images.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use briefprint::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS / UNDERLINE
// ============================================================================

/// # Emphasized Printing (ESC E n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC E n  |
/// | Hex     | 1B 45 n  |
///
/// `n = 1` turns emphasis on, `n = 0` off.
pub fn emphasis(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// # Underline Mode (ESC - n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC - n  |
/// | Hex     | 1B 2D n  |
///
/// Only the 1-dot underline is used.
pub fn underline(on: bool) -> Vec<u8> {
    vec![ESC, b'-', on as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size multiplier
///
/// The discriminant is the `GS !` mode byte: high nibble is the width
/// multiplier, low nibble the height multiplier (both zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    #[default]
    Normal = 0x00,
    DoubleHeight = 0x01,
    DoubleWidth = 0x10,
    Double = 0x11,
}

impl TextSize {
    /// Whether characters take two columns each
    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(self, Self::DoubleWidth | Self::Double)
    }
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS ! n   |
/// | Hex     | 1D 21 n  |
/// | Decimal | 29 33 n  |
///
/// ## Size Table
///
/// | n | Effect |
/// |---|--------|
/// | 0x00 | Normal |
/// | 0x01 | Double height |
/// | 0x10 | Double width |
/// | 0x11 | Double width and height |
///
/// ## Example
///
/// ```
/// use briefprint::protocol::text::{size, TextSize};
///
/// assert_eq!(size(TextSize::Double), vec![0x1D, 0x21, 0x11]);
/// ```
pub fn size(size: TextSize) -> Vec<u8> {
    vec![GS, b'!', size as u8]
}

// ============================================================================
// TESTS
// ============================================================================
