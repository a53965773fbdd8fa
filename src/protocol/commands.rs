//! # ESC/POS Protocol Commands
//!
//! This module implements the document-level commands of the ESC/POS-style
//! protocol spoken by common receipt printers.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC t n`, `GS V A n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, raster graphics and the cutter.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// every document so no style leaks in from a previous job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Emphasis and underline disabled
/// - Character size reset to 1x1
/// - Alignment reset to left
///
/// ## Example
///
/// ```
/// use briefprint::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Select Character Code Table (ESC t n)
///
/// Selects the code page used to interpret bytes 0x80-0xFF.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
/// | Decimal | 27 116 n |
///
/// ## Common Pages
///
/// | n | Code Page | Notes |
/// |---|-----------|-------|
/// | 0 | CP437 | US, box drawing |
/// | 19 (0x13) | CP858 | Western European + euro, degree sign at 0xF8 |
///
/// ## Example
///
/// ```
/// use briefprint::protocol::commands::{codepage, CP858};
///
/// assert_eq!(codepage(CP858), vec![0x1B, 0x74, 0x13]);
/// ```
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

/// Code page index of CP858
pub const CP858: u8 = 0x13;

// ============================================================================
// PAPER FEED AND CUTTER
// ============================================================================

/// # Line Feed (LF)
///
/// Prints the line buffer and advances one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Feed and Cut (GS V A n)
///
/// Feeds paper by `n` line units past the cutter, then cuts.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V A n   |
/// | Hex     | 1D 56 41 n |
/// | Decimal | 29 86 65 n |
///
/// ## Example
///
/// ```
/// use briefprint::protocol::commands;
///
/// assert_eq!(commands::feed_and_cut(3), vec![0x1D, 0x56, 0x41, 0x03]);
/// ```
#[inline]
pub fn feed_and_cut(n: u8) -> Vec<u8> {
    vec![GS, b'V', b'A', n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use briefprint::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(300), [0x2C, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
