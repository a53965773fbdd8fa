//! # Text Sanitization
//!
//! Maps typographic Unicode punctuation to bytes the printer can render
//! with code page 858 selected, then drops everything else outside
//! printable ASCII.
//!
//! | Input | Output |
//! |-------|--------|
//! | ‘ ’ ‚ | `'` |
//! | “ ” „ | `"` |
//! | … | `...` |
//! | – — | `-` |
//! | ° | 0xF8 (CP858 degree sign) |
//! | NBSP | space |
//! | • | `*` |
//!
//! Sanitization never fails: unknown characters are removed.

/// Degree sign in code page 858
pub const CP858_DEGREE: u8 = 0xF8;

/// Convert text to protocol-safe bytes.
///
/// ## Example
///
/// ```
/// use briefprint::protocol::sanitize::sanitize;
///
/// assert_eq!(sanitize("“Hi” — 21°"), b"\"Hi\" - 21\xF8".to_vec());
/// assert_eq!(sanitize("café"), b"caf".to_vec());
/// ```
pub fn sanitize(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push(b'\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push(b'"'),
            '\u{2026}' => out.extend_from_slice(b"..."),
            '\u{2013}' | '\u{2014}' => out.push(b'-'),
            '\u{00B0}' => out.push(CP858_DEGREE),
            '\u{00A0}' => out.push(b' '),
            '\u{2022}' => out.push(b'*'),
            ' '..='~' | '\n' | '\r' => out.push(ch as u8),
            _ => {}
        }
    }
    out
}

/// Make text safe to show inside a terminal preview.
///
/// Control characters (including ESC) are dropped so document text cannot
/// inject terminal escape sequences; all other characters pass through.
pub fn terminal_safe(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
