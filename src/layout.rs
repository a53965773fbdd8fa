//! # Text Layout
//!
//! Greedy word wrapping and dot-leader rows for fixed-width receipt text.
//!
//! Widths are counted in `char`s of the text as given, before the hardware
//! sink sanitizes it. That matches printer columns for text that maps to one
//! byte per character. A `…` prints as three columns and characters with no
//! code page mapping print as nothing, so rows containing them come out
//! longer or shorter on paper than `page_width`.
//!
//! ## Leader Rows
//!
//! ```text
//! Distance ........................ 42.10 km
//! Moving Time ........................ 1h 5m
//! ```
//!
//! [`leader_line`] never splits its input. When `label` and `value` do not
//! fit on one row, splitting them is up to the caller; [`leader_rows`]
//! implements the usual policy (label alone, then an indented leader row
//! carrying the value).

/// Greedily wrap `text` into lines of at most `max_width` characters.
///
/// Words are separated by single spaces; runs of spaces collapse. A word
/// longer than `max_width` is kept whole on its own line.
///
/// ## Example
///
/// ```
/// use briefprint::layout::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
/// assert_eq!(wrap("supercalifragilistic is long", 8),
///            vec!["supercalifragilistic", "is long"]);
/// ```
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= max_width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Right-align `value` against `label` with a dot leader.
///
/// The row is `label`, a space, the dots, a space, then `value`. When the
/// pair fits (`label + value + 2 <= page_width`) the row is exactly
/// `page_width` characters; at the tightest fit the two spaces alone fill
/// the gap. Rows that do not fit keep a single dot and overflow.
///
/// Characters are counted before sanitizing (see the module docs).
///
/// ## Example
///
/// ```
/// use briefprint::layout::leader_line;
///
/// assert_eq!(leader_line("Avg HR", "142 bpm", 20), "Avg HR ..... 142 bpm");
/// ```
pub fn leader_line(label: &str, value: &str, page_width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    let gap = page_width.saturating_sub(used);
    if gap == 2 {
        return format!("{}  {}", label, value);
    }
    let dots = gap.saturating_sub(2).max(1);
    format!("{} {} {}", label, ".".repeat(dots), value)
}

/// Lay out a statistic as one leader row, or two rows when it does not fit.
///
/// The overflow form puts `label` on its own line and the value on an
/// indented leader row.
pub fn leader_rows(label: &str, value: &str, page_width: usize) -> Vec<String> {
    if label.chars().count() + value.chars().count() + 2 > page_width {
        vec![label.to_string(), leader_line("    ", value, page_width)]
    } else {
        vec![leader_line(label, value, page_width)]
    }
}

// ============================================================================
// TESTS
// ============================================================================
