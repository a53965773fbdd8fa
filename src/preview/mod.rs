//! # Text Preview
//!
//! [`PreviewSink`] renders a document as a bordered text frame instead of
//! printer bytes, for checking layouts without paper.
//!
//! ```text
//! +--------------------------------------------+
//! |               MORNING BRIEF                |
//! |                                            |
//! | WEATHER                                    |
//! | ------------------------------------------ |
//! | [icon]                                     |
//! +--------------------------------------------+
//!  \/  \/  \/  \/  \/  \/  \/  \/  \/  \/  \/
//! ```
//!
//! ## Row Rules
//!
//! - Text is made terminal-safe (control characters dropped), then truncated
//!   to the active columns: the page width, or half of it while a
//!   double-width size is active.
//! - Center alignment pads `floor((W - len) / 2)` spaces on the left, right
//!   alignment `W - len`; every row is then padded to `W`.
//! - Emphasized rows are wrapped in `ESC[1m ... ESC[0m`.
//! - Images become a single `[icon]` row; underline and cuts are not shown.
//!
//! Rows are buffered until [`Sink::flush`], which writes the whole frame and
//! clears the rows even when the writer fails.

use std::io::Write;

use log::debug;

use crate::document::{DocumentState, Sink};
use crate::error::BriefprintError;
use crate::protocol::sanitize::terminal_safe;
use crate::protocol::text::{Alignment, TextSize};
use crate::render::bitmap::Bitmap;

/// Placeholder row for raster images
pub const IMAGE_PLACEHOLDER: &str = "[icon]";

const BOLD_ON: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[0m";

/// Text-frame sink writing to any [`Write`].
#[derive(Debug)]
pub struct PreviewSink<W: Write> {
    writer: W,
    columns: usize,
    rows: Vec<String>,
}

impl<W: Write> PreviewSink<W> {
    /// Create a preview for a page `columns` characters wide.
    pub fn new(writer: W, columns: usize) -> Self {
        Self {
            writer,
            columns,
            rows: Vec::new(),
        }
    }

    /// Rows recorded since the last flush
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push_row(&mut self, text: &str, state: &DocumentState) {
        let row = render_row(text, state, self.columns);
        self.rows.push(row);
    }

    /// The complete frame for the current rows, newline-terminated.
    pub fn frame(&self) -> String {
        let border = format!("+{}+", "-".repeat(self.columns + 2));
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        for row in &self.rows {
            out.push_str("| ");
            out.push_str(row);
            out.push_str(" |\n");
        }
        out.push_str(&border);
        out.push('\n');
        out.push(' ');
        out.push_str("\\/  ".repeat(11).trim_end());
        out.push('\n');
        out
    }
}

/// Lay out one preview row.
fn render_row(text: &str, state: &DocumentState, columns: usize) -> String {
    let active = if state.size.is_wide() {
        columns / 2
    } else {
        columns
    };
    let content: String = terminal_safe(text).chars().take(active).collect();
    let len = content.chars().count();

    let pad = match state.alignment {
        Alignment::Left => 0,
        Alignment::Center => columns.saturating_sub(len) / 2,
        Alignment::Right => columns.saturating_sub(len),
    };
    let mut row = " ".repeat(pad);
    row.push_str(&content);
    let fill = columns.saturating_sub(pad + len);
    row.push_str(&" ".repeat(fill));

    if state.emphasis {
        format!("{}{}{}", BOLD_ON, row, BOLD_OFF)
    } else {
        row
    }
}

impl<W: Write> Sink for PreviewSink<W> {
    fn reset(&mut self) {}

    fn alignment(&mut self, _alignment: Alignment) {}

    fn emphasis(&mut self, _on: bool) {}

    fn underline(&mut self, _on: bool) {}

    fn size(&mut self, _size: TextSize) {}

    fn text_line(&mut self, text: &str, state: &DocumentState) {
        self.push_row(text, state);
    }

    fn line_feed(&mut self, lines: usize, state: &DocumentState) {
        for _ in 0..lines {
            self.push_row("", state);
        }
    }

    fn image(&mut self, _bitmap: &Bitmap, state: &DocumentState) -> Result<(), BriefprintError> {
        self.push_row(IMAGE_PLACEHOLDER, state);
        Ok(())
    }

    fn cut(&mut self) {}

    fn flush(&mut self) -> Result<(), BriefprintError> {
        let frame = self.frame();
        let count = self.rows.len();
        self.rows.clear();
        debug!("writing preview frame with {} rows", count);
        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
