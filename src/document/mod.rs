//! # Document Sequencer
//!
//! A [`Sequencer`] turns layout operations into output for one document. It
//! owns the [`DocumentState`] (alignment, emphasis, size, underline) and a
//! single [`Sink`] chosen at construction:
//!
//! | Constructor | Sink | Output |
//! |-------------|------|--------|
//! | [`Sequencer::hardware`] | [`HardwareSink`] | ESC/POS bytes sent to a [`Transport`] |
//! | [`Sequencer::preview`] | [`PreviewSink`] | Bordered text frame written to any `io::Write` |
//! | [`Sequencer::new`] | any [`Sink`] | Whatever the sink produces |
//!
//! Operations chain and only [`Sequencer::flush`] (and
//! [`Sequencer::print_image`], which validates its raster) can fail:
//!
//! ```
//! use briefprint::document::Sequencer;
//! use briefprint::printer::PrinterConfig;
//!
//! let mut doc = Sequencer::hardware(Vec::new(), PrinterConfig::default());
//! doc.init().print_line("Hello").feed_and_cut();
//! doc.flush()?;
//!
//! let bytes = doc.into_sink().into_transport();
//! assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x74, 0x13]);
//! assert_eq!(&bytes[bytes.len() - 4..], &[0x1D, 0x56, 0x41, 0x03]);
//! # Ok::<(), briefprint::BriefprintError>(())
//! ```
//!
//! State only changes through explicit directives; composite operations such
//! as [`Sequencer::print_header`] restore what they change to fixed values
//! (left, normal, emphasis off), not to the previous state.

mod hardware;
mod sink;

pub use hardware::HardwareSink;
pub use sink::Sink;

use std::io::Write;

use crate::error::BriefprintError;
use crate::layout;
use crate::preview::PreviewSink;
use crate::printer::PrinterConfig;
use crate::protocol::text::{Alignment, TextSize};
use crate::render::bitmap::Bitmap;
use crate::transport::Transport;

/// Formatting in effect for the next content directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentState {
    pub alignment: Alignment,
    pub emphasis: bool,
    pub size: TextSize,
    pub underline: bool,
}

/// Builds one document against one sink.
#[derive(Debug)]
pub struct Sequencer<S: Sink> {
    sink: S,
    state: DocumentState,
    config: PrinterConfig,
}

impl<T: Transport> Sequencer<HardwareSink<T>> {
    /// Sequencer producing printer bytes for `transport`.
    pub fn hardware(transport: T, config: PrinterConfig) -> Self {
        let sink = HardwareSink::new(transport, &config);
        Self::new(sink, config)
    }
}

impl<W: Write> Sequencer<PreviewSink<W>> {
    /// Sequencer producing a text preview on `writer`.
    pub fn preview(writer: W, config: PrinterConfig) -> Self {
        let sink = PreviewSink::new(writer, config.columns);
        Self::new(sink, config)
    }
}

impl<S: Sink> Sequencer<S> {
    pub fn new(sink: S, config: PrinterConfig) -> Self {
        Self {
            sink,
            state: DocumentState::default(),
            config,
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Characters per line at the active text size.
    pub fn active_columns(&self) -> usize {
        if self.state.size.is_wide() {
            self.config.wide_columns()
        } else {
            self.config.columns
        }
    }

    // ========================================================================
    // STATE DIRECTIVES
    // ========================================================================

    /// Start the document: reset the printer and select the code page.
    ///
    /// State returns to defaults.
    pub fn init(&mut self) -> &mut Self {
        self.state = DocumentState::default();
        self.sink.reset();
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.state.alignment = alignment;
        self.sink.alignment(alignment);
        self
    }

    pub fn set_emphasis(&mut self, on: bool) -> &mut Self {
        self.state.emphasis = on;
        self.sink.emphasis(on);
        self
    }

    pub fn set_size(&mut self, size: TextSize) -> &mut Self {
        self.state.size = size;
        self.sink.size(size);
        self
    }

    pub fn set_underline(&mut self, on: bool) -> &mut Self {
        self.state.underline = on;
        self.sink.underline(on);
        self
    }

    // ========================================================================
    // CONTENT
    // ========================================================================

    /// Emit `lines` empty lines.
    pub fn line_feed(&mut self, lines: usize) -> &mut Self {
        self.sink.line_feed(lines, &self.state);
        self
    }

    /// Emit one line of text.
    pub fn print_line(&mut self, text: &str) -> &mut Self {
        self.sink.text_line(text, &self.state);
        self
    }

    /// Word-wrap `text` to the page width and print each line.
    pub fn print_wrapped(&mut self, text: &str) -> &mut Self {
        let width = self.config.columns;
        self.print_wrapped_width(text, width)
    }

    pub fn print_wrapped_width(&mut self, text: &str, max_width: usize) -> &mut Self {
        for line in layout::wrap(text, max_width) {
            self.print_line(&line);
        }
        self
    }

    /// A full-width row of `ch`.
    pub fn print_divider(&mut self, ch: char) -> &mut Self {
        let line: String = std::iter::repeat_n(ch, self.config.columns).collect();
        self.print_line(&line)
    }

    /// Centered, emphasized, double-height title.
    ///
    /// Leaves the document left-aligned at normal size with emphasis off.
    pub fn print_header(&mut self, text: &str) -> &mut Self {
        self.set_alignment(Alignment::Center)
            .set_emphasis(true)
            .set_size(TextSize::DoubleHeight)
            .print_line(text)
            .set_size(TextSize::Normal)
            .set_emphasis(false)
            .set_alignment(Alignment::Left)
    }

    /// Blank line, emphasized title, dashed divider.
    pub fn print_section_title(&mut self, text: &str) -> &mut Self {
        self.line_feed(1)
            .set_emphasis(true)
            .print_line(text)
            .set_emphasis(false)
            .print_divider('-')
    }

    /// A statistic as a dot-leader row, split over two rows when it does not
    /// fit the page.
    pub fn print_leader(&mut self, label: &str, value: &str) -> &mut Self {
        for row in layout::leader_rows(label, value, self.config.columns) {
            self.print_line(&row);
        }
        self
    }

    /// Emit a raster image.
    ///
    /// ## Errors
    ///
    /// [`BriefprintError::InvalidRaster`] if the bitmap cannot be framed;
    /// nothing is emitted in that case.
    pub fn print_image(&mut self, bitmap: &Bitmap) -> Result<&mut Self, BriefprintError> {
        self.sink.image(bitmap, &self.state)?;
        Ok(self)
    }

    /// Feed the configured number of lines, then cut.
    pub fn feed_and_cut(&mut self) -> &mut Self {
        let lines = self.config.feed_lines;
        self.line_feed(lines);
        self.sink.cut();
        self
    }

    /// Deliver the document.
    ///
    /// The sink's recorded output is discarded even when delivery fails, so
    /// a failed flush is never retried implicitly.
    pub fn flush(&mut self) -> Result<(), BriefprintError> {
        self.sink.flush()
    }
}

// ============================================================================
// TESTS
// ============================================================================
