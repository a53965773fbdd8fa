//! # Output Sinks
//!
//! The [`Sink`] trait is the seam between the [`Sequencer`](super::Sequencer)
//! and its backend. The sequencer tracks [`DocumentState`] and forwards each
//! directive; a sink turns directives into bytes, preview rows, or anything
//! else.
//!
//! A new backend only needs a `Sink` impl. Call sites that build documents
//! through `Sequencer::new(sink, config)` do not change.

use crate::error::BriefprintError;
use crate::protocol::text::{Alignment, TextSize};
use crate::render::bitmap::Bitmap;

use super::DocumentState;

/// Backend for a [`Sequencer`](super::Sequencer).
///
/// State-changing directives receive only the new value; content directives
/// also receive the full [`DocumentState`] in effect when they were issued.
pub trait Sink {
    /// Start a fresh document (printer reset, code page selection).
    fn reset(&mut self);

    fn alignment(&mut self, alignment: Alignment);

    fn emphasis(&mut self, on: bool);

    fn underline(&mut self, on: bool);

    fn size(&mut self, size: TextSize);

    /// One line of text. `text` carries no trailing newline.
    fn text_line(&mut self, text: &str, state: &DocumentState);

    /// `lines` empty lines.
    fn line_feed(&mut self, lines: usize, state: &DocumentState);

    /// A raster image. Nothing is recorded when an error is returned.
    fn image(&mut self, bitmap: &Bitmap, state: &DocumentState) -> Result<(), BriefprintError>;

    /// Cut the paper at the current position.
    fn cut(&mut self);

    /// Deliver everything recorded since the last flush.
    ///
    /// Recorded content is discarded whether or not delivery succeeds.
    fn flush(&mut self) -> Result<(), BriefprintError>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn alignment(&mut self, alignment: Alignment) {
        (**self).alignment(alignment)
    }

    fn emphasis(&mut self, on: bool) {
        (**self).emphasis(on)
    }

    fn underline(&mut self, on: bool) {
        (**self).underline(on)
    }

    fn size(&mut self, size: TextSize) {
        (**self).size(size)
    }

    fn text_line(&mut self, text: &str, state: &DocumentState) {
        (**self).text_line(text, state)
    }

    fn line_feed(&mut self, lines: usize, state: &DocumentState) {
        (**self).line_feed(lines, state)
    }

    fn image(&mut self, bitmap: &Bitmap, state: &DocumentState) -> Result<(), BriefprintError> {
        (**self).image(bitmap, state)
    }

    fn cut(&mut self) {
        (**self).cut()
    }

    fn flush(&mut self) -> Result<(), BriefprintError> {
        (**self).flush()
    }
}
