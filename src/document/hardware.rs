//! # Hardware Sink
//!
//! Accumulates ESC/POS bytes in memory and hands the whole document to a
//! [`Transport`] on flush.
//!
//! ```text
//! reset ─► 1B 40 1B 74 13
//! text  ─► sanitize(text + "\n")
//! image ─► 1D 76 30 00 xL xH yL yH <data>
//! cut   ─► 1D 56 41 03
//! flush ─► transport.write_all(buffer)   (buffer is empty afterwards)
//! ```

use log::debug;

use super::{DocumentState, Sink};
use crate::error::BriefprintError;
use crate::printer::PrinterConfig;
use crate::protocol::sanitize::sanitize;
use crate::protocol::text::{self, Alignment, TextSize};
use crate::protocol::{commands, graphics};
use crate::render::bitmap::Bitmap;
use crate::transport::Transport;

/// Byte-accumulating sink for a real printer.
#[derive(Debug)]
pub struct HardwareSink<T: Transport> {
    transport: T,
    buffer: Vec<u8>,
    code_page: u8,
    cut_feed: u8,
}

impl<T: Transport> HardwareSink<T> {
    pub fn new(transport: T, config: &PrinterConfig) -> Self {
        Self {
            transport,
            buffer: Vec::new(),
            code_page: config.code_page,
            cut_feed: config.cut_feed,
        }
    }

    /// Bytes recorded since the last flush
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: Transport> Sink for HardwareSink<T> {
    fn reset(&mut self) {
        self.buffer.extend(commands::init());
        self.buffer.extend(commands::codepage(self.code_page));
    }

    fn alignment(&mut self, alignment: Alignment) {
        self.buffer.extend(text::align(alignment));
    }

    fn emphasis(&mut self, on: bool) {
        self.buffer.extend(text::emphasis(on));
    }

    fn underline(&mut self, on: bool) {
        self.buffer.extend(text::underline(on));
    }

    fn size(&mut self, size: TextSize) {
        self.buffer.extend(text::size(size));
    }

    fn text_line(&mut self, line: &str, _state: &DocumentState) {
        self.buffer.extend(sanitize(line));
        self.buffer.extend(commands::line_feed());
    }

    fn line_feed(&mut self, lines: usize, _state: &DocumentState) {
        for _ in 0..lines {
            self.buffer.extend(commands::line_feed());
        }
    }

    fn image(&mut self, bitmap: &Bitmap, _state: &DocumentState) -> Result<(), BriefprintError> {
        self.buffer.extend(graphics::raster_image(bitmap)?);
        Ok(())
    }

    fn cut(&mut self) {
        self.buffer.extend(commands::feed_and_cut(self.cut_feed));
    }

    fn flush(&mut self) -> Result<(), BriefprintError> {
        let data = std::mem::take(&mut self.buffer);
        debug!("flushing {} bytes to transport", data.len());
        self.transport.write_all(&data)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn write_all(&mut self, _data: &[u8]) -> Result<(), BriefprintError> {
            Err(BriefprintError::Transport("device unplugged".into()))
        }
    }

    fn sink() -> HardwareSink<Vec<u8>> {
        HardwareSink::new(Vec::new(), &PrinterConfig::default())
    }

    #[test]
    fn test_reset_bytes() {
        let mut s = sink();
        s.reset();
        assert_eq!(s.buffer(), &[0x1B, 0x40, 0x1B, 0x74, 0x13]);
    }

    #[test]
    fn test_reset_uses_configured_code_page() {
        let config = PrinterConfig {
            code_page: 0x10,
            ..PrinterConfig::default()
        };
        let mut s = HardwareSink::new(Vec::new(), &config);
        s.reset();
        assert_eq!(s.buffer(), &[0x1B, 0x40, 0x1B, 0x74, 0x10]);
    }

    #[test]
    fn test_text_line_is_sanitized() {
        let mut s = sink();
        s.text_line("21\u{b0}C \u{2014} \u{201c}ok\u{201d}", &DocumentState::default());
        assert_eq!(s.buffer(), b"21\xF8C - \"ok\"\n");
    }

    #[test]
    fn test_line_feed_count() {
        let mut s = sink();
        s.line_feed(3, &DocumentState::default());
        assert_eq!(s.buffer(), &[0x0A, 0x0A, 0x0A]);
        s.line_feed(0, &DocumentState::default());
        assert_eq!(s.buffer().len(), 3);
    }

    #[test]
    fn test_image_header_and_data() {
        let mut s = sink();
        let bmp = Bitmap::new(16, 2, vec![0xFF, 0x00, 0x0F, 0xF0]).unwrap();
        s.image(&bmp, &DocumentState::default()).unwrap();
        assert_eq!(
            s.buffer(),
            &[0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x02, 0x00, 0xFF, 0x00, 0x0F, 0xF0]
        );
    }

    #[test]
    fn test_cut_uses_configured_feed() {
        let config = PrinterConfig {
            cut_feed: 5,
            ..PrinterConfig::default()
        };
        let mut s = HardwareSink::new(Vec::new(), &config);
        s.cut();
        assert_eq!(s.buffer(), &[0x1D, 0x56, 0x41, 0x05]);
    }

    #[test]
    fn test_flush_hands_over_everything_once() {
        let mut s = sink();
        s.emphasis(true);
        s.text_line("Hi", &DocumentState::default());
        s.flush().unwrap();
        assert!(s.buffer().is_empty());
        assert_eq!(s.transport(), &vec![0x1B, 0x45, 0x01, b'H', b'i', 0x0A]);

        s.flush().unwrap();
        assert_eq!(s.transport().len(), 6);
    }

    #[test]
    fn test_flush_clears_buffer_on_failure() {
        let mut s = HardwareSink::new(FailingTransport, &PrinterConfig::default());
        s.text_line("lost", &DocumentState::default());
        assert!(matches!(s.flush(), Err(BriefprintError::Transport(_))));
        assert!(s.buffer().is_empty());
    }
}
