//! # Document Tests
//!
//! End-to-end checks of complete documents: exact printer byte streams from
//! the hardware sink and exact frames from the preview sink.

use briefprint::document::{HardwareSink, Sequencer, Sink};
use briefprint::preview::PreviewSink;
use briefprint::protocol::text::{Alignment, TextSize};
use briefprint::render::bitmap::Bitmap;
use briefprint::render::{icons, qr, route::RouteRasterizer};
use briefprint::transport::Transport;
use briefprint::{BriefprintError, PrinterConfig};
use pretty_assertions::assert_eq;

const BOLD_ON: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[0m";

fn hardware() -> Sequencer<HardwareSink<Vec<u8>>> {
    Sequencer::hardware(Vec::new(), PrinterConfig::default())
}

fn flushed_bytes(mut doc: Sequencer<HardwareSink<Vec<u8>>>) -> Vec<u8> {
    doc.flush().unwrap();
    doc.into_sink().into_transport()
}

fn preview_output(mut doc: Sequencer<PreviewSink<Vec<u8>>>) -> String {
    doc.flush().unwrap();
    String::from_utf8(doc.into_sink().into_writer()).unwrap()
}

fn frame(rows: &[String]) -> String {
    let border = format!("+{}+", "-".repeat(44));
    let mut out = vec![border.clone()];
    out.extend(rows.iter().map(|r| format!("| {} |", r)));
    out.push(border);
    out.push(" \\/  \\/  \\/  \\/  \\/  \\/  \\/  \\/  \\/  \\/  \\/".to_string());
    out.join("\n") + "\n"
}

fn pad(text: &str) -> String {
    format!("{:<42}", text)
}

// ============================================================================
// HARDWARE BYTES
// ============================================================================

#[test]
fn test_hello_document_bytes() {
    let mut doc = hardware();
    doc.init().print_line("Hello").feed_and_cut();

    assert_eq!(
        flushed_bytes(doc),
        vec![
            0x1B, 0x40, // ESC @
            0x1B, 0x74, 0x13, // ESC t 19
            b'H', b'e', b'l', b'l', b'o', 0x0A, // text
            0x0A, 0x0A, 0x0A, // feed
            0x1D, 0x56, 0x41, 0x03, // GS V A 3
        ]
    );
}

#[test]
fn test_styled_line_bytes() {
    let mut doc = hardware();
    doc.set_alignment(Alignment::Right)
        .set_emphasis(true)
        .set_size(TextSize::DoubleWidth)
        .set_underline(true)
        .print_line("x");

    assert_eq!(
        flushed_bytes(doc),
        vec![
            0x1B, 0x61, 0x02, 0x1B, 0x45, 0x01, 0x1D, 0x21, 0x10, 0x1B, 0x2D, 0x01, b'x', 0x0A,
        ]
    );
}

#[test]
fn test_header_bytes() {
    let mut doc = hardware();
    doc.print_header("Hi");

    assert_eq!(
        flushed_bytes(doc),
        vec![
            0x1B, 0x61, 0x01, // center
            0x1B, 0x45, 0x01, // bold
            0x1D, 0x21, 0x01, // double height
            b'H', b'i', 0x0A, //
            0x1D, 0x21, 0x00, // normal
            0x1B, 0x45, 0x00, // bold off
            0x1B, 0x61, 0x00, // left
        ]
    );
}

#[test]
fn test_section_title_bytes() {
    let mut doc = hardware();
    doc.print_section_title("News");

    let mut expected = vec![0x0A, 0x1B, 0x45, 0x01, b'N', b'e', b'w', b's', 0x0A, 0x1B, 0x45, 0x00];
    expected.extend(vec![b'-'; 42]);
    expected.push(0x0A);
    assert_eq!(flushed_bytes(doc), expected);
}

#[test]
fn test_text_is_sanitized_on_the_wire() {
    let mut doc = hardware();
    doc.print_line("It\u{2019}s 21\u{b0}C\u{2026} caf\u{e9}");
    assert_eq!(flushed_bytes(doc), b"It's 21\xF8C... caf\n".to_vec());
}

#[test]
fn test_image_bytes() {
    let mut doc = hardware();
    let bmp = Bitmap::new(16, 1, vec![0xAA, 0x55]).unwrap();
    doc.print_image(&bmp).unwrap();
    assert_eq!(
        flushed_bytes(doc),
        vec![0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x01, 0x00, 0xAA, 0x55]
    );
}

#[test]
fn test_oversized_image_emits_nothing() {
    let mut doc = hardware();
    doc.print_line("a");
    let tall = Bitmap::new(8, 70_000, vec![0; 70_000]).unwrap();
    let err = doc.print_image(&tall).unwrap_err();
    assert!(matches!(err, BriefprintError::InvalidRaster(_)));
    assert_eq!(doc.sink().buffer(), b"a\n");
}

#[test]
fn test_generated_images_frame_correctly() {
    let route = RouteRasterizer::default()
        .render_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
        .unwrap()
        .unwrap();
    let code = qr::qr_bitmap("https://example.com").unwrap();
    let icon = icons::weather_icon(Some(801)).bitmap();

    for bmp in [&route, &code, &icon] {
        let mut doc = hardware();
        doc.print_image(bmp).unwrap();
        let bytes = flushed_bytes(doc);

        let x = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
        let y = u16::from_le_bytes([bytes[6], bytes[7]]) as usize;
        assert_eq!(&bytes[..4], &[0x1D, 0x76, 0x30, 0x00]);
        assert_eq!(x * 8, bmp.width());
        assert_eq!(y, bmp.height());
        assert_eq!(bytes.len(), 8 + x * y);
    }
}

#[test]
fn test_buffer_drains_once_per_flush() {
    let mut doc = hardware();
    doc.print_line("one");
    doc.flush().unwrap();
    doc.print_line("two");
    doc.flush().unwrap();
    doc.flush().unwrap();
    assert_eq!(doc.into_sink().into_transport(), b"one\ntwo\n".to_vec());
}

struct Unplugged {
    attempts: usize,
}

impl Transport for Unplugged {
    fn write_all(&mut self, _data: &[u8]) -> Result<(), BriefprintError> {
        self.attempts += 1;
        Err(BriefprintError::Transport("No such device".into()))
    }
}

#[test]
fn test_failed_flush_clears_buffer() {
    let mut doc = Sequencer::hardware(Unplugged { attempts: 0 }, PrinterConfig::default());
    doc.init().print_line("lost").feed_and_cut();

    assert!(matches!(doc.flush(), Err(BriefprintError::Transport(_))));
    assert!(doc.sink().buffer().is_empty());
    assert_eq!(doc.sink().transport().attempts, 1);
}

#[test]
fn test_custom_profile_bytes() {
    let config = PrinterConfig::from_json(r#"{ "code_page": 16, "feed_lines": 1, "cut_feed": 0 }"#)
        .unwrap();
    let mut doc = Sequencer::hardware(Vec::new(), config);
    doc.init().feed_and_cut();
    assert_eq!(
        flushed_bytes(doc),
        vec![0x1B, 0x40, 0x1B, 0x74, 0x10, 0x0A, 0x1D, 0x56, 0x41, 0x00]
    );
}

// ============================================================================
// PREVIEW FRAMES
// ============================================================================

#[test]
fn test_preview_briefing_frame() {
    let mut doc = Sequencer::preview(Vec::new(), PrinterConfig::default());
    doc.init()
        .print_header("BRIEF")
        .print_section_title("WEATHER")
        .print_leader("High", "18");
    doc.print_image(&icons::weather_icon(None).bitmap()).unwrap();
    doc.feed_and_cut();

    let expected = frame(&[
        format!("{}{}BRIEF{}{}", BOLD_ON, " ".repeat(18), " ".repeat(19), BOLD_OFF),
        pad(""),
        format!("{}{}{}", BOLD_ON, pad("WEATHER"), BOLD_OFF),
        "-".repeat(42),
        format!("High {} 18", ".".repeat(34)),
        pad("[icon]"),
        pad(""),
        pad(""),
        pad(""),
    ]);
    assert_eq!(preview_output(doc), expected);
}

#[test]
fn test_preview_section_title_rows() {
    let mut doc = Sequencer::preview(Vec::new(), PrinterConfig::default());
    doc.print_section_title("Calendar");
    assert_eq!(doc.sink().rows().len(), 3);
}

#[test]
fn test_preview_alignment_and_width() {
    let mut doc = Sequencer::preview(Vec::new(), PrinterConfig::default());
    doc.set_alignment(Alignment::Right)
        .print_line("end")
        .set_alignment(Alignment::Center)
        .set_size(TextSize::Double)
        .print_line(&"W".repeat(30));

    let expected = frame(&[
        format!("{}end", " ".repeat(39)),
        format!("{}{}{}", " ".repeat(10), "W".repeat(21), " ".repeat(11)),
    ]);
    assert_eq!(preview_output(doc), expected);
}

#[test]
fn test_preview_wrapped_paragraph() {
    let mut doc = Sequencer::preview(Vec::new(), PrinterConfig::default());
    doc.print_wrapped(
        "Light rain in the morning, clearing by early afternoon with a cool breeze.",
    );

    let expected = frame(&[
        pad("Light rain in the morning, clearing by"),
        pad("early afternoon with a cool breeze."),
    ]);
    assert_eq!(preview_output(doc), expected);
}

#[test]
fn test_preview_flush_resets_rows() {
    let mut doc = Sequencer::preview(Vec::new(), PrinterConfig::default());
    doc.print_line("first");
    doc.flush().unwrap();
    assert!(doc.sink().rows().is_empty());
    doc.flush().unwrap();

    let out = String::from_utf8(doc.into_sink().into_writer()).unwrap();
    assert_eq!(out, frame(&[pad("first")]) + &frame(&[]));
}

// ============================================================================
// SINK POLYMORPHISM
// ============================================================================

/// The same document builder drives any sink.
fn build<S: Sink>(doc: &mut Sequencer<S>) {
    doc.init().print_line("same").feed_and_cut();
}

#[test]
fn test_boxed_sinks_share_builder() {
    let config = PrinterConfig::default();
    let sinks: Vec<Box<dyn Sink>> = vec![
        Box::new(HardwareSink::new(Vec::new(), &config)),
        Box::new(PreviewSink::new(Vec::new(), config.columns)),
    ];

    for sink in sinks {
        let mut doc = Sequencer::new(sink, config.clone());
        build(&mut doc);
        assert_eq!(*doc.state(), Default::default());
        doc.flush().unwrap();
    }
}
