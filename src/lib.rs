//! # Briefprint - Receipt Document Renderer
//!
//! Briefprint turns short daily documents (briefings, activity summaries,
//! weather) into output for an ESC/POS receipt printer. It provides:
//!
//! - **Document sequencing**: text, alignment, emphasis, size, images,
//!   feeds and cuts, tracked by a single [`document::Sequencer`]
//! - **Two backends**: exact printer bytes, or a bordered text preview
//! - **Raster producers**: Floyd-Steinberg photos, route maps from encoded
//!   polylines, QR codes and built-in icons
//! - **Transport**: character-device output with raw TTY setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use briefprint::{
//!     document::Sequencer,
//!     printer::PrinterConfig,
//!     render::qr,
//!     transport::DeviceTransport,
//! };
//!
//! let config = PrinterConfig::default();
//! let mut doc = Sequencer::hardware(DeviceTransport::new("/dev/usb/lp0"), config);
//!
//! doc.init()
//!     .print_header("Morning Brief")
//!     .print_section_title("Today")
//!     .print_leader("Sunrise", "6:42 AM")
//!     .print_wrapped("Light rain clearing by noon, highs around 18\u{b0}C.");
//! doc.print_image(&qr::qr_bitmap("https://example.com")?)?;
//! doc.feed_and_cut();
//! doc.flush()?;
//!
//! # Ok::<(), briefprint::BriefprintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Sequencer, document state, sink trait |
//! | [`preview`] | Text-frame preview sink |
//! | [`protocol`] | ESC/POS command builders and text sanitizing |
//! | [`layout`] | Word wrap and dot-leader rows |
//! | [`render`] | Bitmaps, dithering, routes, QR codes, icons |
//! | [`stats`] | Duration, distance, pace and date formatting |
//! | [`transport`] | Byte delivery to the printer |
//! | [`printer`] | Printer configuration profiles |
//! | [`error`] | Error types |

pub mod document;
pub mod error;
pub mod layout;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod stats;
pub mod transport;

// Re-exports for convenience
pub use error::BriefprintError;
pub use printer::PrinterConfig;
