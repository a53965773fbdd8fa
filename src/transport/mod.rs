//! # Printer Transport Layer
//!
//! Byte sinks that a finished document is handed to.
//!
//! ## Available Transports
//!
//! - [`DeviceTransport`]: character device such as `/dev/usb/lp0` or a
//!   serial TTY, opened for the duration of one write
//! - `Vec<u8>`: in-memory capture, used by tests
//!
//! A transport receives the whole document in a single
//! [`Transport::write_all`] call, so a document is either sent or not;
//! there are no partial writes between flushes.

pub mod device;

pub use device::{DEFAULT_DEVICE, DeviceTransport};

use crate::error::BriefprintError;

/// Destination for raw printer bytes.
pub trait Transport {
    /// Deliver `data` in full or fail.
    fn write_all(&mut self, data: &[u8]) -> Result<(), BriefprintError>;
}

impl Transport for Vec<u8> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), BriefprintError> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<(), BriefprintError> {
        (**self).write_all(data)
    }
}

// ============================================================================
// TESTS
// ============================================================================
