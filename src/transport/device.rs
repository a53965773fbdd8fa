//! # Device File Transport
//!
//! Writes documents to a printer exposed as a character device:
//! a USB printer class node (`/dev/usb/lp0`), a USB serial adapter
//! (`/dev/ttyUSB0`) or a bound RFCOMM port (`/dev/rfcomm0`).
//!
//! ## Scoped Acquisition
//!
//! The device is opened at the start of [`DeviceTransport::write_all`] and
//! closed when the call returns, on success or failure. Nothing is held
//! between documents, so another process can use the printer in between.
//!
//! ## TTY Configuration
//!
//! When the device is a terminal it is switched to raw mode before writing
//! so binary raster data is transmitted without modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No flow control**: IXON, IXOFF, IXANY (0x11/0x13 occur in raster data)
//! - **No output processing**: OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN off
//!
//! `lp` nodes are not terminals and are written as-is. A regular file
//! path is created if missing and replaced on every write, so it always
//! holds exactly the last document.
//!
//! ## Chunked Writes
//!
//! Large documents are written in 4096-byte chunks with a short pause
//! between them so slow serial links do not overflow the printer buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::debug;

use super::Transport;
use crate::error::BriefprintError;

/// Default printer device path
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Printer Transport
///
/// ## Example
///
/// ```no_run
/// use briefprint::transport::{DeviceTransport, Transport};
/// use briefprint::protocol::commands;
///
/// let mut transport = DeviceTransport::new("/dev/usb/lp0");
/// transport.write_all(&commands::init())?;
///
/// # Ok::<(), briefprint::error::BriefprintError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeviceTransport {
    path: PathBuf,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Create a transport for `path`. The device is not touched until the
    /// first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the chunk size for large writes. Zero is treated as one byte.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    fn write_chunked<W: Write>(&self, out: &mut W, data: &[u8]) -> io::Result<()> {
        if data.len() <= self.chunk_size {
            out.write_all(data)?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                out.write_all(chunk)?;
                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }
        out.flush()
    }
}

impl Default for DeviceTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl Transport for DeviceTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), BriefprintError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| {
                BriefprintError::Transport(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        configure_if_tty(&file)?;

        debug!("writing {} bytes to {}", data.len(), self.path.display());
        self.write_chunked(&mut file, data).map_err(|e| {
            BriefprintError::Transport(format!("Write to {} failed: {}", self.path.display(), e))
        })
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &std::fs::File) -> Result<(), BriefprintError> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } == 1 {
        configure_tty_raw(fd)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &std::fs::File) -> Result<(), BriefprintError> {
    Ok(())
}

/// Put a terminal file descriptor into raw mode.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), BriefprintError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(BriefprintError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(BriefprintError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
