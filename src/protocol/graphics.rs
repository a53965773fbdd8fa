//! # ESC/POS Raster Graphics
//!
//! This module frames packed 1-bit bitmaps with the raster bit image
//! command.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal)
//!   │
//!   │   ████████  ← Each dot is ~0.125mm (203 DPI)
//!   │   ████████
//!   ▼
//!   Y (vertical, paper feed direction)
//! ```
//!
//! Bit packing is described in [`crate::render::bitmap`].

use super::commands::{GS, u16_le};
use crate::error::BriefprintError;
use crate::render::bitmap::Bitmap;

/// Raster mode byte: normal density (no double width/height scaling)
pub const RASTER_MODE_NORMAL: u8 = 0x00;

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Builds the 8-byte header for a raster image.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
/// | Decimal | 29 118 48 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal)
/// - `xL, xH`: Bytes per row (little-endian)
/// - `yL, yH`: Height in dots (little-endian)
/// - `d1...dk`: Image data, k = bytes per row × height
///
/// ## Errors
///
/// Returns [`BriefprintError::InvalidRaster`] when bytes per row or the
/// height do not fit the 16-bit fields.
///
/// ## Example
///
/// ```
/// use briefprint::protocol::graphics::frame_raster_image;
/// use briefprint::render::bitmap::Bitmap;
///
/// let bmp = Bitmap::new(384, 300, vec![0; 48 * 300]).unwrap();
/// let header = frame_raster_image(&bmp).unwrap();
/// assert_eq!(header, vec![0x1D, 0x76, 0x30, 0x00, 48, 0, 0x2C, 0x01]);
/// ```
pub fn frame_raster_image(bitmap: &Bitmap) -> Result<Vec<u8>, BriefprintError> {
    let bytes_per_row = u16::try_from(bitmap.bytes_per_row()).map_err(|_| {
        BriefprintError::InvalidRaster(format!(
            "{} bytes per row exceeds the raster header limit",
            bitmap.bytes_per_row()
        ))
    })?;
    let height = u16::try_from(bitmap.height()).map_err(|_| {
        BriefprintError::InvalidRaster(format!(
            "height {} exceeds the raster header limit",
            bitmap.height()
        ))
    })?;

    let mut cmd = Vec::with_capacity(8);
    cmd.extend([GS, b'v', b'0', RASTER_MODE_NORMAL]);
    cmd.extend(u16_le(bytes_per_row));
    cmd.extend(u16_le(height));
    Ok(cmd)
}

/// Header followed by the packed image data.
pub fn raster_image(bitmap: &Bitmap) -> Result<Vec<u8>, BriefprintError> {
    let mut cmd = frame_raster_image(bitmap)?;
    cmd.reserve(bitmap.data().len());
    cmd.extend_from_slice(bitmap.data());
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let bmp = Bitmap::new(24, 24, vec![0; 72]).unwrap();
        assert_eq!(
            frame_raster_image(&bmp).unwrap(),
            vec![0x1D, 0x76, 0x30, 0x00, 3, 0, 24, 0]
        );
    }

    #[test]
    fn test_header_multibyte_height() {
        let bmp = Bitmap::new(8, 513, vec![0; 513]).unwrap();
        let header = frame_raster_image(&bmp).unwrap();
        assert_eq!(&header[4..8], &[1, 0, 0x01, 0x02]);
    }

    #[test]
    fn test_raster_image_appends_data() {
        let bmp = Bitmap::new(16, 1, vec![0xAB, 0xCD]).unwrap();
        let cmd = raster_image(&bmp).unwrap();
        assert_eq!(cmd.len(), 10);
        assert_eq!(&cmd[8..], &[0xAB, 0xCD]);
    }

    #[test]
    fn test_height_overflow_rejected() {
        let bmp = Bitmap::new(8, 70_000, vec![0; 70_000]).unwrap();
        assert!(matches!(
            frame_raster_image(&bmp),
            Err(BriefprintError::InvalidRaster(_))
        ));
    }
}
