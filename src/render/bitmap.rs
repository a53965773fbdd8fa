//! # 1-bit Raster Bitmaps
//!
//! Packed bitmaps are the common currency between the raster producers
//! (dithering, route maps, QR codes, icons) and the document sequencer.
//!
//! ## Bit Packing
//!
//! - Bit 7 (MSB) = leftmost pixel
//! - Bit 0 (LSB) = rightmost pixel
//! - 1 = black (print dot), 0 = white (no dot)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! ## Width Invariant
//!
//! A [`Bitmap`] is always a whole number of bytes wide. Producers that work
//! with arbitrary pixel widths round up to the next multiple of 8 and leave
//! the extra columns blank ([`padded_width`]).

use crate::error::BriefprintError;

/// Round a pixel width up to the next multiple of 8.
#[inline]
pub fn padded_width(width: usize) -> usize {
    width.div_ceil(8) * 8
}

/// Pack a row of boolean pixel values into bytes.
///
/// Converts a slice of bool values (true = black, false = white) into
/// a byte array suitable for raster commands.
///
/// ## Padding
///
/// If the row length is not a multiple of 8, the last byte is padded
/// with zeros (white) on the right.
///
/// ## Example
///
/// ```
/// use briefprint::render::bitmap::pack_row;
///
/// // 8 pixels pack into 1 byte
/// let row = vec![true, true, true, true, false, false, false, false];
/// assert_eq!(pack_row(&row), vec![0xF0]);
///
/// // 12 pixels pack into 2 bytes (4 bits padding)
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

/// Unpack `width` pixels from a packed row.
///
/// Bits past the end of `bytes` read as white.
pub fn unpack_row(bytes: &[u8], width: usize) -> Vec<bool> {
    (0..width)
        .map(|x| {
            bytes
                .get(x / 8)
                .is_some_and(|b| (b >> (7 - (x % 8))) & 1 == 1)
        })
        .collect()
}

// ============================================================================
// BITMAP
// ============================================================================

/// # Packed 1-bit Bitmap
///
/// Immutable once built. `data` holds `width / 8 * height` bytes, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Build a bitmap from already packed bytes.
    ///
    /// ## Errors
    ///
    /// Returns [`BriefprintError::InvalidRaster`] if:
    /// - `width` is zero or not a multiple of 8
    /// - `height` is zero
    /// - `data.len()` differs from `width / 8 * height`
    ///
    /// ## Example
    ///
    /// ```
    /// use briefprint::render::bitmap::Bitmap;
    ///
    /// let bmp = Bitmap::new(16, 2, vec![0xFF, 0x00, 0x00, 0xFF]).unwrap();
    /// assert_eq!(bmp.bytes_per_row(), 2);
    /// assert!(Bitmap::new(12, 2, vec![0; 4]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BriefprintError> {
        if width == 0 || height == 0 {
            return Err(BriefprintError::InvalidRaster(format!(
                "empty bitmap ({}x{})",
                width, height
            )));
        }
        if width % 8 != 0 {
            return Err(BriefprintError::InvalidRaster(format!(
                "width {} is not a multiple of 8",
                width
            )));
        }
        let expected = width / 8 * height;
        if data.len() != expected {
            return Err(BriefprintError::InvalidRaster(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from parts already known to be consistent (built-in tables).
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert!(
            width % 8 == 0 && data.len() == width / 8 * height,
            "inconsistent bitmap parts: {}x{} with {} bytes",
            width,
            height,
            data.len()
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Pack rows of boolean pixels.
    ///
    /// Every row must have the same length, which must be a multiple of 8.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, BriefprintError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(BriefprintError::InvalidRaster(format!(
                "row {} has {} pixels, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        if width % 8 != 0 {
            return Err(BriefprintError::InvalidRaster(format!(
                "width {} is not a multiple of 8",
                width
            )));
        }
        let data = rows.iter().flat_map(|r| pack_row(r)).collect();
        Self::new(width, rows.len(), data)
    }

    /// Width in pixels (multiple of 8)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.width / 8
    }

    /// Packed pixel data, row-major
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the pixel at `(x, y)` is black. Out of range reads as white.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y * self.bytes_per_row() + x / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }

    /// Unpack the bitmap back into rows of booleans.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.data
            .chunks(self.bytes_per_row())
            .map(|row| unpack_row(row, self.width))
            .collect()
    }

    /// Number of black pixels
    pub fn ink_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

// ============================================================================
// PIXEL GRID
// ============================================================================

/// Mutable boolean canvas used while rasterizing.
///
/// The grid is created at its padded width, so [`PixelGrid::into_bitmap`]
/// always satisfies the bitmap width invariant.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl PixelGrid {
    /// Create a blank grid. `width` is rounded up to a multiple of 8.
    pub fn new(width: usize, height: usize) -> Self {
        let width = padded_width(width);
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Mark a pixel black. Coordinates outside the grid are clipped.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = true;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Fill a `w × h` block with its top-left corner at `(x, y)`.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: usize, h: usize) {
        for dy in 0..h as i64 {
            for dx in 0..w as i64 {
                self.set(x + dx, y + dy);
            }
        }
    }

    /// Pack the grid row by row.
    pub fn into_bitmap(self) -> Result<Bitmap, BriefprintError> {
        let data = self
            .pixels
            .chunks(self.width.max(1))
            .flat_map(pack_row)
            .collect();
        Bitmap::new(self.width, self.height, data)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_8_pixels() {
        assert_eq!(pack_row(&[true; 8]), vec![0xFF]);
        assert_eq!(pack_row(&[false; 8]), vec![0x00]);
        assert_eq!(
            pack_row(&[true, false, true, false, true, false, true, false]),
            vec![0xAA]
        );
    }

    #[test]
    fn test_pack_row_padding() {
        assert_eq!(pack_row(&[true, true, true, true]), vec![0xF0]);

        let packed = pack_row(&[true; 9]);
        assert_eq!(packed, vec![0xFF, 0x80]);
    }

    #[test]
    fn test_pack_row_empty() {
        assert_eq!(pack_row(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let row: Vec<bool> = (0..24).map(|i| i % 3 == 0 || i % 7 == 1).collect();
        assert_eq!(unpack_row(&pack_row(&row), 24), row);
    }

    #[test]
    fn test_rows_lossless() {
        let rows: Vec<Vec<bool>> = (0..5)
            .map(|y| (0..16).map(|x| (x * y) % 5 == 1).collect())
            .collect();
        let bmp = Bitmap::from_rows(&rows).unwrap();
        assert_eq!(bmp.width(), 16);
        assert_eq!(bmp.height(), 5);
        assert_eq!(bmp.data().len(), 10);
        assert_eq!(bmp.to_rows(), rows);
    }

    #[test]
    fn test_rejects_unaligned_width() {
        let err = Bitmap::new(10, 1, vec![0, 0]).unwrap_err();
        assert!(matches!(err, BriefprintError::InvalidRaster(_)));

        let rows = vec![vec![true; 10]];
        assert!(Bitmap::from_rows(&rows).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(Bitmap::new(16, 2, vec![0; 3]).is_err());
        assert!(Bitmap::new(16, 2, vec![0; 5]).is_err());
        assert!(Bitmap::new(16, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Bitmap::new(0, 0, vec![]).is_err());
        assert!(Bitmap::new(8, 0, vec![]).is_err());
        assert!(Bitmap::from_rows(&[]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![true; 8], vec![true; 16]];
        assert!(Bitmap::from_rows(&rows).is_err());
    }

    #[test]
    fn test_pixel_lookup() {
        let bmp = Bitmap::new(8, 2, vec![0b1000_0001, 0b0100_0000]).unwrap();
        assert!(bmp.pixel(0, 0));
        assert!(bmp.pixel(7, 0));
        assert!(!bmp.pixel(1, 0));
        assert!(bmp.pixel(1, 1));
        assert!(!bmp.pixel(8, 0));
        assert!(!bmp.pixel(0, 2));
        assert_eq!(bmp.ink_count(), 3);
    }

    #[test]
    fn test_grid_pads_width() {
        let grid = PixelGrid::new(13, 2);
        assert_eq!(grid.width(), 16);
        let bmp = grid.into_bitmap().unwrap();
        assert_eq!(bmp.width(), 16);
        assert_eq!(bmp.data(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_grid_clips() {
        let mut grid = PixelGrid::new(8, 2);
        grid.set(-1, 0);
        grid.set(8, 0);
        grid.set(0, 2);
        grid.set(3, 1);
        assert!(grid.get(3, 1));
        let bmp = grid.into_bitmap().unwrap();
        assert_eq!(bmp.data(), &[0x00, 0x10]);
    }

    #[test]
    fn test_fill_rect() {
        let mut grid = PixelGrid::new(8, 3);
        grid.fill_rect(6, 1, 3, 3);
        let bmp = grid.into_bitmap().unwrap();
        assert_eq!(bmp.data(), &[0x00, 0x03, 0x03]);
    }

    #[test]
    fn test_padded_width() {
        assert_eq!(padded_width(0), 0);
        assert_eq!(padded_width(1), 8);
        assert_eq!(padded_width(8), 8);
        assert_eq!(padded_width(63), 64);
    }
}
