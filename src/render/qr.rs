//! # QR Code Rasterization
//!
//! Expands a QR module matrix into a 1-bit bitmap, each dark module becoming
//! a `module_size × module_size` block.
//!
//! ```text
//! module matrix (n × n)          bitmap (n·m rounded up to 8) × n·m
//! ┌─┬─┬─┐                         ███░░░███░
//! │█│ │█│        m = 3            ███░░░███░
//! ├─┼─┼─┤       ──────►           ███░░░███░
//! │ │█│ │                         ░░░███░░░░
//! ```
//!
//! Text is encoded with the `qrcode` crate at error-correction level L,
//! which keeps codes small enough for a receipt footer.

use qrcode::{Color, EcLevel, QrCode};

use super::bitmap::{Bitmap, PixelGrid};
use crate::error::BriefprintError;

/// Default pixel size of one module
pub const DEFAULT_MODULE_SIZE: usize = 3;

/// Square grid of QR modules, `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build from rows of modules. Rows must form a square.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, BriefprintError> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return Err(BriefprintError::InvalidRaster(format!(
                "QR matrix must be square ({} rows)",
                size
            )));
        }
        Ok(Self {
            size,
            modules: rows.concat(),
        })
    }

    /// Encode `text` as a QR code (error correction level L).
    ///
    /// ## Example
    ///
    /// ```
    /// use briefprint::render::qr::ModuleMatrix;
    ///
    /// let matrix = ModuleMatrix::encode("hello").unwrap();
    /// assert_eq!(matrix.size(), 21); // version 1
    /// ```
    pub fn encode(text: &str) -> Result<Self, BriefprintError> {
        let code = QrCode::with_error_correction_level(text, EcLevel::L)
            .map_err(|e| BriefprintError::Qr(e.to_string()))?;
        Ok(Self {
            size: code.width(),
            modules: code
                .to_colors()
                .into_iter()
                .map(|c| c == Color::Dark)
                .collect(),
        })
    }

    /// Modules per side
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }
}

/// Rasterize a module matrix.
///
/// Width is `size * module_size` rounded up to a multiple of 8 (extra
/// columns blank); height is exactly `size * module_size`.
///
/// ## Errors
///
/// [`BriefprintError::InvalidRaster`] for an empty matrix, a zero module
/// size, or a side longer than 65535 dots.
pub fn rasterize_qr(matrix: &ModuleMatrix, module_size: usize) -> Result<Bitmap, BriefprintError> {
    if matrix.size() == 0 || module_size == 0 {
        return Err(BriefprintError::InvalidRaster(format!(
            "cannot rasterize {}x{} QR matrix at module size {}",
            matrix.size(),
            matrix.size(),
            module_size
        )));
    }

    let side = matrix
        .size()
        .checked_mul(module_size)
        .filter(|&side| side <= u16::MAX as usize)
        .ok_or_else(|| {
            BriefprintError::InvalidRaster(format!(
                "{} modules at module size {} exceed the raster size limit",
                matrix.size(),
                module_size
            ))
        })?;
    let mut grid = PixelGrid::new(side, side);
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            if matrix.get(row, col) {
                grid.fill_rect(
                    (col * module_size) as i64,
                    (row * module_size) as i64,
                    module_size,
                    module_size,
                );
            }
        }
    }
    grid.into_bitmap()
}

/// Encode `text` and rasterize it at the default module size.
pub fn qr_bitmap(text: &str) -> Result<Bitmap, BriefprintError> {
    rasterize_qr(&ModuleMatrix::encode(text)?, DEFAULT_MODULE_SIZE)
}

// ============================================================================
// TESTS
// ============================================================================
