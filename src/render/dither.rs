//! # Floyd-Steinberg Error Diffusion
//!
//! This module converts grayscale images to 1-bit bitmaps suitable for
//! thermal printers.
//!
//! ## Algorithm
//!
//! Pixels are visited in row-major order. Each one is thresholded at 128
//! (below 128 prints black) and the quantization error
//! `original - quantized` is pushed to the unvisited neighbours:
//!
//! ```text
//!            X    7/16
//!   3/16   5/16   1/16
//! ```
//!
//! Error that would land outside the image is dropped, not reflected or
//! wrapped. There is no adaptive threshold.
//!
//! ## Output
//!
//! The bitmap width is rounded up to a multiple of 8; padding columns are
//! blank. Printer convention is 1 = ink, so dark input pixels become set bits.
//!
//! ## Usage Example
//!
//! ```
//! use briefprint::render::dither::floyd_steinberg;
//!
//! // A 10x2 mid-gray patch
//! let gray = vec![127u8; 20];
//! let bitmap = floyd_steinberg(10, 2, &gray).unwrap();
//! assert_eq!(bitmap.width(), 16);
//! assert_eq!(bitmap.height(), 2);
//! ```

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use super::bitmap::{Bitmap, padded_width, pack_row};
use crate::error::BriefprintError;

/// Intensities below this value print black.
pub const THRESHOLD: f32 = 128.0;

/// Dither a row-major grayscale buffer (0 = black, 255 = white).
///
/// ## Errors
///
/// Returns [`BriefprintError::InvalidRaster`] if the buffer length is not
/// `width * height` or either dimension is zero.
pub fn floyd_steinberg(width: usize, height: usize, gray: &[u8]) -> Result<Bitmap, BriefprintError> {
    if gray.len() != width * height {
        return Err(BriefprintError::InvalidRaster(format!(
            "expected {} grayscale pixels for {}x{}, got {}",
            width * height,
            width,
            height,
            gray.len()
        )));
    }
    if width == 0 || height == 0 {
        return Err(BriefprintError::InvalidRaster(format!(
            "empty image ({}x{})",
            width, height
        )));
    }

    // Owned per call; values leave 0..=255 while error accumulates.
    let mut pixels: Vec<f32> = gray.iter().map(|&v| v as f32).collect();

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let old = pixels[i];
            let new = if old < THRESHOLD { 0.0 } else { 255.0 };
            pixels[i] = new;
            let err = old - new;

            if x + 1 < width {
                pixels[i + 1] += err * 7.0 / 16.0;
            }
            if y + 1 < height {
                let below = i + width;
                if x > 0 {
                    pixels[below - 1] += err * 3.0 / 16.0;
                }
                pixels[below] += err * 5.0 / 16.0;
                if x + 1 < width {
                    pixels[below + 1] += err * 1.0 / 16.0;
                }
            }
        }
    }

    let packed_width = padded_width(width);
    let mut data = Vec::with_capacity(packed_width / 8 * height);
    for row in pixels.chunks(width) {
        let mut bits: Vec<bool> = row.iter().map(|&v| v < THRESHOLD).collect();
        bits.resize(packed_width, false);
        data.extend(pack_row(&bits));
    }

    Bitmap::new(packed_width, height, data)
}

/// Dither an 8-bit grayscale image.
pub fn dither_image(img: &GrayImage) -> Result<Bitmap, BriefprintError> {
    floyd_steinberg(img.width() as usize, img.height() as usize, img.as_raw())
}

/// Scale a photo down to at most `max_width` pixels wide (never up) and
/// convert it to grayscale.
pub fn prepare_photo(img: &DynamicImage, max_width: u32) -> GrayImage {
    let resized = if img.width() > max_width {
        let height = ((img.height() as f64 * max_width as f64) / img.width() as f64)
            .round()
            .max(1.0) as u32;
        img.resize_exact(max_width, height, FilterType::Triangle)
    } else {
        img.clone()
    };
    resized.to_luma8()
}

/// Load an image file, prepare it and dither it.
pub fn load_photo<P: AsRef<Path>>(path: P, max_width: u32) -> Result<Bitmap, BriefprintError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| {
        BriefprintError::Image(format!("Failed to open {}: {}", path.display(), e))
    })?;
    dither_image(&prepare_photo(&img, max_width))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_all_white() {
        let bmp = floyd_steinberg(8, 4, &[255; 32]).unwrap();
        assert_eq!(bmp.ink_count(), 0);
    }

    #[test]
    fn test_all_black() {
        let bmp = floyd_steinberg(8, 4, &[0; 32]).unwrap();
        assert!(bmp.data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_binary_input_is_unchanged() {
        let (w, h) = (13, 7);
        let gray: Vec<u8> = (0..w * h)
            .map(|i| if (i * 7 + i / 3) % 5 < 2 { 0 } else { 255 })
            .collect();
        let bmp = floyd_steinberg(w, h, &gray).unwrap();

        for y in 0..h {
            for x in 0..w {
                assert_eq!(bmp.pixel(x, y), gray[y * w + x] < 128, "({}, {})", x, y);
            }
            for x in w..bmp.width() {
                assert!(!bmp.pixel(x, y), "padding at ({}, {}) must be blank", x, y);
            }
        }
    }

    #[test]
    fn test_pads_width() {
        let bmp = floyd_steinberg(10, 3, &[0; 30]).unwrap();
        assert_eq!(bmp.width(), 16);
        for row in bmp.data().chunks(2) {
            assert_eq!(row, &[0xFF, 0xC0]);
        }
    }

    #[test]
    fn test_error_diffuses_right() {
        // 100 -> black, error +100 pushes 43.75 into the next pixel
        // 100 + 43.75 = 143.75 -> white
        let bmp = floyd_steinberg(8, 1, &[100, 100, 255, 255, 255, 255, 255, 255]).unwrap();
        assert!(bmp.pixel(0, 0));
        assert!(!bmp.pixel(1, 0));
    }

    #[test]
    fn test_error_diffuses_down() {
        // 200 -> white, error -55 lowers the pixel below by 17.2
        // 140 - 17.2 = 122.8 -> black
        let gray = [200, 255, 255, 255, 255, 255, 255, 255, 140, 255, 255, 255, 255, 255, 255, 255];
        let bmp = floyd_steinberg(8, 2, &gray).unwrap();
        assert!(!bmp.pixel(0, 0));
        assert!(bmp.pixel(0, 1));
    }

    #[test]
    fn test_mid_gray_is_roughly_half() {
        let bmp = floyd_steinberg(64, 64, &[128; 64 * 64]).unwrap();
        let ink = bmp.ink_count();
        assert!(ink > 1500 && ink < 2600, "got {} black pixels", ink);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            floyd_steinberg(4, 4, &[0; 15]),
            Err(BriefprintError::InvalidRaster(_))
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(floyd_steinberg(0, 0, &[]).is_err());
    }

    #[test]
    fn test_dither_image() {
        let img = GrayImage::from_fn(9, 2, |x, _| Luma([if x < 3 { 0 } else { 255 }]));
        let bmp = dither_image(&img).unwrap();
        assert_eq!(bmp.width(), 16);
        assert_eq!(bmp.data(), &[0xE0, 0x00, 0xE0, 0x00]);
    }

    #[test]
    fn test_prepare_photo_downscales() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(800, 400));
        let gray = prepare_photo(&img, 384);
        assert_eq!(gray.width(), 384);
        assert_eq!(gray.height(), 192);
    }

    #[test]
    fn test_prepare_photo_never_enlarges() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(100, 50));
        let gray = prepare_photo(&img, 384);
        assert_eq!((gray.width(), gray.height()), (100, 50));
    }
}
