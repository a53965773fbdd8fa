//! # Route Maps
//!
//! Decodes encoded polylines (the compact coordinate format used by mapping
//! and activity-tracking services) and draws them as a 1-bit route map.
//!
//! ## Polyline Encoding
//!
//! Each coordinate is the signed delta from the previous point, scaled by
//! 1e5 and written as 5-bit groups:
//!
//! ```text
//! delta = round(value * 1e5) - previous
//! zigzag = delta < 0 ? !(delta << 1) : delta << 1
//! groups = zigzag split into 5-bit chunks, least significant first
//! char  = group | 0x20 (if more groups follow) + 63
//! ```
//!
//! Latitude and longitude alternate.
//!
//! ## Projection
//!
//! ```text
//!   ┌──────────────────────────┐ ← 10% padding on each side
//!   │    ╭──╮                  │
//!   │   ╭╯  ╰──╮      north up │
//!   │ ──╯      ╰────╮          │
//!   │               ╰──        │
//!   └──────────────────────────┘
//! ```
//!
//! Longitude deltas are scaled by `cos(mid latitude)` so the map keeps an
//! approximately true ground aspect ratio. Segments are drawn with Bresenham
//! and a 3×3 brush.

use log::{debug, warn};

use super::bitmap::{Bitmap, PixelGrid, padded_width};
use crate::error::BriefprintError;

/// Default maximum map width in dots
pub const DEFAULT_MAX_WIDTH: usize = 384;

/// Default maximum map height in dots
pub const DEFAULT_MAX_HEIGHT: usize = 300;

/// Fraction of the route extent added as margin on each side
const PADDING: f64 = 0.1;

/// Margin used on an axis with zero extent (degrees)
const MIN_PADDING: f64 = 0.001;

/// A decoded `(latitude, longitude)` pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ============================================================================
// POLYLINE DECODING
// ============================================================================

/// Decode an encoded polyline into points.
///
/// A trailing coordinate pair cut off mid-value is dropped with a warning.
///
/// ## Errors
///
/// Returns [`BriefprintError::InvalidPolyline`] for characters outside
/// `'?'..='~'` or a value longer than 32 bits.
///
/// ## Example
///
/// ```
/// use briefprint::render::route::decode_polyline;
///
/// let points = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(points.len(), 3);
/// assert!((points[0].lat - 38.5).abs() < 1e-9);
/// assert!((points[0].lng - -120.2).abs() < 1e-9);
/// ```
pub fn decode_polyline(encoded: &str) -> Result<Vec<GeoPoint>, BriefprintError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let Some(dlat) = next_value(bytes, &mut index)? else {
            warn!("Dropping truncated polyline point at offset {}", index);
            break;
        };
        let Some(dlng) = next_value(bytes, &mut index)? else {
            warn!("Dropping truncated polyline point at offset {}", index);
            break;
        };
        lat += dlat;
        lng += dlng;
        points.push(GeoPoint::new(lat as f64 / 1e5, lng as f64 / 1e5));
    }

    Ok(points)
}

/// Read one zig-zag encoded value. `Ok(None)` when the input ends mid-value.
fn next_value(bytes: &[u8], index: &mut usize) -> Result<Option<i64>, BriefprintError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let Some(&c) = bytes.get(*index) else {
            return Ok(None);
        };
        if !(63..=126).contains(&c) {
            return Err(BriefprintError::InvalidPolyline(format!(
                "unexpected character {:?} at offset {}",
                c as char, *index
            )));
        }
        if shift > 30 {
            return Err(BriefprintError::InvalidPolyline(format!(
                "value too long at offset {}",
                *index
            )));
        }
        *index += 1;

        let chunk = (c - 63) as i64;
        result |= (chunk & 0x1F) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok(Some(value))
}

// ============================================================================
// RASTERIZER
// ============================================================================

/// # Route Rasterizer
///
/// Fits a route into `max_width × max_height` dots, keeping its aspect ratio.
///
/// ## Example
///
/// ```
/// use briefprint::render::route::RouteRasterizer;
///
/// let map = RouteRasterizer::default()
///     .render_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
///     .unwrap()
///     .expect("three distinct points");
/// assert_eq!(map.width() % 8, 0);
/// assert!(map.width() <= 384 && map.height() <= 300);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteRasterizer {
    pub max_width: usize,
    pub max_height: usize,
}

impl Default for RouteRasterizer {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Bounding box plus the projection derived from it.
struct Projection {
    min_lat: f64,
    min_lng: f64,
    cos_lat: f64,
    pad_lat: f64,
    pad_lng: f64,
    total_lat: f64,
    total_lng: f64,
    width: usize,
    height: usize,
}

impl Projection {
    /// Map a point to pixel space, north up.
    fn to_pixel(&self, p: GeoPoint) -> (i64, i64) {
        let x = ((p.lng - self.min_lng) * self.cos_lat + self.pad_lng) / self.total_lng
            * (self.width - 1) as f64;
        let y = (1.0 - (p.lat - self.min_lat + self.pad_lat) / self.total_lat)
            * (self.height.saturating_sub(1)) as f64;
        (x.round() as i64, y.round() as i64)
    }
}

impl RouteRasterizer {
    pub fn new(max_width: usize, max_height: usize) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Decode and render an encoded polyline.
    ///
    /// `Ok(None)` means there is no renderable route (see [`Self::render`]).
    pub fn render_polyline(&self, encoded: &str) -> Result<Option<Bitmap>, BriefprintError> {
        let points = decode_polyline(encoded)?;
        Ok(self.render(&points))
    }

    /// Render a route.
    ///
    /// Returns `None` when there are fewer than 2 points or every point is
    /// identical, so callers can skip the image instead of printing an empty
    /// or malformed raster.
    pub fn render(&self, points: &[GeoPoint]) -> Option<Bitmap> {
        let projection = self.project(points)?;
        let mut grid = PixelGrid::new(projection.width, projection.height);

        let mut prev = projection.to_pixel(points[0]);
        for &p in &points[1..] {
            let next = projection.to_pixel(p);
            draw_thick_line(&mut grid, prev, next);
            prev = next;
        }

        debug!(
            "Rendered route of {} points at {}x{}",
            points.len(),
            projection.width,
            projection.height
        );
        grid.into_bitmap().ok()
    }

    fn project(&self, points: &[GeoPoint]) -> Option<Projection> {
        if points.len() < 2 {
            return None;
        }

        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        let mid_lat = (min_lat + max_lat) / 2.0;
        let cos_lat = mid_lat.to_radians().cos();

        let lat_range = max_lat - min_lat;
        let lng_range = (max_lng - min_lng) * cos_lat;
        if lat_range == 0.0 && lng_range == 0.0 {
            return None;
        }

        let pad_lat = nonzero_or(lat_range * PADDING, MIN_PADDING);
        let pad_lng = nonzero_or(lng_range * PADDING, MIN_PADDING);
        let total_lat = lat_range + 2.0 * pad_lat;
        let total_lng = lng_range + 2.0 * pad_lng;

        let max_w = self.max_width as f64;
        let max_h = self.max_height as f64;
        let (width, height) = if total_lng / total_lat > max_w / max_h {
            (self.max_width, ((total_lat / total_lng) * max_w).round() as usize)
        } else {
            (((total_lng / total_lat) * max_h).round() as usize, self.max_height)
        };

        Some(Projection {
            min_lat,
            min_lng,
            cos_lat,
            pad_lat,
            pad_lng,
            total_lat,
            total_lng,
            width: padded_width(width).max(8),
            height: height.max(1),
        })
    }
}

fn nonzero_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 { fallback } else { value }
}

/// Stamp a 3×3 block centred on `(x, y)`.
fn draw_thick_pixel(grid: &mut PixelGrid, x: i64, y: i64) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            grid.set(x + dx, y + dy);
        }
    }
}

/// Bresenham line from `from` to `to`, inclusive, with a 3×3 brush.
fn draw_thick_line(grid: &mut PixelGrid, from: (i64, i64), to: (i64, i64)) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        draw_thick_pixel(grid, x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
