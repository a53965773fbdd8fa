//! # Rendering Module
//!
//! Producers of 1-bit raster images for the printer.
//!
//! ## Modules
//!
//! - [`bitmap`]: Packed bitmap type and pixel canvas
//! - [`dither`]: Floyd-Steinberg conversion of grayscale photos
//! - [`route`]: Encoded polyline decoding and route map rasterization
//! - [`qr`]: QR code module matrices expanded to bitmaps
//! - [`icons`]: Built-in 24x24 icons and weather icon selection
//!
//! ## Usage Example
//!
//! ```
//! use briefprint::render::route::RouteRasterizer;
//!
//! let map = RouteRasterizer::default()
//!     .render_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
//!     .unwrap()
//!     .expect("three points draw a map");
//! assert!(map.width() <= 384);
//! assert_eq!(map.width() % 8, 0);
//! ```

pub mod bitmap;
pub mod dither;
pub mod icons;
pub mod qr;
pub mod route;
