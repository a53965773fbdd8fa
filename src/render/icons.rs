//! # Built-in Icons
//!
//! A small registry of 24×24 icons for briefing sections (weather, to-do
//! lists, agendas). Each icon is 24 rows of 24 bits, MSB = leftmost pixel,
//! so the packed bitmap is 3 bytes per row and 72 bytes in total.
//!
//! ## Usage
//!
//! ```
//! use briefprint::render::icons;
//!
//! let sun = icons::by_name("sun").unwrap().bitmap();
//! assert_eq!((sun.width(), sun.height()), (24, 24));
//!
//! assert_eq!(icons::weather_icon(Some(501)).name, "rain");
//! ```

use super::bitmap::Bitmap;

/// Icon side length in pixels
pub const ICON_SIZE: usize = 24;

type IconRows = [u32; ICON_SIZE];

#[rustfmt::skip]
const SUN: IconRows = [
    0x000000, 0x000000, 0x010010, 0x002400, 0x003C00, 0x007E00,
    0x0E7E38, 0x07FF80, 0x03FFC0, 0x03FFC0, 0x01FFE0, 0x79FFE0,
    0x79FFE0, 0x01FFE0, 0x03FFC0, 0x03FFC0, 0x07FF80, 0x0E7E38,
    0x007E00, 0x003C00, 0x002400, 0x010010, 0x000000, 0x000000,
];

#[rustfmt::skip]
const CLOUD: IconRows = [
    0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
    0x01F000, 0x03F800, 0x07FC00, 0x0FFE00, 0x1FFF00, 0x3FFF80,
    0x7FFFC0, 0xFFFFE0, 0xFFFFF0, 0xFFFFF0, 0x7FFFE0, 0x3FFFC0,
    0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
];

#[rustfmt::skip]
const RAIN: IconRows = [
    0x000000, 0x000000, 0x000000, 0x01F000, 0x03F800, 0x07FC00,
    0x0FFE00, 0x1FFF00, 0x3FFF80, 0x7FFFC0, 0xFFFFF0, 0xFFFFF0,
    0x7FFFE0, 0x3FFFC0, 0x000000, 0x040810, 0x040810, 0x000000,
    0x102040, 0x102040, 0x000000, 0x040810, 0x000000, 0x000000,
];

#[rustfmt::skip]
const CHECKBOX: IconRows = [
    0x000000, 0x000000, 0x3FFFC0, 0x3FFFC0, 0x300060, 0x300060,
    0x300060, 0x300060, 0x300060, 0x300060, 0x300060, 0x300060,
    0x300060, 0x300060, 0x300060, 0x300060, 0x300060, 0x300060,
    0x300060, 0x300060, 0x3FFFC0, 0x3FFFC0, 0x000000, 0x000000,
];

#[rustfmt::skip]
const CALENDAR: IconRows = [
    0x000000, 0x000000, 0x0C1800, 0x0C1800, 0x3FFFE0, 0x3FFFE0,
    0x3FFFE0, 0x3FFFE0, 0x300060, 0x300060, 0x336660, 0x336660,
    0x300060, 0x300060, 0x336660, 0x336660, 0x300060, 0x300060,
    0x336660, 0x336660, 0x300060, 0x3FFFE0, 0x000000, 0x000000,
];

/// A registered icon.
#[derive(Debug)]
pub struct Icon {
    /// Lookup name (e.g. "sun")
    pub name: &'static str,
    rows: &'static IconRows,
}

impl Icon {
    const fn new(name: &'static str, rows: &'static IconRows) -> Self {
        Self { name, rows }
    }

    /// Packed 24×24 bitmap for this icon.
    pub fn bitmap(&self) -> Bitmap {
        let data: Vec<u8> = self
            .rows
            .iter()
            .flat_map(|row| [(row >> 16) as u8, (row >> 8) as u8, *row as u8])
            .collect();
        Bitmap::from_parts(ICON_SIZE, ICON_SIZE, data)
    }
}

/// All registered icons.
static ICONS: &[Icon] = &[
    Icon::new("sun", &SUN),
    Icon::new("cloud", &CLOUD),
    Icon::new("rain", &RAIN),
    Icon::new("checkbox", &CHECKBOX),
    Icon::new("calendar", &CALENDAR),
];

/// Get all registered icons.
pub fn all() -> &'static [Icon] {
    ICONS
}

/// Look up an icon by name.
pub fn by_name(name: &str) -> Option<&'static Icon> {
    ICONS.iter().find(|icon| icon.name == name)
}

/// List all registered icon names.
pub fn list_names() -> Vec<&'static str> {
    ICONS.iter().map(|icon| icon.name).collect()
}

/// Pick an icon for an OpenWeather-style condition code.
///
/// | Code | Icon |
/// |------|------|
/// | 2xx thunderstorm, 3xx drizzle, 5xx rain | rain |
/// | 801-899 clouds | cloud |
/// | 800 clear, anything else, missing | sun |
pub fn weather_icon(code: Option<u16>) -> &'static Icon {
    let name = match code {
        Some(c) if matches!(leading_digit(c), 2 | 3 | 5) => "rain",
        Some(c) if leading_digit(c) == 8 && c != 800 => "cloud",
        _ => "sun",
    };
    by_name(name).unwrap_or(&ICONS[0])
}

fn leading_digit(mut n: u16) -> u16 {
    while n >= 10 {
        n /= 10;
    }
    n
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_icons_are_24x24() {
        for icon in all() {
            let bmp = icon.bitmap();
            assert_eq!(bmp.width(), 24, "{}", icon.name);
            assert_eq!(bmp.height(), 24, "{}", icon.name);
            assert_eq!(bmp.data().len(), 72, "{}", icon.name);
        }
    }

    #[test]
    fn test_sun_rows() {
        let sun = by_name("sun").unwrap().bitmap();
        assert_eq!(&sun.data()[6..9], &[0x01, 0x00, 0x10]);
        assert_eq!(&sun.data()[33..36], &[0x79, 0xFF, 0xE0]);
    }

    #[test]
    fn test_checkbox_is_symmetric_frame() {
        let bmp = by_name("checkbox").unwrap().bitmap();
        assert!(bmp.pixel(2, 2));
        assert!(bmp.pixel(2, 12));
        assert!(!bmp.pixel(12, 12));
    }

    #[test]
    fn test_unknown_name() {
        assert!(by_name("snow").is_none());
    }

    #[test]
    fn test_list_names() {
        assert_eq!(list_names(), vec!["sun", "cloud", "rain", "checkbox", "calendar"]);
    }

    #[test]
    fn test_weather_mapping() {
        assert_eq!(weather_icon(None).name, "sun");
        assert_eq!(weather_icon(Some(800)).name, "sun");
        assert_eq!(weather_icon(Some(801)).name, "cloud");
        assert_eq!(weather_icon(Some(804)).name, "cloud");
        assert_eq!(weather_icon(Some(211)).name, "rain");
        assert_eq!(weather_icon(Some(310)).name, "rain");
        assert_eq!(weather_icon(Some(502)).name, "rain");
        assert_eq!(weather_icon(Some(601)).name, "sun");
        assert_eq!(weather_icon(Some(741)).name, "sun");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(leading_digit(0), 0);
        assert_eq!(leading_digit(7), 7);
        assert_eq!(leading_digit(804), 8);
    }
}
