//! This file recognizes and parses the two textual color notations the engine accepts from its
//! callers: hex codes (`#RGB`, `#RRGGBB` or a bare `RRGGBB`, any case) and the CSS functional notation
//! `rgb(r, g, b)` with integer components and optional whitespace. Percentages, floats and alpha
//! are not supported. A bare three-digit string is not detected as hex, since words like `bad` or
//! `fed` would otherwise parse as colors; [`RGBColor::from_hex_code`] still accepts it when the
//! caller knows the input is hex.

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::colors::RGBColor;
use crate::error::{ColorError, Result};

lazy_static! {
    static ref HEX_FORMAT_RE: Regex = Regex::new(r"^(?:#[0-9a-f]{3}|#?[0-9a-f]{6})$").unwrap();
    static ref RGB_FUNCTION_RE: Regex =
        Regex::new(r"^rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$").unwrap();
}

/// The notation a color string is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// A `#`-prefixed three-digit hex code, or a six-digit one with or without the `#`.
    Hex,
    /// An `rgb(r, g, b)` function.
    Rgb,
    /// Anything else.
    Unknown,
}

/// Works out which notation a string uses, ignoring surrounding whitespace and case. Never fails:
/// unrecognized input is [`ColorFormat::Unknown`].
/// # Example
/// ```
/// # use tincture::csscolor::{detect_color_format, ColorFormat};
/// assert_eq!(detect_color_format(" #FFaa00 "), ColorFormat::Hex);
/// assert_eq!(detect_color_format("RGB(255, 170,0)"), ColorFormat::Rgb);
/// assert_eq!(detect_color_format("orange"), ColorFormat::Unknown);
/// ```
pub fn detect_color_format(s: &str) -> ColorFormat {
    let cleaned = s.trim().to_lowercase();
    if HEX_FORMAT_RE.is_match(&cleaned) {
        ColorFormat::Hex
    } else if RGB_FUNCTION_RE.is_match(&cleaned) {
        ColorFormat::Rgb
    } else {
        ColorFormat::Unknown
    }
}

/// Parses a string of the form `rgb(r, g, b)` into an [`RGBColor`]. Whitespace around the
/// components and the whole string is ignored, as is the case of `rgb`.
/// # Errors
/// Returns [`ColorError::InvalidFormat`] if the string is not an `rgb()` function of three
/// non-negative integers, and [`ColorError::OutOfRange`] if a component exceeds 255.
pub fn parse_rgb_str(s: &str) -> Result<RGBColor> {
    let cleaned = s.trim().to_lowercase();
    let caps = RGB_FUNCTION_RE
        .captures(&cleaned)
        .ok_or_else(|| ColorError::invalid_format(s))?;
    let mut channels = [0i64; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        // the regex guarantees digits, but there may be too many of them for an i64
        *channel = caps[i + 1]
            .parse()
            .map_err(|_| ColorError::invalid_format(s))?;
    }
    RGBColor::from_channels(channels[0], channels[1], channels[2])
}

/// Parses either notation, dispatching on [`detect_color_format`].
/// # Errors
/// Returns [`ColorError::InvalidFormat`] for unrecognized strings, and whatever the specific parser
/// returns otherwise.
pub fn parse_color(s: &str) -> Result<RGBColor> {
    match detect_color_format(s) {
        ColorFormat::Hex => RGBColor::from_hex_code(s.trim()),
        ColorFormat::Rgb => parse_rgb_str(s),
        ColorFormat::Unknown => Err(ColorError::invalid_format(s)),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(detect_color_format("#fff"), ColorFormat::Hex);
        assert_eq!(detect_color_format("fff"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("abc"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("BAD"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("A1B2C3"), ColorFormat::Hex);
        assert_eq!(detect_color_format("rgb(1,2,3)"), ColorFormat::Rgb);
        assert_eq!(detect_color_format("  rgb( 1 , 2 , 3 )  "), ColorFormat::Rgb);
        assert_eq!(detect_color_format(""), ColorFormat::Unknown);
        assert_eq!(detect_color_format("#ffff"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("rgba(1, 2, 3, 4)"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("rgb(1, 2)"), ColorFormat::Unknown);
        assert_eq!(detect_color_format("rgb(-1, 2, 3)"), ColorFormat::Unknown);
    }

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(parse_rgb_str("rgb(125, 20, 0)").unwrap(), RGBColor { r: 125, g: 20, b: 0 });
        assert_eq!(parse_rgb_str("RGB(  7,8 ,9)").unwrap(), RGBColor { r: 7, g: 8, b: 9 });
        assert_eq!(
            parse_rgb_str("rgb(256, 0, 0)"),
            Err(ColorError::OutOfRange {
                channel: "red",
                value: 256
            })
        );
        assert_eq!(
            parse_rgb_str("rgb(123, 123, 41, 22)"),
            Err(ColorError::invalid_format("rgb(123, 123, 41, 22)"))
        );
        assert_eq!(
            parse_rgb_str("rgb(1.5, 2, 3)"),
            Err(ColorError::invalid_format("rgb(1.5, 2, 3)"))
        );
        assert!(parse_rgb_str("rgb(99999999999999999999999, 0, 0)").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(" #00F ").unwrap(), RGBColor { r: 0, g: 0, b: 255 });
        assert_eq!(parse_color("rgb(0, 0, 255)").unwrap(), RGBColor { r: 0, g: 0, b: 255 });
        assert_eq!(parse_color("blue"), Err(ColorError::invalid_format("blue")));
        assert_eq!(parse_color("fed"), Err(ColorError::invalid_format("fed")));
        assert_eq!(parse_color("#fed").unwrap(), RGBColor { r: 255, g: 238, b: 221 });
        assert_eq!(RGBColor::from_hex_code("fed").unwrap(), RGBColor { r: 255, g: 238, b: 221 });
    }
}
