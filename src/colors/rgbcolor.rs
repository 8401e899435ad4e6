//! This module implements [`RGBColor`], an 8-bit sRGB color: the representation every other space in
//! Tincture is converted from and back into. Hex codes are parsed here, and the canonical string
//! form of a color (uppercase `#RRGGBB`) is its `Display` output.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::csscolor::parse_color;
use crate::error::{ColorError, Result};

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap();
}

/// A color in 8-bit sRGB. Every channel is in [0, 255] by construction.
/// # Example
/// ```
/// # use tincture::colors::RGBColor;
/// let teal = RGBColor::from_hex_code("#0a8").unwrap();
/// assert_eq!(teal, RGBColor { r: 0, g: 170, b: 136 });
/// assert_eq!(teal.to_string(), "#00AA88");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Parses a hex code of three or six digits, with or without a leading `#`, in any case. The
    /// three-digit form doubles each digit, so `#ABC` is `#AABBCC`.
    /// # Errors
    /// Returns [`ColorError::InvalidFormat`] on anything else, including surrounding whitespace.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor> {
        let digits = HEX_RE
            .captures(hex)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ColorError::invalid_format(hex))?
            .as_str();
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::invalid_format(hex))?;
        let rgb = if digits.len() == 3 {
            // 0xABC -> 0xAA, 0xBB, 0xCC: multiplying a nibble by 17 repeats it
            RGBColor {
                r: ((value >> 8) & 0xF) as u8 * 17,
                g: ((value >> 4) & 0xF) as u8 * 17,
                b: (value & 0xF) as u8 * 17,
            }
        } else {
            RGBColor {
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            }
        };
        Ok(rgb)
    }

    /// Builds a color from untrusted integer channels, rejecting rather than clamping anything
    /// outside [0, 255]. This is the validation used on import paths.
    /// # Errors
    /// Returns [`ColorError::OutOfRange`] naming the first bad channel.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<RGBColor> {
        let check = |channel: &'static str, value: i64| {
            if (0..=255).contains(&value) {
                Ok(value as u8)
            } else {
                Err(ColorError::OutOfRange { channel, value })
            }
        };
        Ok(RGBColor {
            r: check("red", r)?,
            g: check("green", g)?,
            b: check("blue", b)?,
        })
    }

    /// Builds a color from fractional channels on the 0-255 scale, clamping then rounding each.
    pub fn from_f64_clamped(r: f64, g: f64, b: f64) -> RGBColor {
        let to_u8 = |v: f64| {
            if v.is_nan() {
                0
            } else {
                v.max(0.0).min(255.0).round() as u8
            }
        };
        RGBColor {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// The channels scaled to [0, 1].
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Renders fractional channels as an uppercase `#RRGGBB` code, clamping each to [0, 255] and
/// rounding first.
/// # Example
/// ```
/// # use tincture::rgb_to_hex;
/// assert_eq!(rgb_to_hex(255.0, 127.6, -4.0), "#FF8000");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    RGBColor::from_f64_clamped(r, g, b).to_string()
}

/// Parses a hex code into an [`RGBColor`]. See [`RGBColor::from_hex_code`].
pub fn hex_to_rgb(hex: &str) -> Result<RGBColor> {
    RGBColor::from_hex_code(hex)
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Accepts anything [`detect_color_format`](crate::csscolor::detect_color_format) recognizes:
/// hex codes and `rgb(r, g, b)` functions.
impl FromStr for RGBColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<RGBColor> {
        parse_color(s)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<RGBColor> for (u8, u8, u8) {
    fn from(rgb: RGBColor) -> (u8, u8, u8) {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<RGBColor> for Coord {
    fn from(rgb: RGBColor) -> Coord {
        Coord {
            x: f64::from(rgb.r),
            y: f64::from(rgb.g),
            z: f64::from(rgb.b),
        }
    }
}

// points from clustering are fractional and may drift out of the cube
impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor::from_f64_clamped(c.x, c.y, c.z)
    }
}
