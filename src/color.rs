//! This file defines the [`ColorSpace`] trait that every color representation implements, and the
//! [`Color`] record that the rest of the engine passes around: an RGB value together with its hex
//! code and, optionally, its precomputed CIELAB value.

use std::convert::TryFrom;

use serde_derive::{Deserialize, Serialize};

use crate::colors::{CIELABColor, RGBColor};
use crate::coord::Coord;
use crate::error::{ColorError, Result};

/// The largest per-channel disagreement tolerated between a cached LAB value and the LAB value
/// computed from the RGB it is stored with.
pub const LAB_CACHE_TOLERANCE: f64 = 0.5;

/// A color representation that can be converted to and from 8-bit sRGB. Any two spaces can
/// therefore be converted into each other by going through RGB.
pub trait ColorSpace: Sized {
    /// Converts an sRGB color into this space.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this color back into sRGB. Spaces larger than sRGB clamp here.
    fn to_rgb(&self) -> RGBColor;
    /// Converts between any two color spaces.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// # use tincture::colors::HSLColor;
    /// let red = RGBColor { r: 255, g: 0, b: 0 };
    /// let hsl: HSLColor = red.convert();
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (0, 100, 50));
    /// ```
    fn convert<T: ColorSpace>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

impl ColorSpace for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

/// A color as stored in a collection: the RGB value, its canonical hex code, and optionally its
/// CIELAB value computed once up front. `Color`s are immutable; the fields are private so the
/// hex and LAB values can never drift from the RGB value.
/// # Example
/// ```
/// # use tincture::Color;
/// let color = Color::from_hex("#1e90ff").unwrap();
/// assert_eq!(color.hex(), "#1E90FF");
/// assert!(color.cached_lab().is_none());
/// let cached = color.clone().with_cached_lab();
/// assert_eq!(cached.lab(), color.lab());
/// ```
///
/// Deserializing goes through [`Color::from_parts`]: a stored `hex` is ignored and recomputed, and
/// a stored `lab` that disagrees with `rgb` is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorParts")]
pub struct Color {
    rgb: RGBColor,
    lab: Option<CIELABColor>,
    hex: String,
}

impl Color {
    /// Creates a color without a cached LAB value.
    pub fn new(rgb: RGBColor) -> Color {
        Color {
            rgb,
            lab: None,
            hex: rgb.to_string(),
        }
    }

    /// Creates a color and computes its LAB value up front, for collections that are searched
    /// repeatedly.
    pub fn with_lab(rgb: RGBColor) -> Color {
        Color::new(rgb).with_cached_lab()
    }

    /// Parses a hex code into a color. See [`RGBColor::from_hex_code`].
    pub fn from_hex(hex: &str) -> Result<Color> {
        Ok(Color::new(RGBColor::from_hex_code(hex)?))
    }

    /// Rebuilds a color from stored parts, such as a database row holding both RGB and LAB.
    /// # Errors
    /// Returns [`ColorError::InconsistentLab`] if `lab` is more than 0.5 away from the LAB value of
    /// `rgb` in any channel.
    pub fn from_parts(rgb: RGBColor, lab: Option<CIELABColor>) -> Result<Color> {
        let color = Color::new(rgb);
        match lab {
            None => Ok(color),
            Some(lab) => {
                let expected = CIELABColor::from_rgb(rgb);
                let consistent = (lab.l - expected.l).abs() <= LAB_CACHE_TOLERANCE
                    && (lab.a - expected.a).abs() <= LAB_CACHE_TOLERANCE
                    && (lab.b - expected.b).abs() <= LAB_CACHE_TOLERANCE;
                if consistent {
                    Ok(Color {
                        lab: Some(lab),
                        ..color
                    })
                } else {
                    Err(ColorError::InconsistentLab { hex: color.hex })
                }
            }
        }
    }

    /// Returns a copy of this color with its LAB value cached.
    pub fn with_cached_lab(self) -> Color {
        let lab = Some(self.lab());
        Color { lab, ..self }
    }

    /// The RGB value.
    pub fn rgb(&self) -> RGBColor {
        self.rgb
    }

    /// The canonical uppercase `#RRGGBB` code.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The LAB value: the cached one if present, otherwise computed on the spot.
    pub fn lab(&self) -> CIELABColor {
        self.lab.unwrap_or_else(|| CIELABColor::from_rgb(self.rgb))
    }

    /// The cached LAB value, if any.
    pub fn cached_lab(&self) -> Option<CIELABColor> {
        self.lab
    }
}

/// The stored form of a [`Color`], before validation.
#[derive(Deserialize)]
struct ColorParts {
    rgb: RGBColor,
    #[serde(default)]
    lab: Option<CIELABColor>,
}

impl TryFrom<ColorParts> for Color {
    type Error = ColorError;

    fn try_from(parts: ColorParts) -> Result<Color> {
        Color::from_parts(parts.rgb, parts.lab)
    }
}

impl From<RGBColor> for Color {
    fn from(rgb: RGBColor) -> Color {
        Color::new(rgb)
    }
}

impl From<&Color> for Coord {
    fn from(color: &Color) -> Coord {
        Coord::from(color.rgb)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::HSLColor;

    #[test]
    fn test_hex_matches_rgb() {
        let color = Color::new(RGBColor { r: 1, g: 171, b: 255 });
        assert_eq!(color.hex(), "#01ABFF");
        assert_eq!(Color::from_hex("01abff").unwrap(), color);
    }

    #[test]
    fn test_from_parts() {
        let rgb = RGBColor { r: 200, g: 30, b: 60 };
        let lab = CIELABColor::from_rgb(rgb);
        let nudged = CIELABColor { l: lab.l + 0.4, ..lab };
        assert_eq!(
            Color::from_parts(rgb, Some(nudged)).unwrap().cached_lab(),
            Some(nudged)
        );
        let wrong = CIELABColor { a: lab.a - 3.0, ..lab };
        assert_eq!(
            Color::from_parts(rgb, Some(wrong)),
            Err(ColorError::InconsistentLab {
                hex: "#C81E3C".to_string()
            })
        );
        assert_eq!(Color::from_parts(rgb, None).unwrap().cached_lab(), None);
    }

    #[test]
    fn test_convert_between_spaces() {
        let hsl = HSLColor { h: 120, s: 100, l: 25 };
        let lab: CIELABColor = hsl.convert();
        let back: HSLColor = lab.convert();
        assert_eq!(back, hsl);
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::with_lab(RGBColor { r: 10, g: 20, b: 30 });
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hex(), color.hex());
        assert_eq!(back.rgb(), color.rgb());
        assert_eq!(back.cached_lab(), color.cached_lab());
    }

    #[test]
    fn test_deserialize_checks_stored_parts() {
        let mismatched = r##"{"rgb":{"r":255,"g":0,"b":0},"lab":{"l":0.0,"a":0.0,"b":0.0},"hex":"#00FF00"}"##;
        let err = serde_json::from_str::<Color>(mismatched).unwrap_err();
        assert!(err.to_string().contains("#FF0000"), "{}", err);

        let stale_hex = r##"{"rgb":{"r":255,"g":0,"b":0},"hex":"#00FF00"}"##;
        let color: Color = serde_json::from_str(stale_hex).unwrap();
        assert_eq!(color.hex(), "#FF0000");
        assert_eq!(color.cached_lab(), None);
    }
}
