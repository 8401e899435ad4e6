//! This file implements HSL: a simple transformation of sRGB into a cylindrical space, with hue as an
//! angle, saturation as a percentage of the maximum chroma at that lightness, and lightness as the
//! average of the largest and smallest RGB components. HSL is not perceptually uniform, but it is
//! what people mean when they say "a dark, muted red", which makes it the right space for the
//! family classifier. Components are rounded to integers, as the classification thresholds are.
//! Gray has no defined hue: Tincture gives it a hue of 0.

use serde_derive::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::colors::RGBColor;

/// A color in the HSL color space, a direct transformation of sRGB.
/// # Example
/// ```
/// # use tincture::{rgb_to_hsl, colors::{HSLColor, RGBColor}};
/// let hsl = rgb_to_hsl(RGBColor { r: 255, g: 128, b: 0 });
/// assert_eq!(hsl, HSLColor { h: 30, s: 100, l: 50 });
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue in degrees, in [0, 360).
    pub h: u16,
    /// The saturation as a percentage, in [0, 100].
    pub s: u8,
    /// The lightness as a percentage, in [0, 100].
    pub l: u8,
}

impl ColorSpace for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let [r, g, b] = rgb.normalized();
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        let (hue, saturation) = if max_c == min_c {
            (0.0, 0.0)
        } else {
            let chroma = max_c - min_c;
            let saturation = if lightness > 0.5 {
                chroma / (2.0 - max_c - min_c)
            } else {
                chroma / (max_c + min_c)
            };
            // hexagonal hue: which sector depends on the dominant channel
            let sector = if max_c == r {
                (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
            } else if max_c == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };
            (sector / 6.0, saturation)
        };

        // rounding can push a hue just under 360 onto 360 itself
        let h = (hue * 360.0).round() as u16 % 360;
        HSLColor {
            h,
            s: (saturation * 100.0).round() as u8,
            l: (lightness * 100.0).round() as u8,
        }
    }

    /// Converts back through the hexagon. Because the components are rounded percentages, the result
    /// may differ from the original RGB by a few units per channel.
    fn to_rgb(&self) -> RGBColor {
        let h = f64::from(self.h % 360);
        let s = f64::from(self.s.min(100)) / 100.0;
        let l = f64::from(self.l.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // the second-largest component, where chroma is the largest and the smallest is 0
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = l - chroma / 2.0;
        RGBColor::from_f64_clamped(
            (r1 + offset) * 255.0,
            (g1 + offset) * 255.0,
            (b1 + offset) * 255.0,
        )
    }
}

/// Converts 8-bit sRGB to rounded HSL.
pub fn rgb_to_hsl(rgb: RGBColor) -> HSLColor {
    HSLColor::from_rgb(rgb)
}

/// The HSL saturation of a color as a percentage. Used as a cheap stand-in for chroma when sorting.
pub fn chroma(rgb: RGBColor) -> u8 {
    rgb_to_hsl(rgb).s
}

/// The HSL lightness of a color as a percentage.
pub fn lightness(rgb: RGBColor) -> u8 {
    rgb_to_hsl(rgb).l
}
