//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB has an L value for
//! lightness and two opponent color axes for chromaticity. Formally, the three values that define a
//! CIELAB color are called L\*, a\*, and b\*, but for convenience they are just `l`, `a`, and `b`
//! here. Unlike some libraries, which adapt everything to D50, Tincture computes CIELAB directly
//! relative to the D65 white of sRGB, so no chromatic adaptation is involved.

use serde_derive::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::colors::{RGBColor, XYZColor};
use crate::consts::{D65_WHITE_POINT, LAB_EPSILON, LAB_KAPPA_SLOPE, LAB_OFFSET};
use crate::coord::Coord;

/// A color in the CIELAB color space, D65.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness, 0 for black and 100 for diffuse white.
    pub l: f64,
    /// The green (negative) to magenta (positive) opponent axis. Visible sRGB colors fall roughly
    /// within [-87, 99].
    pub a: f64,
    /// The blue (negative) to yellow (positive) opponent axis. Visible sRGB colors fall roughly
    /// within [-108, 95].
    pub b: f64,
}

impl CIELABColor {
    /// Converts a D65 XYZ color to CIELAB.
    pub fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |t: f64| {
            if t > LAB_EPSILON {
                t.cbrt()
            } else {
                LAB_KAPPA_SLOPE * t + LAB_OFFSET
            }
        };
        let fx = f(xyz.x / D65_WHITE_POINT[0]);
        let fy = f(xyz.y / D65_WHITE_POINT[1]);
        let fz = f(xyz.z / D65_WHITE_POINT[2]);

        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Returns the D65 XYZ color that corresponds to this CIELAB color. Imaginary colors come back
    /// as imaginary XYZ values: nothing is clamped here.
    pub fn to_xyz(&self) -> XYZColor {
        let f_inv = |f: f64| {
            let cubed = f * f * f;
            if cubed > LAB_EPSILON {
                cubed
            } else {
                (f - LAB_OFFSET) / LAB_KAPPA_SLOPE
            }
        };
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        XYZColor {
            x: D65_WHITE_POINT[0] * f_inv(fx),
            y: D65_WHITE_POINT[1] * f_inv(fy),
            z: D65_WHITE_POINT[2] * f_inv(fz),
        }
    }
}

impl ColorSpace for CIELABColor {
    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        CIELABColor::from_xyz(XYZColor::from_rgb(rgb))
    }

    /// Goes back through XYZ. Colors outside of sRGB are clamped to the nearest channel values,
    /// which is lossy but never fails.
    fn to_rgb(&self) -> RGBColor {
        self.to_xyz().to_rgb()
    }
}

/// Converts 8-bit sRGB to CIELAB.
/// # Example
/// ```
/// # use tincture::{rgb_to_lab, colors::RGBColor};
/// let lab = rgb_to_lab(RGBColor { r: 255, g: 255, b: 255 });
/// assert!((lab.l - 100.0).abs() < 0.01);
/// assert!(lab.a.abs() < 0.1 && lab.b.abs() < 0.1);
/// ```
pub fn rgb_to_lab(rgb: RGBColor) -> CIELABColor {
    CIELABColor::from_rgb(rgb)
}

/// Converts CIELAB to 8-bit sRGB, clamping out-of-gamut colors.
pub fn lab_to_rgb(lab: CIELABColor) -> RGBColor {
    lab.to_rgb()
}

impl From<CIELABColor> for Coord {
    fn from(lab: CIELABColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}
