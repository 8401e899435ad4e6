//! The CIE 1931 XYZ color space, used here only as the linear-light bridge between sRGB and CIELAB.
//! Every `XYZColor` is relative to the D65 white point with Y scaled so that white is 100.

use serde_derive::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::colors::RGBColor;
use nalgebra::Vector3;

use crate::consts::{
    SRGB_DECODE_THRESHOLD, SRGB_ENCODE_THRESHOLD, SRGB_GAMMA, SRGB_TO_XYZ, XYZ_TO_SRGB,
};

/// A point in the CIE 1931 XYZ color space under D65.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis: a mix of the cone responses, roughly red.
    pub x: f64,
    /// The luminance, 0 for black and 100 for the sRGB white.
    pub y: f64,
    /// The Z axis: roughly the blue cone response.
    pub z: f64,
}

/// Undoes the sRGB transfer curve: a linear toe below 0.04045, a 2.4 power above.
pub(crate) fn srgb_decode(v: f64) -> f64 {
    if v > SRGB_DECODE_THRESHOLD {
        ((v + 0.055) / 1.055).powf(SRGB_GAMMA)
    } else {
        v / 12.92
    }
}

/// Applies the sRGB transfer curve to a linear value.
pub(crate) fn srgb_encode(v: f64) -> f64 {
    if v > SRGB_ENCODE_THRESHOLD {
        1.055 * v.powf(1.0 / SRGB_GAMMA) - 0.055
    } else {
        12.92 * v
    }
}

impl ColorSpace for XYZColor {
    fn from_rgb(rgb: RGBColor) -> XYZColor {
        let [r, g, b] = rgb.normalized();
        let linear = Vector3::new(srgb_decode(r), srgb_decode(g), srgb_decode(b)) * 100.0;
        let xyz = *SRGB_TO_XYZ * linear;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Out-of-gamut points (negative linear light, or above white) are clamped silently.
    fn to_rgb(&self) -> RGBColor {
        let linear = *XYZ_TO_SRGB * Vector3::new(self.x, self.y, self.z) / 100.0;
        RGBColor::from_f64_clamped(
            srgb_encode(linear[0]) * 255.0,
            srgb_encode(linear[1]) * 255.0,
            srgb_encode(linear[2]) * 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_transfer_curve_inverse() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert!(approx_eq!(f64, srgb_encode(srgb_decode(v)), v, epsilon = 1e-6));
        }
    }

    #[test]
    fn test_white_and_black() {
        let white = XYZColor::from_rgb(RGBColor { r: 255, g: 255, b: 255 });
        assert!(approx_eq!(f64, white.y, 100.0, epsilon = 1e-9));
        let black = XYZColor::from_rgb(RGBColor { r: 0, g: 0, b: 0 });
        assert_eq!(black, XYZColor { x: 0.0, y: 0.0, z: 0.0 });
        assert_eq!(white.to_rgb(), RGBColor { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_rgb_round_trip_is_exact() {
        for &(r, g, b) in &[(0, 0, 1), (12, 200, 99), (255, 128, 0), (1, 254, 127), (77, 77, 78)] {
            let rgb = RGBColor { r, g, b };
            assert_eq!(XYZColor::from_rgb(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        let too_bright = XYZColor { x: 300.0, y: 300.0, z: 300.0 };
        assert_eq!(too_bright.to_rgb(), RGBColor { r: 255, g: 255, b: 255 });
        let negative = XYZColor { x: -10.0, y: -10.0, z: -10.0 };
        assert_eq!(negative.to_rgb(), RGBColor { r: 0, g: 0, b: 0 });
    }
}
