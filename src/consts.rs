//! This file provides the constants used for sRGB, CIE XYZ and CIELAB conversion. The forward
//! matrix is the four-decimal sRGB/D65 one, so that `xyz = M * rgb_linear`. Its inverse is computed
//! rather than typed in: the published four-decimal inverse is slightly off, and RGB -> XYZ -> RGB
//! should give back exactly what went in.

use lazy_static::lazy_static;
use nalgebra::Matrix3;

lazy_static! {
    /// Linear sRGB (scaled to 0-100) to CIE XYZ, D65.
    pub(crate) static ref SRGB_TO_XYZ: Matrix3<f64> = Matrix3::new(
        0.4124, 0.3576, 0.1805,
        0.2126, 0.7152, 0.0722,
        0.0193, 0.1192, 0.9505,
    );
    /// CIE XYZ, D65 to linear sRGB (scaled to 0-100): the exact inverse of [`SRGB_TO_XYZ`].
    pub(crate) static ref XYZ_TO_SRGB: Matrix3<f64> = inv(*SRGB_TO_XYZ);
}

/// Inverts a constant matrix. Only meant for the matrices in this file, which are all invertible:
/// this panics on a singular matrix.
fn inv(m: Matrix3<f64>) -> Matrix3<f64> {
    m.try_inverse().expect("constant conversion matrix is singular")
}

/// The D65 reference white, normalized so that Y is 100.
pub(crate) const D65_WHITE_POINT: [f64; 3] = [95.047, 100.0, 108.883];

/// Below this encoded value sRGB is linear rather than a power curve.
pub(crate) const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// The linear-light equivalent of [`SRGB_DECODE_THRESHOLD`], used when encoding.
pub(crate) const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;
pub(crate) const SRGB_GAMMA: f64 = 2.4;

/// The CIELAB cube-root cutoff, (6/29)^3 rounded the way most published formulas round it.
pub(crate) const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment below [`LAB_EPSILON`].
pub(crate) const LAB_KAPPA_SLOPE: f64 = 7.787;
pub(crate) const LAB_OFFSET: f64 = 16.0 / 116.0;

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_white_maps_to_white_point() {
        let xyz = *SRGB_TO_XYZ * Vector3::new(100.0, 100.0, 100.0);
        for i in 0..3 {
            assert!((xyz[i] - D65_WHITE_POINT[i]).abs() < 0.1);
        }
    }

    #[test]
    fn test_matrices_are_inverse() {
        let v = Vector3::new(20.0, 55.0, 80.0);
        let back = *XYZ_TO_SRGB * (*SRGB_TO_XYZ * v);
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-9);
        }
        let identity = *XYZ_TO_SRGB * *SRGB_TO_XYZ;
        assert!((identity - Matrix3::identity()).abs().max() < 1e-12);
    }
}
