//! This file provides the two notions of color distance the engine uses. Both treat two colors as
//! points in 3D space and return the length of the line between them; they differ in which space.
//!
//! - [`delta_e`] works in CIELAB and is the CIE76 color difference: roughly, a value of 2.3 is a
//!   just-noticeable difference. This is the distance to use whenever the answer should match what a
//!   person would call "similar".
//! - [`rgb_distance`] works on raw 8-bit RGB. It is cheap, but it is not perceptually uniform: two
//!   greens and two blues the same RGB distance apart look very differently far apart. Only the
//!   clusterer uses it, for speed.
//!
//! Both are metrics: zero exactly when the inputs are equal, symmetric, and obeying the triangle
//! inequality.

use serde_derive::{Deserialize, Serialize};

use crate::colors::{CIELABColor, RGBColor};
use crate::coord::Coord;

/// The CIE76 color difference between two CIELAB colors, with no weighting of the channels.
/// # Example
/// ```
/// # use tincture::{delta_e, colors::CIELABColor};
/// let lab1 = CIELABColor { l: 10.5, a: -45.0, b: 40.0 };
/// let lab2 = CIELABColor { l: 54.2, a: 65.0, b: 100.0 };
/// assert!((delta_e(lab1, lab2) - 132.70150715).abs() <= 1e-7);
/// ```
pub fn delta_e(lab1: CIELABColor, lab2: CIELABColor) -> f64 {
    Coord::from(lab1).euclidean_distance(&Coord::from(lab2))
}

/// The Euclidean distance between two colors in 8-bit RGB space.
pub fn rgb_distance(rgb1: RGBColor, rgb2: RGBColor) -> f64 {
    Coord::from(rgb1).euclidean_distance(&Coord::from(rgb2))
}

/// Which space the clusterer measures distances and averages centroids in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Raw RGB with [`rgb_distance`]. Fast, the default.
    Rgb,
    /// CIELAB with [`delta_e`]. Slower, but clusters follow perceived similarity.
    Lab,
}

impl Default for DistanceMetric {
    fn default() -> DistanceMetric {
        DistanceMetric::Rgb
    }
}

impl DistanceMetric {
    /// Embeds a color as a point in this metric's space.
    pub fn embed(self, rgb: RGBColor) -> Coord {
        match self {
            DistanceMetric::Rgb => Coord::from(rgb),
            DistanceMetric::Lab => Coord::from(crate::rgb_to_lab(rgb)),
        }
    }

    /// Maps a point in this metric's space back to the nearest 8-bit RGB color.
    pub fn project(self, point: Coord) -> RGBColor {
        match self {
            DistanceMetric::Rgb => RGBColor::from(point),
            DistanceMetric::Lab => crate::lab_to_rgb(CIELABColor::from(point)),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_distance() {
        let black = RGBColor { r: 0, g: 0, b: 0 };
        let white = RGBColor { r: 255, g: 255, b: 255 };
        assert!((rgb_distance(black, white) - 255.0 * 3f64.sqrt()).abs() < 1e-9);
        assert_eq!(rgb_distance(white, white), 0.0);
    }

    #[test]
    fn test_metric_laws() {
        let labs = [
            CIELABColor { l: 10.5, a: -45.0, b: 40.0 },
            CIELABColor { l: 54.2, a: 65.0, b: 100.0 },
            CIELABColor { l: 90.0, a: 0.0, b: -12.5 },
        ];
        for &a in &labs {
            assert_eq!(delta_e(a, a), 0.0);
            for &b in &labs {
                assert_eq!(delta_e(a, b), delta_e(b, a));
                for &c in &labs {
                    assert!(delta_e(a, b) <= delta_e(a, c) + delta_e(c, b) + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_embed_project() {
        let rgb = RGBColor { r: 12, g: 200, b: 99 };
        assert_eq!(DistanceMetric::Rgb.project(DistanceMetric::Rgb.embed(rgb)), rgb);
        assert_eq!(DistanceMetric::Lab.project(DistanceMetric::Lab.embed(rgb)), rgb);
    }
}
