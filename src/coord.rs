//! This module contains a struct, [`Coord`], that models a point in 3D space and supports the
//! limited arithmetic needed to treat colors as points: sums, differences, scaling, Euclidean
//! distance and means. RGB and CIELAB colors both embed into a `Coord`, which lets distance and
//! clustering code be written once for either space.

use std::ops::{Add, Div, Mul, Sub};

use num::{Num, NumCast, ToPrimitive};
use serde_derive::{Deserialize, Serialize};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can scale a [`Coord`].
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. A color that converts to a `Coord` maps its components onto the axes in
/// the order of the letters in its name: `RGBColor` puts `r` on x, `g` on y and `b` on z, and
/// `CIELABColor` puts `l` on x, `a` on y and `b` on z.
///
/// # Example
/// ```
/// # use tincture::coord::Coord;
/// let point_1 = Coord { x: 1., y: 8., z: 7. };
/// let point_2 = Coord { x: 7., y: 2., z: 3. };
/// let sum = point_1 + point_2; // (8, 10, 10)
/// let diff = point_1 - point_2; // (-6, 6, 4)
/// let prod = point_1 * 2u8; // (2, 16, 14)
/// assert_eq!(sum, Coord { x: 8., y: 10., z: 10. });
/// assert_eq!(diff, Coord { x: -6., y: 6., z: 4. });
/// assert_eq!(prod, Coord { x: 2., y: 16., z: 14. });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication and division only: (a, b, c) * s = (sa, sb, sc)
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = rhs.to_f64().unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r = rhs.to_f64().unwrap_or(f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. In CIELAB this is the CIE76 color difference; in RGB it
    /// is fast but not perceptually uniform.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord { x: 0., y: 0., z: -1. };
    /// let point2 = Coord { x: 2., y: 3., z: 5. };
    /// assert!((point1.euclidean_distance(&point2) - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// The arithmetic mean of a set of points, or `None` if there are none.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let points = [Coord { x: 0., y: 0., z: 1. }, Coord { x: 1., y: 1., z: 1. },
    ///               Coord { x: 2., y: 1., z: 1. }];
    /// let mean = Coord::mean(&points).unwrap();
    /// assert!((mean.x - 1.).abs() <= 1e-10);
    /// assert!((mean.y - 2. / 3.).abs() <= 1e-10);
    /// assert!(Coord::mean(&[]).is_none());
    /// ```
    pub fn mean(points: &[Coord]) -> Option<Coord> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Coord::default(), |acc, p| acc + *p);
        Some(sum / points.len())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let c = Coord { x: 1., y: -2., z: 4. };
        assert_eq!(c * 0.5, Coord { x: 0.5, y: -1., z: 2. });
        assert_eq!(c / 2usize, Coord { x: 0.5, y: -1., z: 2. });
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coord { x: 10.5, y: -45.0, z: 40.0 };
        let b = Coord { x: 54.2, y: 65.0, z: 100.0 };
        assert!((a.euclidean_distance(&b) - 132.70150715).abs() <= 1e-7);
        assert_eq!(a.euclidean_distance(&b), b.euclidean_distance(&a));
        assert_eq!(a.euclidean_distance(&a), 0.0);
    }
}
