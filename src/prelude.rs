//! This module brings the most common Tincture functionality under a single namespace, to prevent
//! excessive imports: the [`ColorSpace`] trait, the ubiquitous [`RGBColor`] and [`Color`], the
//! [`Family`] label, and [`ColorError`]. The other color spaces in [`colors`](crate::colors) are not
//! included.

pub use crate::color::{Color, ColorSpace};
pub use crate::colors::RGBColor;
pub use crate::error::ColorError;
pub use crate::family::Family;
