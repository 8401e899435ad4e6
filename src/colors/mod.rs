//! This module contains one file per color space Tincture understands. Every type implements
//! [`ColorSpace`](crate::color::ColorSpace), converting through 8-bit sRGB. For convenience, each
//! main type is imported into this module's namespace directly.
pub mod cielabcolor;
pub mod hslcolor;
pub mod rgbcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::hslcolor::HSLColor;
pub use self::rgbcolor::RGBColor;
pub use self::xyzcolor::XYZColor;
