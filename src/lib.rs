//! Tincture is a small color science engine for organizing palettes. It converts between sRGB,
//! CIELAB and HSL, measures how different two colors look, sorts colors into named families and
//! shades ("Blue", "Navy"), finds the closest matches to a color in a collection, and groups a
//! collection into k-means clusters labeled by family.
//!
//! Everything is pure and synchronous: values go in, new values come out, and nothing is stored.
//! The one source of randomness, the initial centroids of a clustering run, always comes from an RNG
//! the caller controls.
//!
//! # Example
//! ```
//! use tincture::prelude::*;
//! use tincture::{delta_e, find_similar, get_color_family};
//!
//! let red = RGBColor::from_hex_code("#FF0000").unwrap();
//! assert_eq!(get_color_family(red).main(), "Red");
//!
//! let palette = vec![Color::with_lab(red), Color::from_hex("#0000FF").unwrap()];
//! let matches = find_similar(RGBColor { r: 230, g: 10, b: 20 }, &palette, 1).unwrap();
//! assert_eq!(matches[0].color.hex(), "#FF0000");
//! assert!(delta_e(red.convert(), matches[0].color.lab()) < 1e-9);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

pub mod classifier;
pub mod cluster;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod csscolor;
pub mod distance;
pub mod error;
pub mod family;
pub mod grouping;
pub mod prelude;
pub mod search;

pub use crate::classifier::{
    analyze, analyze_hex, batch_classify, classify_hex, get_color_family, BatchPolicy,
    ColorAnalysis, FamilyClassifier, FamilyTable,
};
pub use crate::cluster::{k_means_cluster_colors, Clustering, KMeans};
pub use crate::color::Color;
pub use crate::colors::cielabcolor::{lab_to_rgb, rgb_to_lab};
pub use crate::colors::hslcolor::{chroma as get_chroma, lightness as get_lightness, rgb_to_hsl};
pub use crate::colors::rgbcolor::{hex_to_rgb, rgb_to_hex};
pub use crate::distance::{delta_e, rgb_distance};
pub use crate::error::{ColorError, Result};
pub use crate::family::Family;
pub use crate::search::{find_similar, find_similar as find_similar_colors, find_similar_many};
