//! Nearest-neighbour search over a collection of [`Color`]s by perceptual distance. The search is a
//! linear scan: every member is compared to the query with [`delta_e`], using the member's cached
//! LAB value if it has one. Collections that are searched repeatedly should therefore be built with
//! [`Color::with_lab`].

use std::cmp::Ordering;

use serde_derive::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{Color, ColorSpace};
use crate::colors::{CIELABColor, RGBColor};
use crate::distance::delta_e;
use crate::error::{ColorError, Result};

/// A member of a collection and its distance from the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matching color.
    pub color: Color,
    /// Its CIE76 distance from the query.
    pub distance: f64,
}

fn check_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        Err(ColorError::InvalidParameter {
            parameter: "limit",
            value: limit.to_string(),
        })
    } else {
        Ok(())
    }
}

fn nearest(query: CIELABColor, collection: &[Color], limit: usize) -> Vec<Match> {
    let mut matches: Vec<Match> = collection
        .iter()
        .map(|color| Match {
            color: color.clone(),
            distance: delta_e(query, color.lab()),
        })
        .collect();
    // sort_by is stable, so equidistant colors keep their collection order
    matches.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    matches.truncate(limit);
    matches
}

/// Returns the `limit` members of `collection` closest to `query`, nearest first. Ties keep their
/// order in the collection. Fewer than `limit` matches are returned if the collection is smaller.
/// # Errors
/// Returns [`ColorError::InvalidParameter`] if `limit` is 0. An empty collection is not an error:
/// it has no matches.
/// # Example
/// ```
/// # use tincture::{find_similar, Color, colors::RGBColor};
/// let palette: Vec<Color> = ["#FF0000", "#00FF00", "#EE1111"]
///     .iter()
///     .map(|hex| Color::from_hex(hex).unwrap())
///     .collect();
/// let matches = find_similar(RGBColor { r: 250, g: 5, b: 5 }, &palette, 2).unwrap();
/// assert_eq!(matches[0].color.hex(), "#FF0000");
/// assert_eq!(matches[1].color.hex(), "#EE1111");
/// ```
pub fn find_similar(query: RGBColor, collection: &[Color], limit: usize) -> Result<Vec<Match>> {
    check_limit(limit)?;
    trace!(query = %query, collection = collection.len(), limit, "Finding similar colors");
    Ok(nearest(CIELABColor::from_rgb(query), collection, limit))
}

/// Runs [`find_similar`] for each query against the same collection, returning one list of matches
/// per query, in query order.
pub fn find_similar_many(
    queries: &[RGBColor],
    collection: &[Color],
    limit: usize,
) -> Result<Vec<Vec<Match>>> {
    check_limit(limit)?;
    Ok(queries
        .iter()
        .map(|&query| nearest(CIELABColor::from_rgb(query), collection, limit))
        .collect())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn palette(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|hex| Color::from_hex(hex).unwrap()).collect()
    }

    #[test]
    fn test_self_match_first() {
        let colors = palette(&["#123456", "#654321", "#ABCDEF", "#FEDCBA"]);
        for color in &colors {
            let matches = find_similar(color.rgb(), &colors, 4).unwrap();
            assert_eq!(matches[0].color.hex(), color.hex());
            assert_eq!(matches[0].distance, 0.0);
            assert!(matches.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
    }

    #[test]
    fn test_limits() {
        let colors = palette(&["#000000", "#FFFFFF"]);
        let query = RGBColor { r: 10, g: 10, b: 10 };
        assert_eq!(find_similar(query, &colors, 5).unwrap().len(), 2);
        assert_eq!(find_similar(query, &colors, 1).unwrap()[0].color.hex(), "#000000");
        assert!(find_similar(query, &[], 3).unwrap().is_empty());
        assert_eq!(
            find_similar(query, &colors, 0),
            Err(ColorError::InvalidParameter {
                parameter: "limit",
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let colors = palette(&["#808080", "#111111", "#808080"]);
        let with_lab: Vec<Color> = colors.iter().cloned().map(Color::with_cached_lab).collect();
        let matches = find_similar(RGBColor { r: 128, g: 128, b: 128 }, &with_lab, 3).unwrap();
        assert_eq!(matches[0].distance, matches[1].distance);
        assert_eq!(matches[2].color.hex(), "#111111");
    }

    #[test]
    fn test_many() {
        let colors = palette(&["#FF0000", "#0000FF"]);
        let queries = [RGBColor { r: 0, g: 0, b: 200 }, RGBColor { r: 200, g: 0, b: 0 }];
        let results = find_similar_many(&queries, &colors, 1).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0][0].color.hex(), "#0000FF");
        assert_eq!(results[1][0].color.hex(), "#FF0000");
        assert!(find_similar_many(&queries, &colors, 0).is_err());
    }
}
