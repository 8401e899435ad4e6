//! Orderings and groupings of color collections for display: sort a palette by one attribute, or
//! split it into families presented in a fixed, familiar order (the rainbow, then browns and
//! neutrals) rather than alphabetically.

use std::cmp::Reverse;
use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;
use serde_derive::{Deserialize, Serialize};

use crate::classifier::{get_color_family, FamilyTable};
use crate::color::Color;
use crate::colors::hslcolor::{chroma, lightness, rgb_to_hsl};

lazy_static! {
    static ref FAMILY_RANK: HashMap<&'static str, usize> = hashmap! {
        "Red" => 0,
        "Orange" => 1,
        "Yellow" => 2,
        "Green" => 3,
        "Blue" => 4,
        "Purple" => 5,
        "Pink" => 6,
        "Brown" => 7,
        "Gray" => 8,
        "Black" => 9,
        "White" => 10,
        "Aqua/Teal" => 11,
        "Unknown" => 12,
    };
}

/// The attribute to sort a collection by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Main family name, alphabetically.
    Family,
    /// HSL hue, ascending from red.
    Hue,
    /// Saturation, most saturated first.
    Chroma,
    /// Lightness, lightest first.
    Lightness,
}

/// Returns the colors sorted by the given key. The sort is stable: colors that compare equal keep
/// their input order.
pub fn sort_colors(colors: &[Color], key: SortKey) -> Vec<Color> {
    let mut sorted = colors.to_vec();
    match key {
        SortKey::Family => {
            sorted.sort_by_cached_key(|c| get_color_family(c.rgb()).main().to_string())
        }
        SortKey::Hue => sorted.sort_by_cached_key(|c| rgb_to_hsl(c.rgb()).h),
        SortKey::Chroma => sorted.sort_by_cached_key(|c| Reverse(chroma(c.rgb()))),
        SortKey::Lightness => sorted.sort_by_cached_key(|c| Reverse(lightness(c.rgb()))),
    }
    sorted
}

/// Splits the colors into groups by main family under `table`. Groups come out in the order Red,
/// Orange, Yellow, Green, Blue, Purple, Pink, Brown, Gray, Black, White, Aqua/Teal, Unknown, with
/// any other family names a custom table produces after those in the order they were first seen.
/// Families with no colors are left out, and colors keep their input order within a group.
/// # Example
/// ```
/// # use tincture::{grouping::group_by_family, Color, FamilyTable};
/// let colors: Vec<Color> = ["#FFFFFF", "#0000FF", "#FF0000", "#0000EE"]
///     .iter()
///     .map(|hex| Color::from_hex(hex).unwrap())
///     .collect();
/// let groups = group_by_family(&colors, &FamilyTable::default());
/// let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
/// assert_eq!(names, vec!["Red", "Blue", "White"]);
/// assert_eq!(groups[1].1.len(), 2);
/// ```
pub fn group_by_family(colors: &[Color], table: &FamilyTable) -> Vec<(String, Vec<Color>)> {
    let mut groups: Vec<(String, Vec<Color>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for color in colors {
        let family = table.classify_hsl(rgb_to_hsl(color.rgb()));
        let main = family.main();
        match positions.get(main) {
            Some(&i) => groups[i].1.push(color.clone()),
            None => {
                positions.insert(main.to_string(), groups.len());
                groups.push((main.to_string(), vec![color.clone()]));
            }
        }
    }
    // stable, so unranked families stay in first-seen order
    groups.sort_by_key(|(name, _)| {
        FAMILY_RANK
            .get(name.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });
    groups
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::classifier::{HueBand, HueSpan, ShadeSet};

    fn palette(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|hex| Color::from_hex(hex).unwrap()).collect()
    }

    fn hexes(colors: &[Color]) -> Vec<&str> {
        colors.iter().map(Color::hex).collect()
    }

    #[test]
    fn test_sort_keys() {
        let colors = palette(&["#0000FF", "#808080", "#FF0000", "#00FF00", "#400000"]);
        assert_eq!(
            hexes(&sort_colors(&colors, SortKey::Hue)),
            vec!["#808080", "#FF0000", "#400000", "#00FF00", "#0000FF"]
        );
        assert_eq!(
            hexes(&sort_colors(&colors, SortKey::Lightness)),
            vec!["#0000FF", "#808080", "#FF0000", "#00FF00", "#400000"]
        );
        assert_eq!(
            hexes(&sort_colors(&colors, SortKey::Chroma)),
            vec!["#0000FF", "#FF0000", "#00FF00", "#400000", "#808080"]
        );
        assert_eq!(
            hexes(&sort_colors(&colors, SortKey::Family)),
            vec!["#0000FF", "#808080", "#00FF00", "#FF0000", "#400000"]
        );
    }

    #[test]
    fn test_canonical_group_order() {
        let colors = palette(&["#FFFFFF", "#40E0D0", "#000000", "#808080", "#FFC0CB", "#FF0000"]);
        let groups = group_by_family(&colors, &FamilyTable::default());
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Pink", "Gray", "Black", "White", "Aqua/Teal"]);
    }

    #[test]
    fn test_unranked_families_follow_in_first_seen_order() {
        let mut table = FamilyTable::default();
        let extra = |family: &str, start, end| HueBand {
            family: family.to_string(),
            span: HueSpan::new(start, end),
            shades: ShadeSet::new(vec![], family),
        };
        table.bands.insert(0, extra("Violet", 270, 300));
        table.bands.insert(1, extra("Cyan", 175, 185));
        // the first matching band wins, so Violet and Cyan now shadow part of Purple and Aqua/Teal
        let colors = palette(&["#8000FF", "#00FFFF", "#FF0000", "#8000FF"]);
        let groups = group_by_family(&colors, &table);
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Violet", "Cyan"]);
        assert_eq!(groups[1].1.len(), 2);
    }
}
