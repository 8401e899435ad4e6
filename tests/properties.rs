//! Properties that hold across the whole crate rather than inside one module.

use std::collections::BTreeSet;

use float_cmp::approx_eq;
use maplit::btreeset;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tincture::cluster::KMeans;
use tincture::colors::{CIELABColor, RGBColor};
use tincture::distance::DistanceMetric;
use tincture::prelude::*;
use tincture::{
    delta_e, find_similar_colors, get_color_family, hex_to_rgb, lab_to_rgb, rgb_distance,
    rgb_to_hex, rgb_to_lab, FamilyTable,
};

fn cube(step: usize) -> impl Iterator<Item = RGBColor> {
    (0..=255usize).step_by(step).flat_map(move |r| {
        (0..=255usize).step_by(step).flat_map(move |g| {
            (0..=255usize).step_by(step).map(move |b| RGBColor {
                r: r as u8,
                g: g as u8,
                b: b as u8,
            })
        })
    })
}

#[test]
fn hex_round_trip() {
    for rgb in cube(5) {
        let hex = rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
        assert_eq!(hex, rgb.to_string());
        assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
        assert_eq!(hex_to_rgb(&hex.to_lowercase()).unwrap(), rgb);
    }
}

#[test]
fn lab_round_trip_over_the_full_cube() {
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in (0..=255u8).step_by(3) {
                let rgb = RGBColor { r, g, b };
                let back = lab_to_rgb(rgb_to_lab(rgb));
                assert!((i16::from(back.r) - i16::from(r)).abs() <= 1, "{}", rgb);
                assert!((i16::from(back.g) - i16::from(g)).abs() <= 1, "{}", rgb);
                assert!((i16::from(back.b) - i16::from(b)).abs() <= 1, "{}", rgb);
            }
        }
    }
}

#[test]
fn known_lab_values() {
    let red = rgb_to_lab(RGBColor { r: 255, g: 0, b: 0 });
    assert!(approx_eq!(f64, red.l, 53.23, epsilon = 0.05));
    assert!(approx_eq!(f64, red.a, 80.11, epsilon = 0.05));
    assert!(approx_eq!(f64, red.b, 67.22, epsilon = 0.05));
    let black = rgb_to_lab(RGBColor { r: 0, g: 0, b: 0 });
    assert!(approx_eq!(f64, black.l, 0.0, epsilon = 1e-9));
}

#[test]
fn distances_are_metrics() {
    let colors: Vec<RGBColor> = cube(85).collect();
    for &a in &colors {
        let lab_a = rgb_to_lab(a);
        assert_eq!(rgb_distance(a, a), 0.0);
        assert_eq!(delta_e(lab_a, lab_a), 0.0);
        for &b in &colors {
            let lab_b = rgb_to_lab(b);
            assert!(approx_eq!(f64, rgb_distance(a, b), rgb_distance(b, a), ulps = 2));
            assert!(approx_eq!(f64, delta_e(lab_a, lab_b), delta_e(lab_b, lab_a), ulps = 2));
            if a != b {
                assert!(delta_e(lab_a, lab_b) > 0.0);
            }
        }
    }
}

#[test]
fn delta_e_reference_value() {
    let lab1 = CIELABColor { l: 10.5, a: -45.0, b: 40.0 };
    let lab2 = CIELABColor { l: 54.2, a: 65.0, b: 100.0 };
    assert!(approx_eq!(f64, delta_e(lab1, lab2), 132.70150715, epsilon = 1e-7));
}

#[test]
fn classification_fixtures_and_determinism() {
    let expected = [
        ("#FF0000", "Red"),
        ("#000000", "Black"),
        ("#FFFFFF", "White"),
        ("#808080", "Gray"),
    ];
    for &(hex, main) in &expected {
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(get_color_family(rgb).main(), main);
        assert_eq!(get_color_family(rgb), get_color_family(rgb));
    }
}

#[test]
fn every_color_gets_a_known_family() {
    let table = FamilyTable::default();
    let mains: BTreeSet<String> = cube(17)
        .map(|rgb| {
            let family = get_color_family(rgb);
            assert!(family.is_valid_for(&table), "{} gave {}", rgb, family);
            family.main().to_string()
        })
        .collect();
    let expected: BTreeSet<String> = btreeset! {
        "Aqua/Teal", "Black", "Blue", "Brown", "Gray", "Green", "Orange", "Pink", "Purple", "Red",
        "White", "Yellow",
    }
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(mains, expected);
}

#[test]
fn similarity_search_finds_self_first() {
    let collection: Vec<Color> = cube(51).map(Color::with_lab).collect();
    for color in collection.iter().step_by(7) {
        let matches = find_similar_colors(color.rgb(), &collection, 3).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].color.rgb(), color.rgb());
        assert_eq!(matches[0].distance, 0.0);
    }
}

#[test]
fn clustering_invariants() {
    let colors: Vec<Color> = cube(51).map(Color::new).collect();
    for &metric in &[DistanceMetric::Rgb, DistanceMetric::Lab] {
        let kmeans = KMeans {
            k: 6,
            max_iterations: 15,
            metric,
        };
        let first = kmeans
            .cluster_with_rng(&colors, &mut StdRng::seed_from_u64(2024))
            .unwrap();
        let second = kmeans
            .cluster_with_rng(&colors, &mut StdRng::seed_from_u64(2024))
            .unwrap();
        assert_eq!(first, second);

        assert_eq!(first.centroids.len(), 6);
        let used: BTreeSet<usize> = first.assignments.iter().map(|a| a.cluster).collect();
        assert!(used.len() <= 6);
        assert!(first.groups.len() <= used.len());

        let total: usize = first.groups.values().map(Vec::len).sum();
        assert_eq!(total, colors.len());
        for (i, assignment) in first.assignments.iter().enumerate() {
            assert_eq!(assignment.index, i);
            assert_eq!(
                assignment.family.main(),
                get_color_family(first.centroids[assignment.cluster]).main()
            );
        }
    }
}
