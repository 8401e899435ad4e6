//! K-means clustering of color sets, with each cluster labeled by the family of its centroid.
//!
//! The algorithm is the textbook one: pick `k` distinct colors at random as the initial centroids,
//! then alternate between assigning every color to its nearest centroid and moving every centroid
//! to the mean of its colors, until no centroid moves more than [`CONVERGENCE_THRESHOLD`] or the
//! iteration limit is reached. A centroid that loses all of its colors stays where it is.
//!
//! The only source of randomness is the initial choice of centroids, and it always comes from an
//! RNG the caller passes in, so a fixed seed gives a fixed clustering.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classifier::get_color_family;
use crate::color::Color;
use crate::colors::RGBColor;
use crate::coord::Coord;
use crate::distance::DistanceMetric;
use crate::error::{ColorError, Result};
use crate::family::Family;

/// Iteration stops once no centroid moves further than this, in the units of the metric's space.
pub const CONVERGENCE_THRESHOLD: f64 = 1.0;

/// Where one input color ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    /// The position of the color in the input.
    pub index: usize,
    /// The cluster it was assigned to, an index into [`Clustering::centroids`].
    pub cluster: usize,
    /// The family of that cluster's centroid.
    pub family: Family,
}

/// The result of a clustering run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Clustering {
    /// The input colors grouped by the main family of their cluster. Clusters whose centroids share
    /// a main family are merged into one group. Within a group, colors keep their input order.
    pub groups: BTreeMap<String, Vec<Color>>,
    /// One entry per input color, in input order.
    pub assignments: Vec<ClusterAssignment>,
    /// The final centroid of every cluster, including any that ended up empty.
    pub centroids: Vec<RGBColor>,
    /// How many assign-and-update rounds ran before stopping.
    pub iterations: usize,
}

/// K-means clustering parameters.
/// # Example
/// ```
/// # use tincture::{cluster::KMeans, Color};
/// let colors: Vec<Color> = ["#FF0000", "#FE0101", "#0000FF", "#0101FE"]
///     .iter()
///     .map(|hex| Color::from_hex(hex).unwrap())
///     .collect();
/// let clustering = KMeans { k: 2, ..KMeans::default() }.cluster_seeded(&colors, 7).unwrap();
/// assert_eq!(clustering.groups["Red"].len(), 2);
/// assert_eq!(clustering.groups["Blue"].len(), 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KMeans {
    /// The number of clusters.
    pub k: usize,
    /// The most assign-and-update rounds to run.
    pub max_iterations: usize,
    /// The space distances and means are computed in.
    pub metric: DistanceMetric,
}

impl Default for KMeans {
    fn default() -> KMeans {
        KMeans {
            k: 8,
            max_iterations: 20,
            metric: DistanceMetric::Rgb,
        }
    }
}

/// The index of the centroid nearest each point. Ties go to the lower index.
fn assign(points: &[Coord], centroids: &[Coord]) -> Vec<usize> {
    points
        .iter()
        .map(|point| {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (i, centroid) in centroids.iter().enumerate() {
                let distance = point.euclidean_distance(centroid);
                if distance < best_distance {
                    best = i;
                    best_distance = distance;
                }
            }
            best
        })
        .collect()
}

/// Moves each centroid to the mean of its points and returns the largest distance any moved.
fn update(points: &[Coord], labels: &[usize], centroids: &mut [Coord]) -> f64 {
    let mut max_shift: f64 = 0.0;
    for (cluster, centroid) in centroids.iter_mut().enumerate() {
        let members: Vec<Coord> = points
            .iter()
            .zip(labels)
            .filter(|&(_, &label)| label == cluster)
            .map(|(point, _)| *point)
            .collect();
        if let Some(mean) = Coord::mean(&members) {
            max_shift = max_shift.max(centroid.euclidean_distance(&mean));
            *centroid = mean;
        }
    }
    max_shift
}

impl KMeans {
    /// Clusters `colors`, drawing the initial centroids from `rng`.
    /// # Errors
    /// Returns [`ColorError::InvalidParameter`] if `k` is 0. Empty input gives an empty
    /// [`Clustering`].
    pub fn cluster_with_rng<R: Rng + ?Sized>(
        &self,
        colors: &[Color],
        rng: &mut R,
    ) -> Result<Clustering> {
        if self.k == 0 {
            return Err(ColorError::InvalidParameter {
                parameter: "k",
                value: self.k.to_string(),
            });
        }
        if colors.is_empty() {
            return Ok(Clustering::default());
        }

        let points: Vec<Coord> = colors.iter().map(|c| self.metric.embed(c.rgb())).collect();
        let (labels, centroids, iterations) = if colors.len() <= self.k {
            ((0..colors.len()).collect(), points.clone(), 0)
        } else {
            let seeds = rand::seq::index::sample(rng, points.len(), self.k)
                .iter()
                .map(|i| points[i])
                .collect();
            self.refine(&points, seeds)
        };

        let centroids: Vec<RGBColor> = centroids.into_iter().map(|c| self.metric.project(c)).collect();
        let families: Vec<Family> = centroids.iter().map(|&c| get_color_family(c)).collect();

        let mut clustering = Clustering {
            centroids,
            iterations,
            ..Clustering::default()
        };
        for (index, (color, &cluster)) in colors.iter().zip(&labels).enumerate() {
            let family = families[cluster].clone();
            clustering
                .groups
                .entry(family.main().to_string())
                .or_insert_with(Vec::new)
                .push(color.clone());
            clustering.assignments.push(ClusterAssignment {
                index,
                cluster,
                family,
            });
        }
        debug!(
            colors = colors.len(),
            clusters = clustering.centroids.len(),
            groups = clustering.groups.len(),
            "Clustered colors"
        );
        Ok(clustering)
    }

    /// Clusters `colors` with an RNG seeded from `seed`.
    pub fn cluster_seeded(&self, colors: &[Color], seed: u64) -> Result<Clustering> {
        self.cluster_with_rng(colors, &mut StdRng::seed_from_u64(seed))
    }

    /// Runs assign-and-update rounds from the given starting centroids.
    fn refine(&self, points: &[Coord], mut centroids: Vec<Coord>) -> (Vec<usize>, Vec<Coord>, usize) {
        let mut labels = assign(points, &centroids);
        let mut iterations = 0;
        while iterations < self.max_iterations {
            let shift = update(points, &labels, &mut centroids);
            labels = assign(points, &centroids);
            iterations += 1;
            trace!(iteration = iterations, shift, "k-means iteration");
            if shift <= CONVERGENCE_THRESHOLD {
                debug!(iterations, metric = ?self.metric, "k-means converged");
                break;
            }
        }
        (labels, centroids, iterations)
    }
}

/// Clusters `colors` into at most `k` clusters in RGB space, running at most `iterations` rounds,
/// with the initial centroids chosen by an RNG seeded from `seed`.
pub fn k_means_cluster_colors(
    colors: &[Color],
    k: usize,
    iterations: usize,
    seed: u64,
) -> Result<Clustering> {
    KMeans {
        k,
        max_iterations: iterations,
        metric: DistanceMetric::Rgb,
    }
    .cluster_seeded(colors, seed)
}
