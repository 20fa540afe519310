//! K-means clustering (k-means++ seeding, Lloyd iterations).
//!
//! # The Algorithm
//!
//! Lloyd's algorithm alternates two steps until the centroids stop moving:
//!
//! 1. **Assignment**: each point joins the nearest centroid (Euclidean
//!    distance, ties broken by lowest centroid index).
//! 2. **Update**: each centroid moves to the arithmetic mean of its members.
//!
//! **Objective**: minimize the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{p ∈ C_k} ||p - μ_k||²
//! ```
//!
//! ## Initialization
//!
//! Centroids are seeded with k-means++ (Arthur & Vassilvitskii, 2007): the
//! first centroid is a uniformly random input point, each subsequent one is
//! sampled with probability proportional to its squared distance from the
//! nearest centroid chosen so far. This spreads the seeds and makes the
//! iteration count far less sensitive to unlucky starts than uniform
//! sampling. Under [`Kmeans::with_seed`] the whole run is deterministic.
//!
//! ## Empty clusters
//!
//! A centroid can lose all its members mid-run (and always will when the
//! input holds fewer distinct locations than `k`). Rather than leaving it
//! undefined, the update step re-seeds it to the point farthest from its
//! nearest centroid, i.e. the point the current model explains worst.
//!
//! ## Termination
//!
//! The loop stops when the summed centroid movement falls below the
//! configured tolerance, or after the iteration cap, whichever comes first.
//! The cap is the only bound against non-termination.

use rand::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Vector;

/// K-means clusterer over 2-D points.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters to produce.
    k: usize,
    /// Maximum Lloyd iterations.
    max_iter: usize,
    /// Convergence threshold on the summed centroid movement.
    tolerance: f64,
    /// Optional RNG seed for reproducibility.
    seed: Option<u64>,
}

/// Result of fitting [`Kmeans`] to a dataset.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Final centroid positions, `k` of them.
    pub centroids: Vec<Vector>,
    /// Cluster label per input point, each in `0..k`.
    pub labels: Vec<usize>,
    /// Lloyd iterations actually performed.
    pub iterations: usize,
    /// Whether the movement tolerance was reached before the iteration cap.
    pub converged: bool,
}

impl Kmeans {
    /// Create a k-means clusterer targeting `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 50,
            tolerance: 1e-9,
            seed: None,
        }
    }

    /// Set the iteration cap (default 50).
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance on total centroid movement (default 1e-9).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fix the RNG seed so repeated fits on the same input produce identical
    /// centroids and labels.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.k
    }

    /// Partition `points` into `k` clusters.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `points` is empty.
    /// - [`Error::InvalidClusterCount`] if `k == 0` or `k > points.len()`.
    pub fn fit(&self, points: &[Vector]) -> Result<KmeansFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_points: n,
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut centroids = plus_plus_init(points, self.k, rng.as_mut());
        let mut labels = vec![0usize; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;

            assign_labels(points, &centroids, &mut labels);
            let movement = update_centroids(points, &labels, &mut centroids);

            if movement < self.tolerance {
                converged = true;
                break;
            }
        }

        // Labels must reflect the final centroid positions.
        assign_labels(points, &centroids, &mut labels);

        Ok(KmeansFit {
            centroids,
            labels,
            iterations,
            converged,
        })
    }
}

/// k-means++ seeding: first centroid uniform, the rest sampled proportional
/// to squared distance from the nearest centroid chosen so far.
fn plus_plus_init(points: &[Vector], k: usize, rng: &mut dyn RngCore) -> Vec<Vector> {
    let n = points.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.random_range(0..n)]);

    // Squared distance from each point to its nearest chosen centroid.
    let mut best_sq: Vec<f64> = points
        .iter()
        .map(|p| {
            let d = p.distance(&centroids[0]);
            d * d
        })
        .collect();

    while centroids.len() < k {
        let total: f64 = best_sq.iter().sum();
        let next = if total > 0.0 {
            // Inverse-CDF sampling over the squared-distance weights.
            let mut target = rng.random::<f64>() * total;
            let mut chosen = n - 1;
            for (i, &w) in best_sq.iter().enumerate() {
                target -= w;
                if target <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // All remaining points coincide with a centroid; any pick works.
            rng.random_range(0..n)
        };

        let c = points[next];
        centroids.push(c);
        for (p, best) in points.iter().zip(best_sq.iter_mut()) {
            let d = p.distance(&c);
            let sq = d * d;
            if sq < *best {
                *best = sq;
            }
        }
    }

    centroids
}

/// Assignment step: label each point with its nearest centroid.
///
/// Strict `<` keeps the lowest centroid index on ties.
fn assign_labels(points: &[Vector], centroids: &[Vector], labels: &mut [usize]) {
    for (point, label) in points.iter().zip(labels.iter_mut()) {
        let mut best = 0;
        let mut best_dist = point.distance(&centroids[0]);
        for (idx, centroid) in centroids.iter().enumerate().skip(1) {
            let d = point.distance(centroid);
            if d < best_dist {
                best_dist = d;
                best = idx;
            }
        }
        *label = best;
    }
}

/// Update step: move each centroid to the mean of its members, re-seeding
/// memberless centroids. Returns the summed centroid movement.
fn update_centroids(points: &[Vector], labels: &[usize], centroids: &mut [Vector]) -> f64 {
    let k = centroids.len();
    let mut sums = vec![Vector::ZERO; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in points.iter().zip(labels.iter()) {
        sums[label].x += point.x;
        sums[label].y += point.y;
        counts[label] += 1;
    }

    let mut movement = 0.0;
    for idx in 0..k {
        let new_centroid = if counts[idx] > 0 {
            Vector::new(
                sums[idx].x / counts[idx] as f64,
                sums[idx].y / counts[idx] as f64,
            )
        } else {
            // Re-seed to the point the current model explains worst: the one
            // farthest from its nearest centroid.
            farthest_point(points, centroids)
        };
        movement += centroids[idx].distance(&new_centroid);
        centroids[idx] = new_centroid;
    }
    movement
}

/// The input point with the largest distance to its nearest centroid.
fn farthest_point(points: &[Vector], centroids: &[Vector]) -> Vector {
    let mut farthest = points[0];
    let mut farthest_dist = -1.0;
    for point in points {
        let nearest = centroids
            .iter()
            .map(|c| point.distance(c))
            .fold(f64::INFINITY, f64::min);
        if nearest > farthest_dist {
            farthest_dist = nearest;
            farthest = *point;
        }
    }
    farthest
}
