//! Pipeline driver: commuters in, matched cabs and a total distance out.
//!
//! [`Dispatcher`] wires the stages together: k-means clustering with
//! k = number of cabs, group materialization, greedy assignment, then a sum
//! of per-cab pickup distances. All run-scoped data is passed through
//! explicitly; nothing survives between runs.

use crate::assign::{assign_cabs, Assignment};
use crate::cluster::Kmeans;
use crate::error::Result;
use crate::model::{Cab, Commuter, CommuterGroup};

/// Runs the full pooling pipeline.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    seed: Option<u64>,
    max_iter: Option<usize>,
    tolerance: Option<f64>,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    /// The k commuter groups, each holding its members and assigned cab.
    /// Groups can be empty when the input has fewer distinct locations
    /// than cabs; member counts still sum to the number of commuters.
    pub groups: Vec<CommuterGroup>,
    /// Cab-to-group matches in cab input order.
    pub assignments: Vec<Assignment>,
    /// Sum of each cab's distance to its pickup point.
    pub total_distance: f64,
}

impl Dispatcher {
    /// Create a dispatcher with default clustering settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the clustering RNG seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the clustering iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Override the clustering convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Group `commuters` into one cluster per cab, assign each cab to its
    /// nearest group, and total the pickup distances.
    ///
    /// `cabs` is mutated in place: each cab's `pickup_point` is set to its
    /// matched group's centroid.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::EmptyInput`] if `commuters` is empty.
    /// - [`crate::Error::InvalidClusterCount`] if there are no cabs, or more
    ///   cabs than commuters.
    pub fn run(&self, commuters: &[Commuter], cabs: &mut [Cab]) -> Result<DispatchReport> {
        let mut groups = self.group_commuters(commuters, cabs.len())?;
        let assignments = assign_cabs(&mut groups, cabs)?;

        let total_distance = cabs
            .iter()
            .map(|cab| cab.location.distance(&cab.pickup_point))
            .sum();

        Ok(DispatchReport {
            groups,
            assignments,
            total_distance,
        })
    }

    /// Partition `commuters` into `k` groups via k-means.
    ///
    /// Exactly `k` groups come back, each carrying the centroid the fit
    /// converged on; membership follows the fit's labels.
    pub fn group_commuters(&self, commuters: &[Commuter], k: usize) -> Result<Vec<CommuterGroup>> {
        let points: Vec<_> = commuters.iter().map(|c| c.location).collect();

        let mut kmeans = Kmeans::new(k);
        if let Some(seed) = self.seed {
            kmeans = kmeans.with_seed(seed);
        }
        if let Some(max_iter) = self.max_iter {
            kmeans = kmeans.with_max_iter(max_iter);
        }
        if let Some(tolerance) = self.tolerance {
            kmeans = kmeans.with_tolerance(tolerance);
        }

        let fit = kmeans.fit(&points)?;

        let mut groups: Vec<CommuterGroup> =
            fit.centroids.iter().map(|&c| CommuterGroup::new(c)).collect();
        for (commuter, &label) in commuters.iter().zip(fit.labels.iter()) {
            groups[label].add_commuter(*commuter);
        }
        Ok(groups)
    }
}
