//! Greedy nearest-group cab assignment.
//!
//! Cabs are processed in input order. Each cab scans every still-unclaimed
//! group, takes the one whose centroid is nearest (first encountered wins
//! ties), and claims it so no group is matched twice. The result is a
//! bijection between cabs and groups.
//!
//! This is a greedy heuristic, not an optimal matching: an early cab can
//! claim a group that a later cab sits right on top of, leaving the later
//! cab with a far group. Minimizing the *total* distance would require a
//! proper assignment-problem solver (e.g. Kuhn-Munkres), which is out of
//! scope here.

use crate::error::{Error, Result};
use crate::geometry::Vector;
use crate::model::{Cab, CommuterGroup};

/// One cab-to-group match produced by [`assign_cabs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    /// Index of the cab in the input slice.
    pub cab: usize,
    /// Centroid of the matched group, now the cab's pickup point.
    pub centroid: Vector,
    /// Distance from the cab's location to that centroid.
    pub distance: f64,
}

/// Match every cab to its nearest unclaimed group.
///
/// On success every group holds exactly one cab, every cab's `pickup_point`
/// equals its group's centroid, and the returned records are in cab input
/// order.
///
/// # Errors
///
/// [`Error::CountMismatch`] if the pools differ in size. The pipeline always
/// constructs equal counts (k = number of cabs), so this is a precondition
/// check rather than an expected runtime branch.
pub fn assign_cabs(groups: &mut [CommuterGroup], cabs: &mut [Cab]) -> Result<Vec<Assignment>> {
    if groups.len() != cabs.len() {
        return Err(Error::CountMismatch {
            groups: groups.len(),
            cabs: cabs.len(),
        });
    }

    let mut claimed = vec![false; groups.len()];
    let mut assignments = Vec::with_capacity(cabs.len());

    for (cab_idx, cab) in cabs.iter_mut().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (group_idx, group) in groups.iter().enumerate() {
            if claimed[group_idx] {
                continue;
            }
            let d = cab.location.distance(&group.centroid);
            // Strict `<` keeps the first-encountered group on ties.
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((group_idx, d));
            }
        }

        // Pools are the same size, so an unclaimed group always remains.
        if let Some((group_idx, distance)) = best {
            claimed[group_idx] = true;
            groups[group_idx].set_cab(cab_idx, cab);
            assignments.push(Assignment {
                cab: cab_idx,
                centroid: groups[group_idx].centroid,
                distance,
            });
        }
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_at(x: f64, y: f64) -> CommuterGroup {
        CommuterGroup::new(Vector::new(x, y))
    }

    #[test]
    fn test_assign_matches_nearest() {
        let mut groups = vec![group_at(0.0, 0.5), group_at(10.0, 10.5)];
        let mut cabs = vec![
            Cab::new(Vector::new(0.0, 0.0)),
            Cab::new(Vector::new(10.0, 10.0)),
        ];

        let assignments = assign_cabs(&mut groups, &mut cabs).unwrap();

        assert_eq!(assignments.len(), 2);
        assert_eq!(cabs[0].pickup_point, Vector::new(0.0, 0.5));
        assert_eq!(cabs[1].pickup_point, Vector::new(10.0, 10.5));
        assert_eq!(groups[0].cab(), Some(0));
        assert_eq!(groups[1].cab(), Some(1));
        assert!((assignments[0].distance - 0.5).abs() < 1e-12);
        assert!((assignments[1].distance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_assign_is_bijective() {
        let mut groups = vec![
            group_at(0.0, 0.0),
            group_at(5.0, 5.0),
            group_at(10.0, 0.0),
        ];
        let mut cabs = vec![
            Cab::new(Vector::new(9.0, 1.0)),
            Cab::new(Vector::new(1.0, 1.0)),
            Cab::new(Vector::new(6.0, 4.0)),
        ];

        let assignments = assign_cabs(&mut groups, &mut cabs).unwrap();

        let mut claimed_by: Vec<Option<usize>> = vec![None; groups.len()];
        for (group_idx, group) in groups.iter().enumerate() {
            let cab = group.cab().expect("every group gets a cab");
            assert!(claimed_by[group_idx].is_none());
            claimed_by[group_idx] = Some(cab);
        }
        // Every cab appears exactly once across the groups.
        let mut cabs_seen: Vec<usize> = claimed_by.iter().map(|c| c.unwrap()).collect();
        cabs_seen.sort_unstable();
        assert_eq!(cabs_seen, vec![0, 1, 2]);
        assert_eq!(assignments.len(), 3);
    }

    #[test]
    fn test_assign_greedy_input_order() {
        // Both cabs are nearest to the group at (0, 0); the first-processed
        // cab wins it and the second falls back to the far group.
        let mut groups = vec![group_at(0.0, 0.0), group_at(100.0, 0.0)];
        let mut cabs = vec![
            Cab::new(Vector::new(1.0, 0.0)),
            Cab::new(Vector::new(0.0, 0.0)),
        ];

        let assignments = assign_cabs(&mut groups, &mut cabs).unwrap();

        assert_eq!(cabs[0].pickup_point, Vector::new(0.0, 0.0));
        assert_eq!(cabs[1].pickup_point, Vector::new(100.0, 0.0));
        assert_eq!(assignments[1].distance, 100.0);
    }

    #[test]
    fn test_assign_tie_takes_first_group() {
        // Cab is equidistant from both groups; the earlier one wins.
        let mut groups = vec![group_at(-1.0, 0.0), group_at(1.0, 0.0)];
        let mut cabs = vec![
            Cab::new(Vector::new(0.0, 0.0)),
            Cab::new(Vector::new(0.0, 0.0)),
        ];

        assign_cabs(&mut groups, &mut cabs).unwrap();

        assert_eq!(cabs[0].pickup_point, Vector::new(-1.0, 0.0));
        assert_eq!(cabs[1].pickup_point, Vector::new(1.0, 0.0));
    }

    #[test]
    fn test_assign_count_mismatch() {
        let mut groups = vec![group_at(0.0, 0.0)];
        let mut cabs = vec![
            Cab::new(Vector::new(0.0, 0.0)),
            Cab::new(Vector::new(1.0, 1.0)),
        ];

        assert!(matches!(
            assign_cabs(&mut groups, &mut cabs),
            Err(Error::CountMismatch { groups: 1, cabs: 2 })
        ));
    }

    #[test]
    fn test_assign_empty_pools() {
        // Zero cabs and zero groups is a valid (vacuous) bijection.
        let assignments = assign_cabs(&mut [], &mut []).unwrap();
        assert!(assignments.is_empty());
    }
}
