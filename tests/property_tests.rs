use cabpool::{assign_cabs, Cab, Commuter, Dispatcher, Kmeans, Vector};
use proptest::prelude::*;

fn vectors(coords: &[(f64, f64)]) -> Vec<Vector> {
    coords.iter().map(|&(x, y)| Vector::new(x, y)).collect()
}

proptest! {
    #[test]
    fn prop_distance_symmetric_and_zero_at_self(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
    ) {
        let a = Vector::new(ax, ay);
        let b = Vector::new(bx, by);
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.distance(&a), 0.0);
        prop_assert!(a.distance(&b) >= 0.0);
    }

    #[test]
    fn prop_kmeans_all_assigned(
        coords in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= coords.len() {
            let points = vectors(&coords);
            let fit = Kmeans::new(k).with_seed(42).fit(&points).unwrap();

            prop_assert_eq!(fit.labels.len(), points.len());
            prop_assert_eq!(fit.centroids.len(), k);
            for &l in &fit.labels {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_kmeans_deterministic_under_seed(
        coords in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 2..15),
        k in 1usize..4,
        seed in 0u64..1000
    ) {
        if k <= coords.len() {
            let points = vectors(&coords);
            let a = Kmeans::new(k).with_seed(seed).fit(&points).unwrap();
            let b = Kmeans::new(k).with_seed(seed).fit(&points).unwrap();
            prop_assert_eq!(a.labels, b.labels);
            prop_assert_eq!(a.centroids, b.centroids);
        }
    }

    #[test]
    fn prop_assignment_is_bijection(
        centroids in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..8),
        cab_coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..8),
    ) {
        // Equal-size pools only; the engine rejects the rest.
        if centroids.len() == cab_coords.len() {
            let mut groups: Vec<_> = vectors(&centroids)
                .into_iter()
                .map(cabpool::CommuterGroup::new)
                .collect();
            let mut cabs: Vec<_> = vectors(&cab_coords).into_iter().map(Cab::new).collect();

            let assignments = assign_cabs(&mut groups, &mut cabs).unwrap();
            prop_assert_eq!(assignments.len(), cabs.len());

            // Each cab appears exactly once, each group claimed exactly once.
            let mut cab_indices: Vec<usize> =
                groups.iter().map(|g| g.cab().unwrap()).collect();
            cab_indices.sort_unstable();
            let expected: Vec<usize> = (0..cabs.len()).collect();
            prop_assert_eq!(cab_indices, expected);

            // Pickup points are exact centroid copies.
            for group in &groups {
                let cab = &cabs[group.cab().unwrap()];
                prop_assert_eq!(cab.pickup_point, group.centroid);
            }
        }
    }

    #[test]
    fn prop_dispatch_partitions_everyone(
        coords in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 3..25),
        cab_count in 1usize..4,
        seed in 0u64..100
    ) {
        if cab_count <= coords.len() {
            let commuters: Vec<_> = vectors(&coords).into_iter().map(Commuter::new).collect();
            let mut cabs: Vec<Cab> = (0..cab_count)
                .map(|i| Cab::new(Vector::new(i as f64, 0.0)))
                .collect();

            let report = Dispatcher::new()
                .with_seed(seed)
                .run(&commuters, &mut cabs)
                .unwrap();

            prop_assert_eq!(report.groups.len(), cab_count);
            let members: usize = report.groups.iter().map(|g| g.commuters.len()).sum();
            prop_assert_eq!(members, commuters.len());
            prop_assert!(report.total_distance >= 0.0);
        }
    }
}
