//! Clustering: partitioning commuters into cab-sized groups.
//!
//! The pooling pipeline needs a *hard* partition (every commuter in exactly
//! one group, one group per cab) with a representative point per group to
//! aim the cab at. K-means fits that shape exactly: it takes the group count
//! `k` up front and hands back a centroid per group, which becomes the cab's
//! pickup point.
//!
//! ## Assumptions
//!
//! - Groups are roughly convex blobs (k-means is blind to cluster shape)
//! - You know `k` in advance; here it is always the number of cabs
//!
//! ## Usage
//!
//! ```rust
//! use cabpool::cluster::Kmeans;
//! use cabpool::geometry::Vector;
//!
//! let points = vec![
//!     Vector::new(0.0, 0.0),
//!     Vector::new(0.1, 0.1),
//!     Vector::new(10.0, 10.0),
//!     Vector::new(10.1, 10.1),
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(&points).unwrap();
//! assert_eq!(fit.centroids.len(), 2);
//! assert_eq!(fit.labels[0], fit.labels[1]); // First two together
//! assert_ne!(fit.labels[0], fit.labels[2]); // Separate from last two
//! ```

mod kmeans;

pub use kmeans::{Kmeans, KmeansFit};
