//! Commuter pooling and cab dispatch.
//!
//! `cabpool` partitions a set of 2-D commuter locations into exactly as many
//! groups as there are cabs, then assigns each cab to the group whose
//! centroid is nearest, greedily. The stages are usable on their own:
//!
//! - [`geometry`]: the 2-D [`Vector`](geometry::Vector) primitive, Euclidean
//!   distance, and `"x,y"` parsing
//! - [`cluster`]: k-means (k-means++ seeding, Lloyd iterations)
//! - [`model`]: [`Commuter`](model::Commuter), [`Cab`](model::Cab), and
//!   [`CommuterGroup`](model::CommuterGroup)
//! - [`assign`]: greedy nearest-group cab assignment
//! - [`dispatch`]: the end-to-end pipeline with a total-distance report
//!
//! The caller supplies parsed point sequences and consumes the resulting
//! matches; reading input files and printing belong outside this crate.

#![forbid(unsafe_code)]

pub mod assign;
pub mod cluster;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod model;

pub use assign::{assign_cabs, Assignment};
pub use cluster::{Kmeans, KmeansFit};
pub use dispatch::{DispatchReport, Dispatcher};
pub use error::{Error, Result};
pub use geometry::Vector;
pub use model::{Cab, Commuter, CommuterGroup};
