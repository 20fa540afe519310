use thiserror::Error;

/// Errors returned by the pooling pipeline and its components.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// A point string did not split into exactly two numeric fields.
    #[error("invalid point {input:?}: expected \"x,y\"")]
    ParsePoint {
        /// The offending input string.
        input: String,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_points} points")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of points in the dataset.
        n_points: usize,
    },

    /// Group and cab pools have different sizes.
    #[error("count mismatch: {groups} groups but {cabs} cabs")]
    CountMismatch {
        /// Number of groups.
        groups: usize,
        /// Number of cabs.
        cabs: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
