//! 2-D Cartesian geometry primitives.
//!
//! Everything downstream (clustering, assignment, reporting) is built on
//! [`Vector`] and its Euclidean [`Vector::distance`]. Coordinates are `f64`
//! and equality is exact component equality, acceptable here because inputs
//! are parsed decimal literals and centroids are only ever copied, never
//! re-derived through differing arithmetic paths.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A point in a 2-dimensional Cartesian coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vector {
    /// The origin, `(0, 0)`.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Create a vector from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// Never fails; returns `0.0` for coincident points.
    #[inline]
    pub fn distance(&self, other: &Vector) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// *Squared* magnitude from the origin, `x² + y²`.
    ///
    /// Note this is the squared value, not the true Euclidean norm. The
    /// squared semantics are intentional and preserved; no caller in this
    /// crate consumes a true magnitude.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Component-wise strict less-than: true iff BOTH `x` and `y` are
    /// strictly smaller than `other`'s.
    ///
    /// This is a partial order, not a total one: for points such as
    /// `(0, 1)` and `(1, 0)` neither `component_lt` direction holds. It is
    /// deliberately not exposed through `PartialOrd`/`Ord`, which would
    /// invite sorting with it.
    pub fn component_lt(&self, other: &Vector) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// Component-wise less-than-or-equal: true iff BOTH `x` and `y` are
    /// less than or equal to `other`'s.
    ///
    /// Same partial-order caveat as [`Vector::component_lt`].
    pub fn component_le(&self, other: &Vector) -> bool {
        self.x <= other.x && self.y <= other.y
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Vector {
    type Err = Error;

    /// Parse a vector from the `"x,y"` wire form.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::ParsePoint {
            input: s.to_string(),
        };

        let mut fields = s.split(',');
        let x = fields.next().ok_or_else(parse_err)?;
        let y = fields.next().ok_or_else(parse_err)?;
        if fields.next().is_some() {
            return Err(parse_err());
        }

        let x: f64 = x.trim().parse().map_err(|_| parse_err())?;
        let y: f64 = y.trim().parse().map_err(|_| parse_err())?;
        Ok(Self { x, y })
    }
}

impl fmt::Display for Vector {
    /// Format as `"x,y"`, the same form [`FromStr`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
