//! Domain entities: commuters, cabs, and commuter groups.
//!
//! These are plain data carriers; the algorithms live in [`crate::cluster`]
//! and [`crate::assign`]. A [`CommuterGroup`] refers to its cab by index into
//! the caller's cab slice rather than by reference, which keeps ownership
//! simple: the assignment engine holds `&mut [Cab]` and writes through it at
//! the single mutation point, [`CommuterGroup::set_cab`].

use std::fmt;

use crate::geometry::Vector;

/// A person who needs to get somewhere, identified by location only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commuter {
    /// Current position.
    pub location: Vector,
}

impl Commuter {
    /// Create a commuter at `location`.
    pub fn new(location: Vector) -> Self {
        Self { location }
    }
}

impl fmt::Display for Commuter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commuter: ({}, {})", self.location.x, self.location.y)
    }
}

/// A vehicle that can carry a group of commuters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cab {
    /// Current position.
    pub location: Vector,
    /// Where the cab should collect its group. Stays at the origin until the
    /// cab is assigned, then equals the matched group's centroid exactly.
    pub pickup_point: Vector,
    /// Reserved for routing; always the origin in this crate.
    pub destination: Vector,
}

impl Cab {
    /// Create a cab at `location`, with no pickup point yet.
    pub fn new(location: Vector) -> Self {
        Self {
            location,
            pickup_point: Vector::ZERO,
            destination: Vector::ZERO,
        }
    }
}

impl fmt::Display for Cab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cab: ({}, {})", self.location.x, self.location.y)
    }
}

/// A cluster of commuters travelling together, sharing one centroid and, once
/// assigned, one cab.
///
/// The centroid is computed by the clustering engine at convergence and never
/// re-derived from the members afterwards, so post-clustering edits via
/// [`CommuterGroup::add_commuter`]/[`CommuterGroup::remove_commuter`] do not
/// move it.
#[derive(Clone, Debug)]
pub struct CommuterGroup {
    /// Member commuters; order carries no meaning.
    pub commuters: Vec<Commuter>,
    /// Mean position of the members at clustering convergence.
    pub centroid: Vector,
    cab: Option<usize>,
}

impl CommuterGroup {
    /// Create an empty group around `centroid`.
    pub fn new(centroid: Vector) -> Self {
        Self {
            commuters: Vec::new(),
            centroid,
            cab: None,
        }
    }

    /// Add a member.
    pub fn add_commuter(&mut self, commuter: Commuter) {
        self.commuters.push(commuter);
    }

    /// Remove the first member at the same location as `commuter`, if any.
    ///
    /// Returns whether a member was removed. Commuter identity is its
    /// location, so co-located members are interchangeable.
    pub fn remove_commuter(&mut self, commuter: &Commuter) -> bool {
        match self.commuters.iter().position(|c| c == commuter) {
            Some(idx) => {
                self.commuters.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The index of the assigned cab, if one has been set.
    pub fn cab(&self) -> Option<usize> {
        self.cab
    }

    /// Record `cab` (by its index in the caller's slice) as this group's cab
    /// and write the group's centroid into the cab's pickup point.
    ///
    /// This is the only channel by which assignment results reach cab state.
    /// Expected to be called at most once per group; a second call would
    /// re-point the group, which the assignment engine never does.
    pub fn set_cab(&mut self, cab_idx: usize, cab: &mut Cab) {
        self.cab = Some(cab_idx);
        cab.pickup_point = self.centroid;
    }
}

impl fmt::Display for CommuterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommuterGroup: ({}, {})", self.centroid.x, self.centroid.y)
    }
}
