//! Board locations.
//!
//! A `Location` is an opaque node identifier from the transport graph.
//! The engine never interprets the number, it only compares locations and
//! hands them to the graph adapter.
//!
//! ## Unknown Location
//!
//! Node ids start at 1 on every board the engine is used with. The value 0 is
//! reserved as [`Location::UNKNOWN`]: the fugitive's apparent location before
//! its first disclosure round.

use serde::{Deserialize, Serialize};

/// Node identifier on the transport graph.
///
/// Boards number their nodes from 1. `Location(0)` is [`Location::UNKNOWN`]
/// and is never a valid starting location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u32);

impl Location {
    /// Apparent fugitive location before anything has been disclosed.
    pub const UNKNOWN: Location = Location(0);

    /// Create a new location.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw node id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the reserved unknown location.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            write!(f, "Location(?)")
        } else {
            write!(f, "Location({})", self.0)
        }
    }
}
