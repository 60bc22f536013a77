//! Transport graph adapter.
//!
//! The engine only ever asks one question of the board: which edges leave a
//! location. Any read-only graph can back a game by implementing [`Graph`];
//! [`AdjacencyGraph`] is a ready-made adjacency-list implementation.

pub mod adjacency;

pub use adjacency::{AdjacencyGraph, EdgeList};

use serde::{Deserialize, Serialize};

use crate::core::{Location, Transport};

/// An outgoing edge: where it leads and how it is travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Node at the far end of the edge.
    pub destination: Location,

    /// Transport type, which determines the ticket needed.
    pub transport: Transport,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(destination: Location, transport: Transport) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

/// Read-only transport graph.
///
/// Object safe, so spectators and players can be handed a `&dyn Graph`.
pub trait Graph {
    /// Edges leaving `location`. Empty for unknown locations.
    fn edges_from(&self, location: Location) -> &[Edge];

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Check if `location` is a node of this graph.
    fn contains(&self, location: Location) -> bool;

    /// Check if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
