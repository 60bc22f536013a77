//! Adjacency-list transport graph.
//!
//! `AdjacencyGraph` stores each node's outgoing edges in a `SmallVec`, which
//! covers the usual board degree without a heap allocation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Edge, Graph};
use crate::core::{Location, Transport};

/// Outgoing edges of one node.
pub type EdgeList = SmallVec<[Edge; 8]>;

/// Transport graph backed by adjacency lists.
///
/// Node ids start at 1. Nothing stops a caller adding `Location(0)`, but no
/// player may start there, so such a node is unreachable from any valid game.
///
/// ## Usage
///
/// ```
/// use pursuit_engine::graph::{AdjacencyGraph, Graph};
/// use pursuit_engine::core::{Location, Transport};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.connect(Location(1), Location(2), Transport::Taxi);
/// graph.add_edge(Location(2), Location(3), Transport::Bus);
///
/// assert_eq!(graph.edges_from(Location(1)).len(), 1);
/// assert_eq!(graph.edges_from(Location(2)).len(), 2);
/// assert!(graph.edges_from(Location(3)).is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    edges: FxHashMap<Location, EdgeList>,
}

impl AdjacencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. Does nothing if the node exists.
    pub fn add_node(&mut self, location: Location) {
        self.edges.entry(location).or_default();
    }

    /// Add a one-way edge. Both endpoints become nodes.
    pub fn add_edge(&mut self, from: Location, to: Location, transport: Transport) {
        self.add_node(to);
        self.edges
            .entry(from)
            .or_default()
            .push(Edge::new(to, transport));
    }

    /// Add edges in both directions.
    pub fn connect(&mut self, a: Location, b: Location, transport: Transport) {
        self.add_edge(a, b, transport);
        self.add_edge(b, a, transport);
    }

    /// Build a graph from `(a, b, transport)` triples connected both ways.
    pub fn from_connections(connections: impl IntoIterator<Item = (u32, u32, Transport)>) -> Self {
        let mut graph = Self::new();
        for (a, b, transport) in connections {
            graph.connect(Location(a), Location(b), transport);
        }
        graph
    }

    /// Iterate over every node.
    pub fn nodes(&self) -> impl Iterator<Item = Location> + '_ {
        self.edges.keys().copied()
    }
}

impl Graph for AdjacencyGraph {
    fn edges_from(&self, location: Location) -> &[Edge] {
        self.edges
            .get(&location)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, location: Location) -> bool {
        self.edges.contains_key(&location)
    }
}
