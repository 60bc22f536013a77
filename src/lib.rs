//! # pursuit-engine
//!
//! Rules engine for a hidden-movement pursuit game. One fugitive and several
//! trackers move across a transport graph by spending tickets. The trackers
//! only see the fugitive on scheduled disclosure rounds.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: [`Game`] owns the one mutable [`GameState`]. Players
//!    and spectators receive a read-only [`GameView`] and hand back values.
//!
//! 2. **Pure Rules**: Move generation and outcome evaluation are pure
//!    functions of a state and a graph.
//!
//! 3. **Masked Broadcast**: Spectators never learn the fugitive's true
//!    location outside disclosure rounds.
//!
//! ## Modules
//!
//! - `core`: Locations, colours, tickets, moves, players, configuration, state
//! - `graph`: Transport graph adapter and an adjacency-list board
//! - `rules`: Legal move generation and outcome evaluation
//! - `spectators`: Observer hooks, registry and disclosure masking
//! - `game`: Turn and round state machine, decision interface, view
//! - `error`: Configuration, game and spectator errors

pub mod core;
pub mod error;
pub mod game;
pub mod graph;
pub mod rules;
pub mod spectators;

// Re-export commonly used types
pub use crate::core::{
    Colour, DoubleMove, GameConfig, GameState, Location, Move, MoveSet, PlayerConfig,
    PlayerState, Schedule, Ticket, TicketMove, Tickets, Transport, TravelLogEntry,
};

pub use crate::error::{ConfigError, GameError, SpectatorError};

pub use crate::game::{Game, GameView, Player};

pub use crate::graph::{AdjacencyGraph, Edge, Graph};

pub use crate::rules::{compute_winners, evaluate, legal_moves, Verdict, Victory, Winners};

pub use crate::spectators::{EventLog, SharedSpectator, Spectator, SpectatorEvent, SpectatorRegistry};
