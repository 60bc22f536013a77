//! Core engine types: locations, colours, tickets, moves, players,
//! configuration and state.
//!
//! These are the data the rules operate on. Nothing in here knows how moves
//! are generated or how a game ends.

pub mod location;
pub mod colour;
pub mod ticket;
pub mod moves;
pub mod player;
pub mod config;
pub mod state;

pub use location::Location;
pub use colour::Colour;
pub use ticket::{Ticket, Tickets, Transport};
pub use moves::{DoubleMove, Move, MoveSet, TicketMove};
pub use player::PlayerState;
pub use config::{GameConfig, PlayerConfig, Schedule};
pub use state::{GameState, TravelLogEntry};
