//! Error types for the engine.
//!
//! Every error is reported synchronously by the call that caused it. The
//! engine never retries and never absorbs an error.

use crate::core::{Colour, Location, Move, Ticket};

/// Errors rejecting a game configuration. No game is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The round schedule has no rounds.
    #[error("round schedule is empty")]
    EmptyRounds,

    /// The transport graph has no nodes.
    #[error("transport graph is empty")]
    EmptyGraph,

    /// The fugitive slot was given a tracker colour.
    #[error("fugitive must be {fugitive}, got {0}", fugitive = Colour::FUGITIVE)]
    FugitiveColour(Colour),

    /// A tracker slot was given the fugitive's colour.
    #[error("tracker cannot be {0}")]
    TrackerColour(Colour),

    /// At least one tracker is required.
    #[error("game needs at least one tracker")]
    NoTrackers,

    /// Two players share a colour.
    #[error("colour {0} assigned to more than one player")]
    DuplicateColour(Colour),

    /// A player starts on the reserved unknown location.
    #[error("{0} cannot start at the reserved unknown location")]
    ReservedLocation(Colour),

    /// A player starts on a location the board does not have.
    #[error("{0} is not on the board")]
    UnknownLocation(Location),

    /// Two players start on the same location.
    #[error("more than one player starts at {0}")]
    DuplicateLocation(Location),

    /// A player's inventory has no entry for a ticket kind.
    #[error("{colour} has no {ticket} ticket entry")]
    MissingTicket { colour: Colour, ticket: Ticket },

    /// A tracker holds a fugitive-only ticket.
    #[error("tracker {colour} holds {count} {ticket} tickets")]
    ForbiddenTicket {
        colour: Colour,
        ticket: Ticket,
        count: u32,
    },
}

/// Errors from driving the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The submitted move is not in the current player's legal set.
    /// Game state is unchanged.
    #[error("illegal move for {current}: {attempted}")]
    IllegalMove { current: Colour, attempted: Move },

    /// The game already has winners.
    #[error("game is already over")]
    GameOver,

    /// No decision interface is seated for the player whose turn it is.
    #[error("no player seated for {0}")]
    Unseated(Colour),
}

/// Errors from spectator registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpectatorError {
    /// The spectator is already registered.
    #[error("spectator already registered")]
    AlreadyRegistered,

    /// The spectator was never registered.
    #[error("spectator not registered")]
    NotRegistered,
}
