//! Move representation.
//!
//! A move is a closed variant:
//! - `Pass`: no-op, offered only when a player has nothing else to do
//! - `Ticket`: spend one ticket to travel to a destination
//! - `Double`: two consecutive ticket moves in one turn (fugitive only)
//!
//! Moves carry the colour of the player making them so that observers can
//! attribute every notification.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::location::Location;
use super::ticket::Ticket;

/// A single move: one ticket spent to reach one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    /// The player moving.
    pub colour: Colour,
    /// The ticket spent.
    pub ticket: Ticket,
    /// Where the player ends up.
    pub destination: Location,
}

impl TicketMove {
    /// Create a new ticket move.
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }
}

/// Two ticket moves made back to back, paid for with a `Double` ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    /// The player moving (always the fugitive).
    pub colour: Colour,
    /// First leg.
    pub first: TicketMove,
    /// Second leg, starting from the first leg's destination.
    pub second: TicketMove,
}

impl DoubleMove {
    /// Create a double move from its two legs.
    #[must_use]
    pub const fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }

    /// Where the player ends up after both legs.
    #[must_use]
    pub const fn final_destination(&self) -> Location {
        self.second.destination
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Do nothing. Only legal when no other move is.
    Pass(Colour),
    /// A single ticket move.
    Ticket(TicketMove),
    /// A double move.
    Double(DoubleMove),
}

impl Move {
    /// Shorthand for a single ticket move.
    #[must_use]
    pub const fn ticket(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Shorthand for a double move.
    #[must_use]
    pub const fn double(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Move::Double(DoubleMove::new(colour, first, second))
    }

    /// The colour of the player making this move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Pass(colour) => *colour,
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
        }
    }

    /// Check if this is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass(_))
    }

    /// Every ticket this move spends, in spending order.
    #[must_use]
    pub fn tickets(&self) -> Vec<Ticket> {
        match self {
            Move::Pass(_) => Vec::new(),
            Move::Ticket(m) => vec![m.ticket],
            Move::Double(m) => vec![Ticket::Double, m.first.ticket, m.second.ticket],
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass(colour) => write!(f, "{} passes", colour),
            Move::Ticket(m) => write!(f, "{} {} to {}", m.colour, m.ticket, m.destination),
            Move::Double(m) => write!(
                f,
                "{} Double: {} to {}, {} to {}",
                m.colour, m.first.ticket, m.first.destination, m.second.ticket, m.second.destination
            ),
        }
    }
}

/// The set of legal moves offered to a player.
///
/// Never empty once produced by the move generator: a player with nothing
/// else to do is offered exactly `{Pass}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: FxHashSet<Move>,
}

impl MoveSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a move. Duplicates collapse.
    pub fn insert(&mut self, mv: Move) {
        self.moves.insert(mv);
    }

    /// Check if a move is in the set.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Number of distinct moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Check if the only move on offer is a pass.
    #[must_use]
    pub fn is_pass_only(&self) -> bool {
        self.moves.len() == 1 && self.moves.iter().all(Move::is_pass)
    }

    /// Iterate over the moves in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Collect the moves into a vector in a stable order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.moves.iter().copied().collect();
        moves.sort_unstable();
        moves
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
