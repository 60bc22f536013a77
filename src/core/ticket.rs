//! Transport types, tickets and ticket inventories.
//!
//! ## Transport
//!
//! Every graph edge carries a `Transport`. Riding an edge costs the ticket
//! matching its transport (see [`Ticket::from_transport`]).
//!
//! ## Ticket
//!
//! Five ticket kinds exist. `Secret` substitutes for any transport and
//! `Double` lets the fugitive chain two moves in one turn; both are
//! fugitive-only.
//!
//! ## Tickets
//!
//! Per-player inventory backed by a fixed array for O(1) access, indexed by
//! `Ticket`. Counts never go negative: legality checks happen before any
//! ticket is spent.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Transport type of a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

/// Ticket kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    /// Short hop.
    Taxi,
    /// Medium hop.
    Bus,
    /// Long hop.
    Underground,
    /// Two consecutive moves in one turn. Fugitive only.
    Double,
    /// Concealed move over any transport. Fugitive only.
    Secret,
}

impl Ticket {
    /// Every ticket kind.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Double,
        Ticket::Secret,
    ];

    /// Ticket required to ride an edge of the given transport.
    ///
    /// Ferries have no ticket of their own and can only be ridden secretly.
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Check if only the fugitive may hold this ticket.
    #[must_use]
    pub const fn is_fugitive_only(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }

    const fn index(self) -> usize {
        match self {
            Ticket::Taxi => 0,
            Ticket::Bus => 1,
            Ticket::Underground => 2,
            Ticket::Double => 3,
            Ticket::Secret => 4,
        }
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Double => "Double",
            Ticket::Secret => "Secret",
        };
        f.write_str(name)
    }
}

/// A player's ticket inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; 5],
}

impl Tickets {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory from `(ticket, count)` pairs.
    ///
    /// Later pairs for the same ticket overwrite earlier ones.
    pub fn from_counts(counts: impl IntoIterator<Item = (Ticket, u32)>) -> Self {
        let mut tickets = Self::new();
        for (ticket, count) in counts {
            tickets.counts[ticket.index()] = count;
        }
        tickets
    }

    /// Get the count of a ticket kind.
    #[must_use]
    pub fn get(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check if at least `count` tickets of a kind are held.
    #[must_use]
    pub fn has(&self, ticket: Ticket, count: u32) -> bool {
        self.get(ticket) >= count
    }

    /// Add one ticket.
    pub fn add(&mut self, ticket: Ticket) {
        self.counts[ticket.index()] += 1;
    }

    /// Remove one ticket.
    ///
    /// Callers only spend tickets of moves already checked for legality, so
    /// the count is always positive here.
    pub fn remove(&mut self, ticket: Ticket) {
        let count = &mut self.counts[ticket.index()];
        debug_assert!(*count > 0, "spending a {} ticket the player lacks", ticket);
        *count = count.saturating_sub(1);
    }

    /// Total number of tickets held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over `(ticket, count)` pairs in `Ticket::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

impl Index<Ticket> for Tickets {
    type Output = u32;

    fn index(&self, ticket: Ticket) -> &Self::Output {
        &self.counts[ticket.index()]
    }
}
