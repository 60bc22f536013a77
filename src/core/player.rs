//! Per-player game state.
//!
//! A `PlayerState` is the colour, true location and ticket inventory of one
//! player. It is only mutated by move application inside the game.

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::location::Location;
use super::ticket::{Ticket, Tickets};

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    colour: Colour,
    location: Location,
    tickets: Tickets,
}

impl PlayerState {
    /// Create a new player state.
    #[must_use]
    pub fn new(colour: Colour, location: Location, tickets: Tickets) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    /// The player's colour.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The player's true location.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// The player's ticket inventory.
    #[must_use]
    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    /// Check if this player is the fugitive.
    #[must_use]
    pub fn is_fugitive(&self) -> bool {
        self.colour.is_fugitive()
    }

    /// Check if at least `count` tickets of a kind are held.
    #[must_use]
    pub fn has_tickets(&self, ticket: Ticket, count: u32) -> bool {
        self.tickets.has(ticket, count)
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.add(ticket);
    }

    pub(crate) fn remove_ticket(&mut self, ticket: Ticket) {
        self.tickets.remove(ticket);
    }
}
