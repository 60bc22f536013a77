//! Read-only game view.
//!
//! The view is what players and spectators are allowed to see. It answers
//! the same questions the state does, except that the fugitive's location is
//! always reported as its last-disclosed location.

use im::Vector;

use crate::core::{Colour, GameState, Location, Schedule, Ticket, TravelLogEntry};
use crate::graph::Graph;
use crate::rules::Winners;

/// Borrowed, read-only view of a running game.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
    graph: &'a dyn Graph,
}

impl<'a> GameView<'a> {
    /// Create a view over a state and its board.
    #[must_use]
    pub fn new(state: &'a GameState, graph: &'a dyn Graph) -> Self {
        Self { state, graph }
    }

    /// Colours in seating order, fugitive first.
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.state.players().iter().map(|p| p.colour()).collect()
    }

    /// Colour of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_colour()
    }

    /// Current round index.
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.state.round()
    }

    /// The disclosure schedule.
    #[must_use]
    pub fn rounds(&self) -> &'a Schedule {
        self.state.schedule()
    }

    /// Check if the current round discloses the fugitive.
    #[must_use]
    pub fn is_reveal_round(&self) -> bool {
        self.state.is_reveal_round()
    }

    /// Where a player is, as far as the public knows.
    ///
    /// Trackers report their true location. The fugitive reports its
    /// last-disclosed location, which is `Location::UNKNOWN` before the
    /// first disclosure. `None` for a colour not in the game.
    #[must_use]
    pub fn location_of(&self, colour: Colour) -> Option<Location> {
        let player = self.state.player(colour)?;
        if player.is_fugitive() {
            Some(self.state.last_revealed())
        } else {
            Some(player.location())
        }
    }

    /// How many tickets of a kind a player holds. `None` for a colour not
    /// in the game.
    #[must_use]
    pub fn tickets_of(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.state.player(colour).map(|p| p.tickets().get(ticket))
    }

    /// The winner set. Empty while the game is running.
    #[must_use]
    pub fn winners(&self) -> &'a Winners {
        self.state.winners()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// The board.
    #[must_use]
    pub fn graph(&self) -> &'a dyn Graph {
        self.graph
    }

    /// The fugitive's public travel log.
    #[must_use]
    pub fn travel_log(&self) -> &'a Vector<TravelLogEntry> {
        self.state.travel_log()
    }
}

impl std::fmt::Debug for GameView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameView")
            .field("current_player", &self.current_player())
            .field("current_round", &self.current_round())
            .field("last_revealed", &self.state.last_revealed())
            .finish()
    }
}
