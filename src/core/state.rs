//! Game state.
//!
//! ## GameState
//!
//! The single mutable struct owned by the game:
//! - Players in seating order, fugitive first
//! - Current player cursor and round index
//! - Disclosure schedule and the fugitive's last-disclosed location
//! - Winner set (append-only)
//! - Public travel log of the fugitive's moves
//!
//! Everything outside the game reads it through `&GameState` or a
//! [`GameView`](crate::game::GameView). Mutators are crate-private.
//!
//! ## Cursors
//!
//! The round index stays in `[0, rounds]` and only grows. The player cursor
//! stays in `[0, player_count)` and wraps to the fugitive after the last
//! tracker.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::config::{GameConfig, Schedule};
use super::location::Location;
use super::moves::TicketMove;
use super::player::PlayerState;
use super::ticket::Ticket;
use crate::error::ConfigError;
use crate::rules::Winners;

/// One line of the public travel log: what the trackers learn about a
/// fugitive move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLogEntry {
    /// Round index the move was made in.
    pub round: usize,

    /// Ticket spent. Always public.
    pub ticket: Ticket,

    /// Destination, if the round disclosed it.
    pub revealed: Option<Location>,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: Vec<PlayerState>,
    schedule: Schedule,
    current: usize,
    round: usize,
    last_revealed: Location,
    winners: Winners,
    travel_log: Vector<TravelLogEntry>,
}

impl GameState {
    /// Create the initial state from a configuration.
    ///
    /// The fugitive moves first, in round 0, with nothing disclosed yet.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = config
            .players()
            .map(|p| -> Result<PlayerState, ConfigError> {
                Ok(PlayerState::new(p.colour, p.location, p.inventory()?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            players,
            schedule: config.rounds.clone(),
            current: 0,
            round: 0,
            last_revealed: Location::UNKNOWN,
            winners: Winners::new(),
            travel_log: Vector::new(),
        })
    }

    // === Players ===

    /// All players in seating order, fugitive first.
    #[must_use]
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by colour.
    #[must_use]
    pub fn player(&self, colour: Colour) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.colour() == colour)
    }

    /// The fugitive.
    #[must_use]
    pub fn fugitive(&self) -> &PlayerState {
        &self.players[0]
    }

    /// The trackers in seating order.
    pub fn trackers(&self) -> impl Iterator<Item = &PlayerState> {
        self.players[1..].iter()
    }

    /// Check if a tracker other than `except` stands on `location`.
    ///
    /// The fugitive never counts: trackers do not know where it is.
    #[must_use]
    pub fn tracker_at(&self, location: Location, except: Colour) -> bool {
        self.trackers()
            .any(|t| t.colour() != except && t.location() == location)
    }

    // === Turn Order ===

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current]
    }

    /// Colour of the player whose turn it is.
    #[must_use]
    pub fn current_colour(&self) -> Colour {
        self.current_player().colour()
    }

    /// Current round index.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// The disclosure schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Check if the current round discloses the fugitive.
    #[must_use]
    pub fn is_reveal_round(&self) -> bool {
        self.schedule.is_reveal(self.round)
    }

    /// Rounds left in the schedule, counting the current one.
    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        self.schedule.len().saturating_sub(self.round)
    }

    // === Disclosure ===

    /// The fugitive's last-disclosed location, or `Location::UNKNOWN`.
    #[must_use]
    pub fn last_revealed(&self) -> Location {
        self.last_revealed
    }

    /// The public travel log.
    #[must_use]
    pub fn travel_log(&self) -> &Vector<TravelLogEntry> {
        &self.travel_log
    }

    // === Outcome ===

    /// The winner set. Empty while the game is running.
    #[must_use]
    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.winners.is_empty()
    }

    // === Mutation (game only) ===

    /// Move the current tracker and hand its spent ticket to the fugitive.
    pub(crate) fn move_tracker(&mut self, mv: &TicketMove) {
        let tracker = &mut self.players[self.current];
        debug_assert_eq!(tracker.colour(), mv.colour, "tracker moved out of turn");
        tracker.set_location(mv.destination);
        tracker.remove_ticket(mv.ticket);
        self.players[0].add_ticket(mv.ticket);
    }

    /// Spend a fugitive ticket without moving.
    pub(crate) fn spend_fugitive_ticket(&mut self, ticket: Ticket) {
        self.players[0].remove_ticket(ticket);
    }

    /// Move the fugitive one leg in the current round and start the next
    /// round. Returns the new round index.
    pub(crate) fn move_fugitive(&mut self, leg: &TicketMove, revealed: bool) -> usize {
        let fugitive = &mut self.players[0];
        fugitive.set_location(leg.destination);
        fugitive.remove_ticket(leg.ticket);

        if revealed {
            self.last_revealed = leg.destination;
        }

        self.travel_log.push_back(TravelLogEntry {
            round: self.round,
            ticket: leg.ticket,
            revealed: revealed.then_some(leg.destination),
        });

        self.round += 1;
        self.round
    }

    /// Hand the turn to the next player. Returns `true` if the cursor
    /// wrapped back to the fugitive.
    pub(crate) fn advance_player(&mut self) -> bool {
        self.current = (self.current + 1) % self.players.len();
        self.current == 0
    }

    /// Merge newly computed winners into the winner set.
    pub(crate) fn add_winners(&mut self, winners: &Winners) {
        self.winners.extend(winners.iter());
    }
}
