//! Spectators: observers notified of game events.
//!
//! A spectator sees the game the way a tracker does. Fugitive moves reach it
//! with their destinations masked on rounds that do not disclose the fugitive
//! (see [`disclosure`]), and the [`GameView`] it receives never exposes the
//! fugitive's true location.
//!
//! ## Key Components
//!
//! - [`Spectator`]: Event hooks, all defaulting to no-ops
//! - [`SpectatorRegistry`]: Registration by handle identity, ordered delivery
//! - [`EventLog`]: A spectator that records every event it sees
//!
//! ## Event Order
//!
//! For one submitted move, events arrive in this order:
//!
//! 1. The move itself:
//!    - tracker move or pass: `move_made`
//!    - fugitive single move: `round_started`, then `move_made`
//!    - fugitive double move: `move_made` for the whole move, then for each
//!      leg `round_started` followed by the leg's `move_made`
//! 2. `rotation_complete` if the turn wrapped back to the fugitive
//! 3. `game_over`, at most once per game

pub mod disclosure;
pub mod event;
pub mod registry;

pub use disclosure::{DoubleDisclosure, LegDisclosure};
pub use event::{EventLog, SpectatorEvent};
pub use registry::{SharedSpectator, SpectatorRegistry};

use crate::core::Move;
use crate::game::GameView;
use crate::rules::Winners;

/// Receives game events.
///
/// Every hook has an empty default so implementors only override what they
/// care about.
pub trait Spectator {
    /// A move was made. Fugitive destinations may be masked.
    fn on_move_made(&mut self, _view: &GameView<'_>, _mv: &Move) {}

    /// The fugitive moved and a new round began.
    fn on_round_started(&mut self, _view: &GameView<'_>, _round: usize) {}

    /// Every player has moved once and the turn is back with the fugitive.
    fn on_rotation_complete(&mut self, _view: &GameView<'_>) {}

    /// The game ended.
    fn on_game_over(&mut self, _view: &GameView<'_>, _winners: &Winners) {}
}
