//! Decision interface.

use super::view::GameView;
use crate::core::{Location, Move, MoveSet};

/// Chooses moves for one seat.
///
/// The game hands a player a read-only view, the player's own true location
/// and its legal moves, and takes back a single move. Returning a move not in
/// `moves` aborts the rotation with an illegal move error.
pub trait Player {
    fn make_move(&mut self, view: &GameView<'_>, location: Location, moves: &MoveSet) -> Move;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn make_move(&mut self, view: &GameView<'_>, location: Location, moves: &MoveSet) -> Move {
        (**self).make_move(view, location, moves)
    }
}
