//! Recorded spectator events.

use serde::{Deserialize, Serialize};

use super::Spectator;
use crate::core::{Colour, Move};
use crate::game::GameView;
use crate::rules::Winners;

/// One notification, as delivered to a spectator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectatorEvent {
    MoveMade(Move),
    RoundStarted(usize),
    RotationComplete,
    /// Winning colours in colour order.
    GameOver(Vec<Colour>),
}

impl std::fmt::Display for SpectatorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectatorEvent::MoveMade(mv) => write!(f, "move: {}", mv),
            SpectatorEvent::RoundStarted(round) => write!(f, "round {} started", round),
            SpectatorEvent::RotationComplete => f.write_str("rotation complete"),
            SpectatorEvent::GameOver(winners) => {
                let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
                write!(f, "game over: {} won", names.join(", "))
            }
        }
    }
}

/// A spectator that keeps every event in arrival order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<SpectatorEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[SpectatorEvent] {
        &self.events
    }

    /// Moves announced so far, in arrival order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.events.iter().filter_map(|e| match e {
            SpectatorEvent::MoveMade(mv) => Some(mv),
            _ => None,
        })
    }

    /// Number of `game_over` notifications seen.
    #[must_use]
    pub fn game_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SpectatorEvent::GameOver(_)))
            .count()
    }

    /// Drop all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Spectator for EventLog {
    fn on_move_made(&mut self, _view: &GameView<'_>, mv: &Move) {
        self.events.push(SpectatorEvent::MoveMade(*mv));
    }

    fn on_round_started(&mut self, _view: &GameView<'_>, round: usize) {
        self.events.push(SpectatorEvent::RoundStarted(round));
    }

    fn on_rotation_complete(&mut self, _view: &GameView<'_>) {
        self.events.push(SpectatorEvent::RotationComplete);
    }

    fn on_game_over(&mut self, _view: &GameView<'_>, winners: &Winners) {
        self.events.push(SpectatorEvent::GameOver(winners.iter().collect()));
    }
}
