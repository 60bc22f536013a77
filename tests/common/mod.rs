//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use pursuit_engine::core::{Colour, GameConfig, Location, Move, MoveSet, PlayerConfig, Schedule, Ticket, Transport};
use pursuit_engine::game::{Game, GameView, Player};
use pursuit_engine::graph::AdjacencyGraph;
use pursuit_engine::spectators::{EventLog, SharedSpectator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Install a test-writer subscriber once. `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Board used by the disclosure and capture scenarios.
///
/// ```text
/// 1 - 2 - 3 - 6 - 5      7 - 8
/// ```
pub fn scenario_graph() -> AdjacencyGraph {
    AdjacencyGraph::from_connections([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Taxi),
        (5, 6, Transport::Taxi),
        (6, 3, Transport::Taxi),
        (7, 8, Transport::Taxi),
    ])
}

/// Fugitive at 1 with a single taxi ticket, Blue at 5 and Red at 7 with
/// five taxis each.
pub fn scenario_config(schedule: Vec<bool>) -> GameConfig {
    GameConfig::new(
        Schedule::new(schedule),
        PlayerConfig::new(Colour::Black, Location(1))
            .with_empty_tickets()
            .with_tickets(Ticket::Taxi, 1),
    )
    .with_tracker(taxi_tracker(Colour::Blue, 5, 5))
    .with_tracker(taxi_tracker(Colour::Red, 7, 5))
}

/// A tracker holding only taxi tickets.
pub fn taxi_tracker(colour: Colour, location: u32, taxis: u32) -> PlayerConfig {
    PlayerConfig::new(colour, Location(location))
        .with_empty_tickets()
        .with_tickets(Ticket::Taxi, taxis)
}

/// A twelve-node board mixing every transport, including a ferry.
pub fn mixed_graph() -> AdjacencyGraph {
    let mut connections: Vec<(u32, u32, Transport)> =
        (1..12).map(|i| (i, i + 1, Transport::Taxi)).collect();
    connections.push((12, 1, Transport::Taxi));
    connections.extend([
        (1, 4, Transport::Bus),
        (4, 7, Transport::Bus),
        (7, 10, Transport::Bus),
        (10, 1, Transport::Bus),
        (1, 7, Transport::Underground),
        (4, 10, Transport::Underground),
        (3, 9, Transport::Ferry),
    ]);
    AdjacencyGraph::from_connections(connections)
}

/// Register a fresh event log and return the handle to read it back.
pub fn attach_log(game: &mut Game<AdjacencyGraph>) -> Rc<RefCell<EventLog>> {
    let log = Rc::new(RefCell::new(EventLog::new()));
    let handle: SharedSpectator = log.clone();
    game.register_spectator(handle).unwrap();
    log
}

/// Picks uniformly among the legal moves with a seeded generator.
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn choose(&mut self, moves: &MoveSet) -> Move {
        let moves = moves.sorted();
        moves[self.rng.gen_range(0..moves.len())]
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, _view: &GameView<'_>, _location: Location, moves: &MoveSet) -> Move {
        self.choose(moves)
    }
}

/// Plays a fixed list of moves, then passes.
pub struct ScriptedPlayer {
    colour: Colour,
    script: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(colour: Colour, script: impl IntoIterator<Item = Move>) -> Self {
        Self {
            colour,
            script: script.into_iter().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn make_move(&mut self, _view: &GameView<'_>, _location: Location, _moves: &MoveSet) -> Move {
        self.script.pop_front().unwrap_or(Move::Pass(self.colour))
    }
}
