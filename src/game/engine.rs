//! The turn and round state machine.
//!
//! [`Game`] owns the state, the board, the seated players and the spectator
//! registry. Every mutation goes through [`Game::submit_move`]:
//!
//! 1. Reject the move if the game is over or the move is not legal for the
//!    current player. Nothing changes on rejection.
//! 2. Apply the move and notify spectators.
//! 3. Hand the turn on, announcing a completed rotation on wrap.
//! 4. Evaluate the outcome and announce the game's end once.
//!
//! [`Game::play_rotation`] drives the seated players through `submit_move`
//! until the turn returns to the fugitive or the game ends. Players and
//! spectators only ever receive a [`GameView`], so nothing outside the game
//! mutates state while a turn is in progress.

use rustc_hash::FxHashMap;

use super::player::Player;
use super::view::GameView;
use crate::core::{Colour, DoubleMove, GameConfig, GameState, Move, MoveSet, Ticket, TicketMove};
use crate::error::{ConfigError, GameError, SpectatorError};
use crate::graph::Graph;
use crate::rules::{evaluate, legal_moves, Victory, Winners};
use crate::spectators::{DoubleDisclosure, LegDisclosure, SharedSpectator, Spectator, SpectatorRegistry};

/// A running game.
pub struct Game<G: Graph> {
    state: GameState,
    graph: G,
    players: FxHashMap<Colour, Box<dyn Player>>,
    spectators: SpectatorRegistry,
    victory: Option<Victory>,
}

impl<G: Graph> Game<G> {
    /// Create a game from a configuration and a board.
    ///
    /// The configuration is validated in full; no game exists unless it is
    /// valid.
    pub fn new(config: &GameConfig, graph: G) -> Result<Self, ConfigError> {
        if config.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        let state = GameState::new(config)?;
        if let Some(player) = state.players().iter().find(|p| !graph.contains(p.location())) {
            return Err(ConfigError::UnknownLocation(player.location()));
        }

        tracing::debug!(
            players = state.player_count(),
            rounds = state.schedule().len(),
            "game created"
        );

        Ok(Self {
            state,
            graph,
            players: FxHashMap::default(),
            spectators: SpectatorRegistry::new(),
            victory: None,
        })
    }

    /// Seat a decision interface for a colour, replacing any already seated.
    #[must_use]
    pub fn with_player(mut self, colour: Colour, player: impl Player + 'static) -> Self {
        self.seat(colour, player);
        self
    }

    /// Seat a decision interface for a colour, replacing any already seated.
    pub fn seat(&mut self, colour: Colour, player: impl Player + 'static) {
        self.players.insert(colour, Box::new(player));
    }

    // === Spectators ===

    /// Register a spectator. Fails if this handle is already registered.
    pub fn register_spectator(&mut self, spectator: SharedSpectator) -> Result<(), SpectatorError> {
        self.spectators.register(spectator)
    }

    /// Unregister a spectator. Fails if this handle was never registered.
    pub fn unregister_spectator(&mut self, spectator: &SharedSpectator) -> Result<(), SpectatorError> {
        self.spectators.unregister(spectator)
    }

    /// The spectator registry.
    #[must_use]
    pub fn spectators(&self) -> &SpectatorRegistry {
        &self.spectators
    }

    // === Queries ===

    /// The full game state, including the fugitive's true location.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// A read-only view as seen by players and spectators.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.state, &self.graph)
    }

    /// Legal moves for any colour, whether or not it is its turn.
    #[must_use]
    pub fn legal_moves(&self, colour: Colour) -> MoveSet {
        legal_moves(&self.state, &self.graph, colour)
    }

    /// Colour of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_colour()
    }

    /// The winner set. Empty while the game is running.
    #[must_use]
    pub fn winners(&self) -> &Winners {
        self.state.winners()
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub fn victory(&self) -> Option<Victory> {
        self.victory
    }

    /// Check if the game has ended.
    ///
    /// Only reflects outcomes already settled by `submit_move` or
    /// `play_rotation`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    // === Driving ===

    /// Play one move for the current player.
    pub fn submit_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.settle_outcome();
        if self.state.is_over() {
            tracing::warn!(attempted = %mv, "move submitted after game over");
            return Err(GameError::GameOver);
        }

        let current = self.state.current_colour();
        if !legal_moves(&self.state, &self.graph, current).contains(&mv) {
            tracing::warn!(%current, attempted = %mv, "illegal move rejected");
            return Err(GameError::IllegalMove {
                current,
                attempted: mv,
            });
        }

        self.apply(mv);

        if self.state.advance_player() {
            tracing::debug!(round = self.state.round(), "rotation complete");
            self.notify(|s, view| s.on_rotation_complete(view));
        }

        self.settle_outcome();
        Ok(())
    }

    /// Ask seated players for moves until the turn returns to the fugitive
    /// or the game ends.
    ///
    /// Fails with `GameOver` if the game had already ended, including when
    /// the starting position is terminal. Fails with `Unseated` if a player
    /// is needed for a colour nobody sits at.
    pub fn play_rotation(&mut self) -> Result<(), GameError> {
        self.settle_outcome();
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        loop {
            let colour = self.state.current_colour();
            let location = self.state.current_player().location();
            let moves = legal_moves(&self.state, &self.graph, colour);

            let Some(player) = self.players.get_mut(&colour) else {
                tracing::warn!(%colour, "no player seated");
                return Err(GameError::Unseated(colour));
            };
            let view = GameView::new(&self.state, &self.graph);
            let mv = player.make_move(&view, location, &moves);

            self.submit_move(mv)?;

            if self.state.is_over() || self.state.current_index() == 0 {
                return Ok(());
            }
        }
    }

    /// Play rotations until the game ends and return the winners.
    pub fn play(&mut self) -> Result<Winners, GameError> {
        while !self.state.is_over() {
            match self.play_rotation() {
                Ok(()) | Err(GameError::GameOver) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(self.state.winners().clone())
    }

    // === Internals ===

    fn notify(&self, event: impl FnMut(&mut dyn Spectator, &GameView<'_>)) {
        let view = GameView::new(&self.state, &self.graph);
        self.spectators.notify(&view, event);
    }

    fn apply(&mut self, mv: Move) {
        match mv {
            Move::Pass(colour) => {
                tracing::debug!(%colour, "pass");
                self.notify(|s, view| s.on_move_made(view, &mv));
            }
            Move::Ticket(leg) if leg.colour.is_fugitive() => {
                let disclosure =
                    LegDisclosure::new(leg, self.state.is_reveal_round(), self.state.last_revealed());
                self.play_fugitive_leg(&disclosure);
            }
            Move::Ticket(leg) => self.move_tracker(&leg),
            Move::Double(double) => self.play_double(&double),
        }
    }

    fn move_tracker(&mut self, leg: &TicketMove) {
        self.state.move_tracker(leg);
        tracing::debug!(
            colour = %leg.colour,
            ticket = %leg.ticket,
            destination = %leg.destination,
            "tracker moved"
        );
        let mv = Move::Ticket(*leg);
        self.notify(|s, view| s.on_move_made(view, &mv));
    }

    fn play_double(&mut self, double: &DoubleMove) {
        self.state.spend_fugitive_ticket(Ticket::Double);
        let disclosure = DoubleDisclosure::new(
            double,
            self.state.schedule(),
            self.state.round(),
            self.state.last_revealed(),
        );

        let apparent = Move::Double(disclosure.apparent());
        self.notify(|s, view| s.on_move_made(view, &apparent));

        for leg in disclosure.legs() {
            self.play_fugitive_leg(&leg);
        }
    }

    fn play_fugitive_leg(&mut self, disclosure: &LegDisclosure) {
        let round = self.state.move_fugitive(&disclosure.actual, disclosure.revealed);
        tracing::debug!(
            round,
            ticket = %disclosure.actual.ticket,
            revealed = disclosure.revealed,
            "fugitive moved"
        );

        self.notify(|s, view| s.on_round_started(view, round));

        let apparent = Move::Ticket(disclosure.apparent);
        self.notify(|s, view| s.on_move_made(view, &apparent));
    }

    /// Merge a fresh verdict into the winner set. Announces the end of the
    /// game the first time the set becomes non-empty.
    fn settle_outcome(&mut self) {
        if self.state.is_over() {
            return;
        }
        let Some(verdict) = evaluate(&self.state, &self.graph) else {
            return;
        };

        tracing::info!(
            victory = %verdict.victory,
            winners = ?verdict.winners.iter().collect::<Vec<_>>(),
            round = self.state.round(),
            "game over"
        );

        self.state.add_winners(&verdict.winners);
        self.victory = Some(verdict.victory);

        let winners = self.state.winners().clone();
        self.notify(|s, view| s.on_game_over(view, &winners));
    }
}

impl<G: Graph> std::fmt::Debug for Game<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("players", &self.players.len())
            .field("spectators", &self.spectators)
            .field("victory", &self.victory)
            .finish()
    }
}
