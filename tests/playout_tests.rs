//! Randomised playout tests.
//!
//! Seeded random players play whole games on a mixed board while every
//! step is checked against the rules:
//! - The legal move set is never empty
//! - Trackers are never offered secret or double tickets
//! - Double moves only appear with two scheduled rounds left
//! - Tracker tickets move to the fugitive
//! - Winners never shrink and the game ends exactly once
//! - Spectators never see the fugitive outside disclosures

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{mixed_graph, RandomPlayer};
use proptest::prelude::*;
use pursuit_engine::core::{Colour, GameConfig, Location, Move, PlayerConfig, Schedule, Ticket};
use pursuit_engine::error::GameError;
use pursuit_engine::game::{Game, GameView};
use pursuit_engine::spectators::{EventLog, SharedSpectator, Spectator};

/// Records every fugitive notification that disagrees with the public view.
#[derive(Default)]
struct Auditor {
    violations: Vec<String>,
}

impl Spectator for Auditor {
    fn on_move_made(&mut self, view: &GameView<'_>, mv: &Move) {
        if let Move::Ticket(leg) = mv {
            if leg.colour.is_fugitive() && Some(leg.destination) != view.location_of(Colour::Black) {
                self.violations
                    .push(format!("round {}: {} disagrees with view", view.current_round(), mv));
            }
        }
    }
}

fn config(schedule: Vec<bool>, tracker_taxis: u32) -> GameConfig {
    let tracker = |colour, location| {
        PlayerConfig::new(colour, Location(location))
            .with_empty_tickets()
            .with_tickets(Ticket::Taxi, tracker_taxis)
            .with_tickets(Ticket::Bus, 2)
            .with_tickets(Ticket::Underground, 1)
    };
    GameConfig::new(
        Schedule::new(schedule),
        PlayerConfig::standard_fugitive(Location(1)),
    )
    .with_tracker(tracker(Colour::Blue, 5))
    .with_tracker(tracker(Colour::Red, 8))
    .with_tracker(tracker(Colour::Green, 11))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_playout_obeys_rules(
        seed in any::<u64>(),
        schedule in prop::collection::vec(any::<bool>(), 1..12),
        tracker_taxis in 0u32..6,
    ) {
        let rounds = schedule.len();
        let mut game = Game::new(&config(schedule, tracker_taxis), mixed_graph()).unwrap();
        let auditor = Rc::new(RefCell::new(Auditor::default()));
        let log = Rc::new(RefCell::new(EventLog::new()));
        let auditor_handle: SharedSpectator = auditor.clone();
        let log_handle: SharedSpectator = log.clone();
        game.register_spectator(auditor_handle).unwrap();
        game.register_spectator(log_handle).unwrap();

        let mut player = RandomPlayer::new(seed);
        let mut winners_before = game.winners().clone();

        for _ in 0..1_000 {
            let colour = game.current_player();
            let moves = game.legal_moves(colour);
            prop_assert!(!moves.is_empty());

            for mv in moves.iter() {
                match mv {
                    Move::Ticket(leg) if colour.is_tracker() => {
                        prop_assert!(!leg.ticket.is_fugitive_only(), "tracker offered {}", mv);
                    }
                    Move::Double(_) => {
                        prop_assert!(colour.is_fugitive());
                        prop_assert!(game.state().round() + 2 <= rounds);
                    }
                    _ => {}
                }
            }

            let mv = player.choose(&moves);
            let fugitive_before = *game.state().fugitive().tickets();
            let mover_before = game.state().player(colour).map(|p| *p.tickets());

            match game.submit_move(mv) {
                Ok(()) => {}
                Err(GameError::GameOver) => break,
                Err(e) => return Err(TestCaseError::fail(format!("legal move rejected: {}", e))),
            }

            if let (Move::Ticket(leg), true) = (mv, colour.is_tracker()) {
                let mover_after = game.state().player(colour).map(|p| p.tickets().get(leg.ticket));
                prop_assert_eq!(mover_after, mover_before.map(|t| t.get(leg.ticket) - 1));
                prop_assert_eq!(
                    game.state().fugitive().tickets().get(leg.ticket),
                    fugitive_before.get(leg.ticket) + 1
                );
            }

            for colour in winners_before.iter() {
                prop_assert!(game.winners().contains(colour));
            }
            winners_before = game.winners().clone();

            if game.is_game_over() {
                break;
            }
        }

        prop_assert!(game.is_game_over());
        prop_assert_eq!(log.borrow().game_over_count(), 1);
        prop_assert!(game.state().round() <= rounds);
        prop_assert!(auditor.borrow().violations.is_empty(), "{:?}", auditor.borrow().violations);
    }
}
