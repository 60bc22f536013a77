//! Running a game.
//!
//! ## Key Components
//!
//! - [`Game`]: Owns the state and sequences turns and rounds
//! - [`Player`]: Decision interface seated at a colour
//! - [`GameView`]: The read-only view handed to players and spectators
//!
//! ## Example
//!
//! ```
//! use pursuit_engine::core::{Colour, GameConfig, Location, Move, PlayerConfig, Schedule, Ticket, Transport};
//! use pursuit_engine::game::Game;
//! use pursuit_engine::graph::AdjacencyGraph;
//!
//! let graph = AdjacencyGraph::from_connections([
//!     (1, 2, Transport::Taxi),
//!     (2, 3, Transport::Taxi),
//!     (4, 5, Transport::Taxi),
//! ]);
//! let config = GameConfig::new(
//!     Schedule::new(vec![true, false, false]),
//!     PlayerConfig::standard_fugitive(Location(1)),
//! )
//! .with_tracker(PlayerConfig::standard_tracker(Colour::Blue, Location(4)));
//!
//! let mut game = Game::new(&config, graph).unwrap();
//! game.submit_move(Move::ticket(Colour::Black, Ticket::Taxi, Location(2))).unwrap();
//!
//! assert_eq!(game.state().round(), 1);
//! assert_eq!(game.view().location_of(Colour::Black), Some(Location(2)));
//! assert_eq!(game.current_player(), Colour::Blue);
//! ```

pub mod engine;
pub mod player;
pub mod view;

pub use engine::Game;
pub use player::Player;
pub use view::GameView;
