//! Game rules: legal move generation and outcome evaluation.
//!
//! Both are pure functions of a `GameState` and a graph. The game calls into
//! them but they never touch state themselves.

pub mod generator;
pub mod outcome;

pub use generator::legal_moves;
pub use outcome::{compute_winners, evaluate, Verdict, Victory, Winners};
