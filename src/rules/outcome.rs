//! Outcome evaluation.
//!
//! [`evaluate`] is pure: it inspects a state and reports whether the game is
//! over and who won. Merging the result into the state's winner set is the
//! game's job, so querying an outcome never mutates anything.
//!
//! ## Winning Conditions
//!
//! Checked in order; the first that holds decides the verdict:
//!
//! 1. The schedule is exhausted and the turn is back with the fugitive:
//!    the fugitive escapes.
//! 2. It is the fugitive's turn and it can only pass: trackers win.
//! 3. A tracker stands on the fugitive's true location: trackers win.
//! 4. Every tracker can only pass: the fugitive wins.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::generator::legal_moves;
use crate::core::{Colour, GameState};
use crate::graph::Graph;

/// The set of winning colours.
///
/// Empty while the game is running. Once a game has winners the set only
/// ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Winners {
    colours: FxHashSet<Colour>,
}

impl Winners {
    /// Create an empty winner set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a colour won.
    #[must_use]
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }

    /// Number of winners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if nobody has won yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Check if the fugitive is among the winners.
    #[must_use]
    pub fn fugitive_won(&self) -> bool {
        self.contains(Colour::FUGITIVE)
    }

    /// Add a winner.
    pub fn insert(&mut self, colour: Colour) {
        self.colours.insert(colour);
    }

    /// Iterate over the winners in colour order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> {
        let mut colours: Vec<Colour> = self.colours.iter().copied().collect();
        colours.sort_unstable();
        colours.into_iter()
    }
}

impl FromIterator<Colour> for Winners {
    fn from_iter<I: IntoIterator<Item = Colour>>(iter: I) -> Self {
        Self {
            colours: iter.into_iter().collect(),
        }
    }
}

impl Extend<Colour> for Winners {
    fn extend<I: IntoIterator<Item = Colour>>(&mut self, iter: I) {
        self.colours.extend(iter);
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victory {
    /// The fugitive survived every scheduled round.
    FugitiveEscaped,
    /// The fugitive had no move at the start of its turn.
    FugitiveCornered,
    /// A tracker landed on the fugitive.
    FugitiveCaught,
    /// No tracker could move.
    TrackersStranded,
}

impl Victory {
    /// Check if this victory goes to the fugitive.
    #[must_use]
    pub const fn fugitive_wins(self) -> bool {
        matches!(self, Victory::FugitiveEscaped | Victory::TrackersStranded)
    }
}

impl std::fmt::Display for Victory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Victory::FugitiveEscaped => "fugitive escaped",
            Victory::FugitiveCornered => "fugitive cornered",
            Victory::FugitiveCaught => "fugitive caught",
            Victory::TrackersStranded => "trackers stranded",
        };
        f.write_str(reason)
    }
}

/// A decided game: why it ended and who won.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub victory: Victory,
    pub winners: Winners,
}

impl Verdict {
    fn new(state: &GameState, victory: Victory) -> Self {
        let winners = if victory.fugitive_wins() {
            Winners::from_iter([state.fugitive().colour()])
        } else {
            state.trackers().map(|t| t.colour()).collect()
        };
        Self { victory, winners }
    }
}

/// Decide whether the game is over.
///
/// Returns `None` while the game continues.
pub fn evaluate<G: Graph + ?Sized>(state: &GameState, graph: &G) -> Option<Verdict> {
    let fugitive = state.fugitive();
    let fugitive_to_move = state.current_index() == 0;

    let victory = if state.round() >= state.schedule().len() && fugitive_to_move {
        Victory::FugitiveEscaped
    } else if fugitive_to_move && legal_moves(state, graph, fugitive.colour()).is_pass_only() {
        Victory::FugitiveCornered
    } else if state.trackers().any(|t| t.location() == fugitive.location()) {
        Victory::FugitiveCaught
    } else if state
        .trackers()
        .all(|t| legal_moves(state, graph, t.colour()).is_pass_only())
    {
        Victory::TrackersStranded
    } else {
        return None;
    };

    Some(Verdict::new(state, victory))
}

/// Winners of the current state; empty while the game continues.
pub fn compute_winners<G: Graph + ?Sized>(state: &GameState, graph: &G) -> Winners {
    evaluate(state, graph)
        .map(|verdict| verdict.winners)
        .unwrap_or_default()
}
