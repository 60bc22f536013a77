//! Player identification by colour.
//!
//! Every player is identified by a `Colour` for its whole lifetime.
//! `Black` is the fugitive; every other colour is a tracker.

use serde::{Deserialize, Serialize};

/// Player colour.
///
/// Exactly one colour, [`Colour::FUGITIVE`], denotes the fugitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// The fugitive's colour.
    pub const FUGITIVE: Colour = Colour::Black;

    /// Every tracker colour, in seating order.
    pub const TRACKERS: [Colour; 5] = [
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Check if this colour is the fugitive.
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Check if this colour is a tracker.
    #[must_use]
    pub const fn is_tracker(self) -> bool {
        !self.is_fugitive()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}
