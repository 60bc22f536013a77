//! Fugitive location disclosure.
//!
//! Spectators only ever see the fugitive where it was last disclosed. Every
//! fugitive move is passed through this module before it is broadcast:
//!
//! - On a disclosure round the leg is shown as played.
//! - Otherwise the leg's destination is replaced with the last-disclosed
//!   location. The ticket stays visible.
//!
//! A double move spans two rounds, so each leg is judged against its own
//! round and the second leg sees the disclosure state the first leg left
//! behind.

use crate::core::{DoubleMove, Location, Schedule, TicketMove};

/// One fugitive leg as played and as shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegDisclosure {
    /// The leg as actually played.
    pub actual: TicketMove,

    /// The leg as broadcast to spectators.
    pub apparent: TicketMove,

    /// Whether this leg's round discloses the fugitive.
    pub revealed: bool,
}

impl LegDisclosure {
    /// Judge a leg played in a round with the given disclosure flag.
    #[must_use]
    pub fn new(actual: TicketMove, revealed: bool, last_revealed: Location) -> Self {
        let apparent = if revealed {
            actual
        } else {
            TicketMove::new(actual.colour, actual.ticket, last_revealed)
        };
        Self {
            actual,
            apparent,
            revealed,
        }
    }

    /// The last-disclosed location once this leg has been played.
    #[must_use]
    pub fn last_revealed_after(&self, before: Location) -> Location {
        if self.revealed {
            self.actual.destination
        } else {
            before
        }
    }
}

/// Both legs of a double move as played and as shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleDisclosure {
    pub first: LegDisclosure,
    pub second: LegDisclosure,
}

impl DoubleDisclosure {
    /// Judge a double move started in `round`.
    #[must_use]
    pub fn new(mv: &DoubleMove, schedule: &Schedule, round: usize, last_revealed: Location) -> Self {
        let first = LegDisclosure::new(mv.first, schedule.is_reveal(round), last_revealed);
        let after_first = first.last_revealed_after(last_revealed);
        let second = LegDisclosure::new(mv.second, schedule.is_reveal(round + 1), after_first);
        Self { first, second }
    }

    /// The double move as broadcast before its legs.
    #[must_use]
    pub fn apparent(&self) -> DoubleMove {
        DoubleMove::new(self.first.actual.colour, self.first.apparent, self.second.apparent)
    }

    /// The legs in playing order.
    #[must_use]
    pub fn legs(&self) -> [LegDisclosure; 2] {
        [self.first, self.second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colour, Ticket};

    fn leg(ticket: Ticket, destination: u32) -> TicketMove {
        TicketMove::new(Colour::Black, ticket, Location(destination))
    }

    fn double() -> DoubleMove {
        DoubleMove::new(Colour::Black, leg(Ticket::Taxi, 5), leg(Ticket::Secret, 6))
    }

    #[test]
    fn test_revealed_leg_is_shown_as_played() {
        let disclosure = LegDisclosure::new(leg(Ticket::Bus, 9), true, Location(2));

        assert_eq!(disclosure.apparent, leg(Ticket::Bus, 9));
        assert_eq!(disclosure.last_revealed_after(Location(2)), Location(9));
    }

    #[test]
    fn test_hidden_leg_shows_last_revealed() {
        let disclosure = LegDisclosure::new(leg(Ticket::Bus, 9), false, Location(2));

        assert_eq!(disclosure.apparent, leg(Ticket::Bus, 2));
        assert_eq!(disclosure.last_revealed_after(Location(2)), Location(2));
    }

    #[test]
    fn test_hidden_before_first_reveal_shows_unknown() {
        let disclosure = LegDisclosure::new(leg(Ticket::Taxi, 3), false, Location::UNKNOWN);
        assert!(disclosure.apparent.destination.is_unknown());
    }

    #[test]
    fn test_double_both_hidden() {
        let schedule = Schedule::new(vec![false, false, false]);
        let disclosure = DoubleDisclosure::new(&double(), &schedule, 0, Location(1));

        assert_eq!(
            disclosure.apparent(),
            DoubleMove::new(Colour::Black, leg(Ticket::Taxi, 1), leg(Ticket::Secret, 1))
        );
    }

    #[test]
    fn test_double_both_revealed() {
        let schedule = Schedule::new(vec![true, true]);
        let disclosure = DoubleDisclosure::new(&double(), &schedule, 0, Location(1));

        assert_eq!(disclosure.apparent(), double());
    }

    #[test]
    fn test_double_first_leg_revealed() {
        let schedule = Schedule::new(vec![false, true, false]);
        let disclosure = DoubleDisclosure::new(&double(), &schedule, 1, Location(1));

        assert_eq!(disclosure.first.apparent, leg(Ticket::Taxi, 5));
        // Second leg hidden, shown where the first leg revealed the fugitive.
        assert_eq!(disclosure.second.apparent, leg(Ticket::Secret, 5));
    }

    #[test]
    fn test_double_second_leg_revealed() {
        let schedule = Schedule::new(vec![false, true]);
        let disclosure = DoubleDisclosure::new(&double(), &schedule, 0, Location(1));

        assert_eq!(disclosure.first.apparent, leg(Ticket::Taxi, 1));
        assert_eq!(disclosure.second.apparent, leg(Ticket::Secret, 6));
        assert!(!disclosure.first.revealed);
        assert!(disclosure.second.revealed);
    }

    #[test]
    fn test_legs_in_order() {
        let schedule = Schedule::new(vec![true, true]);
        let disclosure = DoubleDisclosure::new(&double(), &schedule, 0, Location::UNKNOWN);
        let [first, second] = disclosure.legs();

        assert_eq!(first.actual.destination, Location(5));
        assert_eq!(second.actual.destination, Location(6));
    }
}
