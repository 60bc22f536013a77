//! Game configuration types.
//!
//! Hosts configure a game by providing:
//! - `Schedule`: which rounds disclose the fugitive's location
//! - `PlayerConfig`: colour, starting location and tickets per player
//! - `GameConfig`: the schedule plus one fugitive and one or more trackers
//!
//! `GameConfig::validate` enforces every invariant the rules rely on. The
//! game refuses to start from a configuration that fails it.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::location::Location;
use super::ticket::{Ticket, Tickets};
use crate::error::ConfigError;

/// Round-disclosure schedule.
///
/// One flag per round; `true` at index `i` means the fugitive's true location
/// becomes visible to everyone during round `i`. Fixed for the game's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(Vec<bool>);

impl Schedule {
    /// Create a schedule from per-round disclosure flags.
    #[must_use]
    pub fn new(rounds: Vec<bool>) -> Self {
        Self(rounds)
    }

    /// The classic 24-round schedule: disclosure on rounds 3, 8, 13, 18
    /// and 24 (1-based).
    #[must_use]
    pub fn classic() -> Self {
        const REVEALS: [usize; 5] = [3, 8, 13, 18, 24];
        Self((1..=24).map(|round| REVEALS.contains(&round)).collect())
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no rounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if round `round` discloses the fugitive.
    ///
    /// Rounds past the end of the schedule never disclose.
    #[must_use]
    pub fn is_reveal(&self, round: usize) -> bool {
        self.0.get(round).copied().unwrap_or(false)
    }

    /// The raw disclosure flags.
    #[must_use]
    pub fn rounds(&self) -> &[bool] {
        &self.0
    }
}

/// Starting configuration for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// The player's colour.
    pub colour: Colour,

    /// Starting location.
    pub location: Location,

    /// Starting tickets. Every ticket kind must have an entry, even if zero.
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a player configuration with no ticket entries.
    pub fn new(colour: Colour, location: Location) -> Self {
        Self {
            colour,
            location,
            tickets: FxHashMap::default(),
        }
    }

    /// Set a ticket count (builder pattern).
    #[must_use]
    pub fn with_tickets(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Set every ticket kind to zero (builder pattern).
    ///
    /// Chain `with_tickets` afterwards to give specific counts.
    #[must_use]
    pub fn with_empty_tickets(mut self) -> Self {
        for ticket in Ticket::ALL {
            self.tickets.insert(ticket, 0);
        }
        self
    }

    /// Standard fugitive inventory: 4 taxi, 3 bus, 3 underground,
    /// 2 double, 5 secret.
    pub fn standard_fugitive(location: Location) -> Self {
        Self::new(Colour::FUGITIVE, location)
            .with_tickets(Ticket::Taxi, 4)
            .with_tickets(Ticket::Bus, 3)
            .with_tickets(Ticket::Underground, 3)
            .with_tickets(Ticket::Double, 2)
            .with_tickets(Ticket::Secret, 5)
    }

    /// Standard tracker inventory: 10 taxi, 8 bus, 4 underground.
    pub fn standard_tracker(colour: Colour, location: Location) -> Self {
        Self::new(colour, location)
            .with_tickets(Ticket::Taxi, 10)
            .with_tickets(Ticket::Bus, 8)
            .with_tickets(Ticket::Underground, 4)
            .with_tickets(Ticket::Double, 0)
            .with_tickets(Ticket::Secret, 0)
    }

    /// Convert the ticket map into an inventory.
    ///
    /// Fails if any ticket kind has no entry.
    pub fn inventory(&self) -> Result<Tickets, ConfigError> {
        let mut counts = Vec::with_capacity(Ticket::ALL.len());
        for ticket in Ticket::ALL {
            let count = self.tickets.get(&ticket).copied().ok_or(ConfigError::MissingTicket {
                colour: self.colour,
                ticket,
            })?;
            counts.push((ticket, count));
        }
        Ok(Tickets::from_counts(counts))
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round-disclosure schedule.
    pub rounds: Schedule,

    /// The fugitive. Always seated first.
    pub fugitive: PlayerConfig,

    /// Trackers in seating order.
    pub trackers: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create a configuration with no trackers yet.
    pub fn new(rounds: Schedule, fugitive: PlayerConfig) -> Self {
        Self {
            rounds,
            fugitive,
            trackers: Vec::new(),
        }
    }

    /// Add a tracker (builder pattern).
    #[must_use]
    pub fn with_tracker(mut self, tracker: PlayerConfig) -> Self {
        self.trackers.push(tracker);
        self
    }

    /// All player configurations in seating order, fugitive first.
    pub fn players(&self) -> impl Iterator<Item = &PlayerConfig> {
        std::iter::once(&self.fugitive).chain(self.trackers.iter())
    }

    /// Check every construction invariant.
    ///
    /// Graph emptiness is checked by the game itself since the graph is
    /// supplied separately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }

        if self.fugitive.colour.is_tracker() {
            return Err(ConfigError::FugitiveColour(self.fugitive.colour));
        }

        if self.trackers.is_empty() {
            return Err(ConfigError::NoTrackers);
        }

        if let Some(tracker) = self.trackers.iter().find(|t| t.colour.is_fugitive()) {
            return Err(ConfigError::TrackerColour(tracker.colour));
        }

        let mut colours = FxHashSet::default();
        let mut locations = FxHashSet::default();
        for player in self.players() {
            if player.location.is_unknown() {
                return Err(ConfigError::ReservedLocation(player.colour));
            }
            if !colours.insert(player.colour) {
                return Err(ConfigError::DuplicateColour(player.colour));
            }
            if !locations.insert(player.location) {
                return Err(ConfigError::DuplicateLocation(player.location));
            }
        }

        for player in self.players() {
            player.inventory()?;
        }

        for tracker in &self.trackers {
            for ticket in Ticket::ALL.into_iter().filter(|t| t.is_fugitive_only()) {
                let count = tracker.tickets.get(&ticket).copied().unwrap_or(0);
                if count != 0 {
                    return Err(ConfigError::ForbiddenTicket {
                        colour: tracker.colour,
                        ticket,
                        count,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GameConfig {
        GameConfig::new(
            Schedule::new(vec![true, false, false]),
            PlayerConfig::standard_fugitive(Location(1)),
        )
        .with_tracker(PlayerConfig::standard_tracker(Colour::Blue, Location(2)))
        .with_tracker(PlayerConfig::standard_tracker(Colour::Red, Location(3)))
    }

    #[test]
    fn test_classic_schedule() {
        let schedule = Schedule::classic();

        assert_eq!(schedule.len(), 24);
        assert!(schedule.is_reveal(2));
        assert!(schedule.is_reveal(7));
        assert!(schedule.is_reveal(23));
        assert!(!schedule.is_reveal(0));
        assert_eq!(schedule.rounds().iter().filter(|&&r| r).count(), 5);
    }

    #[test]
    fn test_schedule_past_end_never_reveals() {
        let schedule = Schedule::new(vec![true]);
        assert!(schedule.is_reveal(0));
        assert!(!schedule.is_reveal(1));
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(valid_config().validate(), Ok(()));
        assert_eq!(valid_config().players().count(), 3);
    }

    #[test]
    fn test_empty_rounds() {
        let mut config = valid_config();
        config.rounds = Schedule::new(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyRounds));
    }

    #[test]
    fn test_fugitive_must_be_black() {
        let mut config = valid_config();
        config.fugitive.colour = Colour::Green;
        assert_eq!(config.validate(), Err(ConfigError::FugitiveColour(Colour::Green)));
    }

    #[test]
    fn test_tracker_cannot_be_black() {
        let config = valid_config()
            .with_tracker(PlayerConfig::standard_tracker(Colour::Black, Location(9)));
        assert_eq!(config.validate(), Err(ConfigError::TrackerColour(Colour::Black)));
    }

    #[test]
    fn test_needs_a_tracker() {
        let config = GameConfig::new(
            Schedule::new(vec![false]),
            PlayerConfig::standard_fugitive(Location(1)),
        );
        assert_eq!(config.validate(), Err(ConfigError::NoTrackers));
    }

    #[test]
    fn test_duplicate_colour() {
        let config = valid_config()
            .with_tracker(PlayerConfig::standard_tracker(Colour::Blue, Location(9)));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateColour(Colour::Blue)));
    }

    #[test]
    fn test_duplicate_location() {
        let config = valid_config()
            .with_tracker(PlayerConfig::standard_tracker(Colour::White, Location(1)));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateLocation(Location(1))));
    }

    #[test]
    fn test_unknown_location_is_not_a_start() {
        let config = valid_config()
            .with_tracker(PlayerConfig::standard_tracker(Colour::White, Location::UNKNOWN));
        assert_eq!(config.validate(), Err(ConfigError::ReservedLocation(Colour::White)));
    }

    #[test]
    fn test_missing_ticket_entry() {
        let mut config = valid_config();
        config.fugitive.tickets.remove(&Ticket::Secret);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingTicket {
                colour: Colour::Black,
                ticket: Ticket::Secret,
            })
        );
    }

    #[test]
    fn test_tracker_with_forbidden_ticket() {
        let config = valid_config().with_tracker(
            PlayerConfig::standard_tracker(Colour::Yellow, Location(9)).with_tickets(Ticket::Double, 1),
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::ForbiddenTicket {
                colour: Colour::Yellow,
                ticket: Ticket::Double,
                count: 1,
            })
        );
    }

    #[test]
    fn test_inventory_conversion() {
        let tickets = PlayerConfig::standard_fugitive(Location(1)).inventory().unwrap();
        assert_eq!(tickets.get(Ticket::Secret), 5);
        assert_eq!(tickets.get(Ticket::Double), 2);
        assert_eq!(tickets.total(), 17);
    }

    #[test]
    fn test_empty_tickets_builder() {
        let config = PlayerConfig::new(Colour::Black, Location(1))
            .with_empty_tickets()
            .with_tickets(Ticket::Taxi, 1);
        let tickets = config.inventory().unwrap();
        assert_eq!(tickets.get(Ticket::Taxi), 1);
        assert_eq!(tickets.total(), 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = valid_config();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
