//! Spectator registry.
//!
//! Spectators are shared, single-threaded handles (`Rc<RefCell<_>>`) so the
//! host can keep reading a spectator it registered. Identity is pointer
//! identity: registering the same handle twice is an error, as is removing
//! one that was never registered.
//!
//! Notification iterates over a snapshot of the registry, so the set of
//! spectators seen by one event is fixed when the event starts.

use std::cell::RefCell;
use std::rc::Rc;

use super::Spectator;
use crate::error::SpectatorError;
use crate::game::GameView;

/// Shared handle to a registered spectator.
pub type SharedSpectator = Rc<RefCell<dyn Spectator>>;

/// Registered spectators in registration order.
#[derive(Clone, Default)]
pub struct SpectatorRegistry {
    spectators: Vec<SharedSpectator>,
}

impl SpectatorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, spectator: &SharedSpectator) -> Option<usize> {
        self.spectators
            .iter()
            .position(|s| std::ptr::addr_eq(Rc::as_ptr(s), Rc::as_ptr(spectator)))
    }

    /// Check if a spectator is registered.
    #[must_use]
    pub fn contains(&self, spectator: &SharedSpectator) -> bool {
        self.position(spectator).is_some()
    }

    /// Register a spectator.
    pub fn register(&mut self, spectator: SharedSpectator) -> Result<(), SpectatorError> {
        if self.contains(&spectator) {
            tracing::warn!("spectator registered twice");
            return Err(SpectatorError::AlreadyRegistered);
        }
        self.spectators.push(spectator);
        Ok(())
    }

    /// Unregister a spectator.
    pub fn unregister(&mut self, spectator: &SharedSpectator) -> Result<(), SpectatorError> {
        let Some(index) = self.position(spectator) else {
            tracing::warn!("unregistering unknown spectator");
            return Err(SpectatorError::NotRegistered);
        };
        self.spectators.remove(index);
        Ok(())
    }

    /// Number of registered spectators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spectators.len()
    }

    /// Check if no spectators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spectators.is_empty()
    }

    /// Deliver one event to every spectator, in registration order.
    pub fn notify(
        &self,
        view: &GameView<'_>,
        mut event: impl FnMut(&mut dyn Spectator, &GameView<'_>),
    ) {
        let snapshot = self.spectators.clone();
        for spectator in &snapshot {
            event(&mut *spectator.borrow_mut(), view);
        }
    }
}

impl std::fmt::Debug for SpectatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorRegistry")
            .field("spectators", &self.spectators.len())
            .finish()
    }
}
