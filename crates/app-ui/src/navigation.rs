//! Navigation state machine for Learnwave
//!
//! This module tracks the active screen and a back-stack of previously active
//! entries:
//! - `navigate` validates the target, pushes the current entry and replaces it
//! - `go_back` restores the most recent entry, or the session default when the
//!   back-stack is empty
//! - observers subscribe to whole-state snapshots
//!
//! Every transition computes the new `(current, stack)` pair inside a single
//! publish, so an observer never sees one half of a transition without the
//! other.

use app_state::session::SessionSignal;
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::config::NavigationConfig;
use crate::initializer::initial_entry;
use crate::screen::{Params, Screen, ScreenId, UnknownScreen, ValidationError};

/// Navigation errors
///
/// A rejected navigation never changes the active screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Screen name outside the known set
    #[error(transparent)]
    UnknownScreen(#[from] UnknownScreen),

    /// Target parameters missing or mistyped
    #[error(transparent)]
    InvalidParams(#[from] ValidationError),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Navigation Entries
// =============================================================================

/// An immutable (screen, params) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationEntry {
    screen: Screen,
}

impl NavigationEntry {
    /// Create an entry for a typed screen
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    /// Create an entry from untyped parameters
    pub fn from_params(
        screen: ScreenId,
        params: &Params,
    ) -> std::result::Result<Self, ValidationError> {
        Screen::from_params(screen, params).map(Self::new)
    }

    /// The typed screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The screen identifier
    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    /// The screen parameters
    pub fn params(&self) -> Params {
        self.screen.params()
    }

    /// Take the typed screen
    pub fn into_screen(self) -> Screen {
        self.screen
    }
}

impl From<Screen> for NavigationEntry {
    fn from(screen: Screen) -> Self {
        Self::new(screen)
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Current entry plus back-stack (oldest first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: NavigationEntry,
    stack: VecDeque<NavigationEntry>,
}

impl NavigationState {
    /// Create a state with an empty back-stack
    pub fn new(current: NavigationEntry) -> Self {
        Self {
            current,
            stack: VecDeque::new(),
        }
    }

    /// The entry currently shown
    pub fn current(&self) -> &NavigationEntry {
        &self.current
    }

    /// Previously shown entries, most recent last
    pub fn stack(&self) -> &VecDeque<NavigationEntry> {
        &self.stack
    }

    /// Check if there is an entry to go back to
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Back-stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push the current entry and show `next`, evicting the oldest entries
    /// beyond `max_history`
    fn advance(&mut self, next: NavigationEntry, max_history: usize) {
        let previous = std::mem::replace(&mut self.current, next);
        self.stack.push_back(previous);

        while self.stack.len() > max_history {
            if let Some(evicted) = self.stack.pop_front() {
                tracing::debug!(
                    "Back-stack full ({}), dropped {}",
                    max_history,
                    evicted.screen_id()
                );
            }
        }
    }

    /// Pop the most recent entry into `current`
    ///
    /// Returns false and shows `fallback` when the back-stack is empty.
    fn retreat(&mut self, fallback: impl FnOnce() -> NavigationEntry) -> bool {
        match self.stack.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => {
                self.current = fallback();
                false
            }
        }
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Owner of the navigation state
///
/// One navigator exists per UI session. It is mutated only through
/// [`navigate`](Self::navigate), [`push`](Self::push),
/// [`go_back`](Self::go_back) and [`reset`](Self::reset); everything else
/// observes snapshots.
pub struct Navigator {
    state: watch::Sender<NavigationState>,
    session: Arc<dyn SessionSignal>,
    config: NavigationConfig,
}

impl Navigator {
    /// Create a navigator seeded from the session signal
    ///
    /// A `max_history` of zero is raised to one so that every navigation can
    /// still be undone.
    pub fn new(session: Arc<dyn SessionSignal>, mut config: NavigationConfig) -> Self {
        if config.max_history == 0 {
            tracing::warn!("maxHistory of 0 would drop every entry, using 1");
            config.max_history = 1;
        }

        let (state, _) = watch::channel(NavigationState::new(initial_entry(session.as_ref())));
        Self {
            state,
            session,
            config,
        }
    }

    /// Navigate to a screen with untyped parameters
    ///
    /// `None` is the same as empty parameters. Invalid parameters are rejected
    /// before anything changes.
    pub fn navigate(&mut self, screen: ScreenId, params: Option<Params>) -> Result<()> {
        let params = params.unwrap_or_default();
        let screen = Screen::from_params(screen, &params).map_err(|err| {
            tracing::warn!("Navigation rejected: {}", err);
            err
        })?;
        self.push(screen);
        Ok(())
    }

    /// Navigate to a screen given by name
    pub fn navigate_named(&mut self, name: &str, params: Option<Params>) -> Result<()> {
        let screen = name.parse::<ScreenId>().map_err(|err| {
            tracing::warn!("Navigation rejected: {}", err);
            err
        })?;
        self.navigate(screen, params)
    }

    /// Navigate to an already-typed screen
    pub fn push(&mut self, screen: Screen) {
        let next = NavigationEntry::new(screen);
        let max_history = self.config.max_history;

        self.state.send_modify(|state| {
            tracing::debug!(
                "Navigate {} -> {}",
                state.current.screen_id(),
                next.screen_id()
            );
            state.advance(next, max_history);
        });
    }

    /// Go back one entry
    ///
    /// Returns true if an entry was restored from the back-stack, false if the
    /// stack was empty and the session default was shown instead.
    pub fn go_back(&mut self) -> bool {
        let session = &self.session;
        let mut restored = false;

        self.state.send_modify(|state| {
            restored = state.retreat(|| initial_entry(session.as_ref()));
            tracing::debug!(
                "Back to {} (depth {})",
                state.current.screen_id(),
                state.depth()
            );
        });

        restored
    }

    /// Discard history and show the session default
    ///
    /// Called when the session starts or ends.
    pub fn reset(&mut self) {
        let entry = initial_entry(self.session.as_ref());
        tracing::debug!("Navigation reset to {}", entry.screen_id());
        self.state.send_replace(NavigationState::new(entry));
    }

    /// The entry currently shown
    pub fn current(&self) -> NavigationEntry {
        self.state.borrow().current.clone()
    }

    /// Copy of the full state
    pub fn snapshot(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Back-stack entries, most recent last
    pub fn history(&self) -> Vec<NavigationEntry> {
        self.state.borrow().stack.iter().cloned().collect()
    }

    /// Back-stack depth
    pub fn depth(&self) -> usize {
        self.state.borrow().depth()
    }

    /// Check if there is an entry to go back to
    pub fn can_go_back(&self) -> bool {
        self.state.borrow().can_go_back()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Active configuration
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }
}

// =============================================================================
// Tests
// =============================================================================
