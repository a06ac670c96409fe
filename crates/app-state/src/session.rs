//! Session state shared with the navigation layer
//!
//! The authentication provider itself lives outside this workspace. What the
//! rest of the app needs from it is a single signal: is a session active right
//! now? [`SessionSignal`] is that interface, and [`SessionHandle`] is the
//! in-process implementation the auth flows write into.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Session-related errors
#[derive(Debug, thiserror::Error)]
pub enum SessionStateError {
    /// Session data rejected by the handle
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// No current session
    #[error("No current session")]
    NoCurrentSession,
}

/// Result type for session state operations
pub type Result<T> = std::result::Result<T, SessionStateError>;

/// Boolean-equivalent view of the authentication provider
///
/// Implementations must answer from live state on every call; callers rely on
/// this to notice a session that ended mid-use.
pub trait SessionSignal: Send + Sync {
    /// Whether an authenticated session currently exists
    fn is_active(&self) -> bool;
}

/// An authenticated session as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Provider-assigned user identifier
    pub user_id: String,
    /// Account email, when the provider exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    /// Create a session for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    /// Attach an email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Shared handle to the current session
///
/// Clones observe and mutate the same session. Changes are published through
/// a watch channel so interested parties can react to sign-in and sign-out.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl SessionHandle {
    /// Create a handle with no active session
    pub fn signed_out() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Create a handle seeded with an active session
    pub fn with_session(session: Session) -> Result<Self> {
        let handle = Self::signed_out();
        handle.sign_in(session)?;
        Ok(handle)
    }

    /// Record a successful sign-in
    ///
    /// Replaces any existing session.
    pub fn sign_in(&self, session: Session) -> Result<()> {
        if session.user_id.trim().is_empty() {
            return Err(SessionStateError::InvalidSession(
                "user id must not be empty".to_string(),
            ));
        }

        tracing::debug!(user_id = %session.user_id, "session started");
        self.tx.send_replace(Some(session));
        Ok(())
    }

    /// End the current session
    ///
    /// Returns the session that was active.
    pub fn sign_out(&self) -> Result<Session> {
        let previous = self
            .tx
            .send_replace(None)
            .ok_or(SessionStateError::NoCurrentSession)?;
        tracing::debug!(user_id = %previous.user_id, "session ended");
        Ok(previous)
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

impl SessionSignal for SessionHandle {
    fn is_active(&self) -> bool {
        self.tx.borrow().is_some()
    }
}
