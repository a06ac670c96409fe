//! Session-aware starting point for navigation
//!
//! Picks the landing screen from the session signal. The navigator asks again
//! whenever it needs a default (startup, empty back-stack, reset), so a session
//! that ends mid-use routes later fallbacks to the login screen.

use app_state::session::SessionSignal;

use crate::navigation::NavigationEntry;
use crate::screen::Screen;

/// Entry to show when there is nothing else to show
///
/// `home` for an authenticated session, `login` otherwise.
pub fn initial_entry(session: &dyn SessionSignal) -> NavigationEntry {
    if session.is_active() {
        NavigationEntry::new(Screen::Home)
    } else {
        NavigationEntry::new(Screen::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Params, ScreenId};

    mockall::mock! {
        pub Session {}

        impl SessionSignal for Session {
            fn is_active(&self) -> bool;
        }
    }

    #[test]
    fn test_active_session_lands_on_home() {
        let mut session = MockSession::new();
        session.expect_is_active().times(1).return_const(true);

        let entry = initial_entry(&session);
        assert_eq!(entry.screen_id(), ScreenId::Home);
        assert_eq!(entry.params(), Params::new());
    }

    #[test]
    fn test_no_session_lands_on_login() {
        let mut session = MockSession::new();
        session.expect_is_active().times(1).return_const(false);

        let entry = initial_entry(&session);
        assert_eq!(entry.screen_id(), ScreenId::Login);
        assert!(entry.params().is_empty());
    }
}
