//! Application shell
//!
//! One [`AppShell`] exists per running app. It owns the navigator and reseeds
//! it whenever the session starts or ends, so the render layer always has a
//! valid entry to draw.

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use app_state::session::{Session, SessionHandle, SessionStateError};
use app_ui::navigation::{NavigationEntry, NavigationError, Navigator};
use app_ui::{NavigationConfig, Params, ScreenId, ScreenRegistry};

/// Session, navigation and rendering for one running app
pub struct AppShell<V> {
    session: SessionHandle,
    navigator: Navigator,
    registry: ScreenRegistry<V>,
}

impl<V> AppShell<V> {
    /// Create a shell around an existing session
    pub fn new(
        registry: ScreenRegistry<V>,
        session: SessionHandle,
        config: NavigationConfig,
    ) -> Self {
        let navigator = Navigator::new(Arc::new(session.clone()), config);
        Self {
            session,
            navigator,
            registry,
        }
    }

    /// Create a shell, reading navigation settings from `config_path` if given
    pub fn bootstrap(
        registry: ScreenRegistry<V>,
        session: SessionHandle,
        config_path: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => NavigationConfig::load(path)
                .with_context(|| format!("loading navigation config from {}", path.display()))?,
            None => NavigationConfig::default(),
        };

        let unregistered = registry.unregistered();
        if !unregistered.is_empty() {
            tracing::warn!(
                "{} screens have no renderer: {:?}",
                unregistered.len(),
                unregistered
            );
        }

        Ok(Self::new(registry, session, config))
    }

    /// Start a session and land on its home screen
    pub fn sign_in(&mut self, session: Session) -> Result<(), SessionStateError> {
        self.session.sign_in(session)?;
        self.navigator.reset();
        Ok(())
    }

    /// End the session and return to the login screen
    pub fn sign_out(&mut self) -> Result<Session, SessionStateError> {
        let ended = self.session.sign_out()?;
        self.navigator.reset();
        Ok(ended)
    }

    /// Navigate to a screen
    ///
    /// Parameters are checked by the registry before the navigator sees them.
    pub fn navigate(
        &mut self,
        screen: ScreenId,
        params: Option<Params>,
    ) -> Result<(), NavigationError> {
        let params = params.unwrap_or_default();
        let screen = self
            .registry
            .resolve(screen, &params)
            .map_err(|err| {
                tracing::warn!("Navigation rejected: {}", err);
                err
            })?
            .into_screen();
        self.navigator.push(screen);
        Ok(())
    }

    /// Navigate to a screen given by name
    pub fn navigate_named(
        &mut self,
        name: &str,
        params: Option<Params>,
    ) -> Result<(), NavigationError> {
        let screen = name.parse::<ScreenId>().map_err(|err| {
            tracing::warn!("Navigation rejected: {}", err);
            err
        })?;
        self.navigate(screen, params)
    }

    /// Go back one entry
    pub fn go_back(&mut self) -> bool {
        self.navigator.go_back()
    }

    /// The entry currently shown
    pub fn current(&self) -> NavigationEntry {
        self.navigator.current()
    }

    /// Render the current entry
    pub fn render(&self) -> V {
        self.registry.render(&self.navigator.current())
    }

    /// The navigator, for observers
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The session handle
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::Screen;

    fn registry() -> ScreenRegistry<&'static str> {
        ScreenRegistry::new(|_: &Screen| "placeholder")
            .with(ScreenId::Login, |_: &Screen| "login")
            .with(ScreenId::Home, |_: &Screen| "home")
    }

    #[test]
    fn test_sign_in_reseeds_navigation() {
        let mut shell = AppShell::new(
            registry(),
            SessionHandle::signed_out(),
            NavigationConfig::default(),
        );
        shell.navigate(ScreenId::ForgotPassword, None).unwrap();

        shell.sign_in(Session::new("user-1")).unwrap();
        assert_eq!(shell.render(), "home");
        assert!(!shell.navigator().can_go_back());
    }

    #[test]
    fn test_sign_out_returns_to_login() {
        let session = SessionHandle::with_session(Session::new("user-1")).unwrap();
        let mut shell = AppShell::new(registry(), session, NavigationConfig::default());
        shell.navigate(ScreenId::Settings, None).unwrap();
        assert_eq!(shell.render(), "placeholder");

        let ended = shell.sign_out().unwrap();
        assert_eq!(ended.user_id, "user-1");
        assert_eq!(shell.render(), "login");
        assert!(shell.session().current().is_none());
    }

    #[test]
    fn test_failed_sign_in_keeps_navigation() {
        let mut shell = AppShell::new(
            registry(),
            SessionHandle::signed_out(),
            NavigationConfig::default(),
        );
        shell.navigate(ScreenId::Register, None).unwrap();

        assert!(shell.sign_in(Session::new("")).is_err());
        assert_eq!(shell.current().screen_id(), ScreenId::Register);
    }

    #[test]
    fn test_navigate_resolves_through_registry() {
        let session = SessionHandle::with_session(Session::new("user-1")).unwrap();
        let mut shell = AppShell::new(registry(), session, NavigationConfig::default());
        let before = shell.navigator().snapshot();

        let err = shell
            .navigate(ScreenId::Home, Some(Params::new().with("videoId", "v1")))
            .unwrap_err();
        assert!(matches!(err, NavigationError::InvalidParams(_)));
        assert_eq!(shell.navigator().snapshot(), before);

        shell.navigate(ScreenId::Login, None).unwrap();
        assert_eq!(shell.render(), "login");
        assert_eq!(shell.navigator().depth(), 1);
    }

    #[test]
    fn test_bootstrap_without_config() {
        let shell = AppShell::bootstrap(registry(), SessionHandle::signed_out(), None).unwrap();
        assert_eq!(shell.navigator().config(), &NavigationConfig::default());
    }
}
