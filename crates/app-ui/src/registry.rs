//! Screen registry
//!
//! Maps each [`ScreenId`] to the renderer that draws it. Renderers are opaque
//! to this crate: anything callable with a [`Screen`] that produces a view
//! value `V`.

use std::collections::HashMap;

use crate::navigation::NavigationEntry;
use crate::screen::{Params, Screen, ScreenId, ValidationError};

type Renderer<V> = Box<dyn Fn(&Screen) -> V + Send + Sync>;

/// Registry of screen renderers
///
/// Screens without a registered renderer fall back to the renderer given at
/// construction.
pub struct ScreenRegistry<V> {
    renderers: HashMap<ScreenId, Renderer<V>>,
    fallback: Renderer<V>,
}

impl<V> ScreenRegistry<V> {
    /// Create a registry with the renderer used for unregistered screens
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn(&Screen) -> V + Send + Sync + 'static,
    {
        Self {
            renderers: HashMap::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Register the renderer for a screen, replacing any previous one
    pub fn register<F>(&mut self, screen: ScreenId, renderer: F)
    where
        F: Fn(&Screen) -> V + Send + Sync + 'static,
    {
        self.renderers.insert(screen, Box::new(renderer));
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<F>(mut self, screen: ScreenId, renderer: F) -> Self
    where
        F: Fn(&Screen) -> V + Send + Sync + 'static,
    {
        self.register(screen, renderer);
        self
    }

    /// Check whether a screen has its own renderer
    pub fn is_registered(&self, screen: ScreenId) -> bool {
        self.renderers.contains_key(&screen)
    }

    /// Screens without their own renderer
    pub fn unregistered(&self) -> Vec<ScreenId> {
        ScreenId::ALL
            .into_iter()
            .filter(|id| !self.is_registered(*id))
            .collect()
    }

    /// Validate parameters and select the renderer for a screen
    pub fn resolve(
        &self,
        screen: ScreenId,
        params: &Params,
    ) -> Result<Renderable<'_, V>, ValidationError> {
        let screen = Screen::from_params(screen, params)?;
        let renderer = self.renderer_for(screen.id());
        Ok(Renderable { screen, renderer })
    }

    /// Render an entry that has already been validated
    pub fn render(&self, entry: &NavigationEntry) -> V {
        (self.renderer_for(entry.screen_id()))(entry.screen())
    }

    fn renderer_for(&self, screen: ScreenId) -> &Renderer<V> {
        match self.renderers.get(&screen) {
            Some(renderer) => renderer,
            None => {
                tracing::warn!("No renderer registered for {}, using fallback", screen);
                &self.fallback
            }
        }
    }
}

/// A validated screen paired with its renderer
pub struct Renderable<'a, V> {
    screen: Screen,
    renderer: &'a Renderer<V>,
}

impl<V> Renderable<'_, V> {
    /// The validated screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Invoke the renderer
    pub fn render(&self) -> V {
        (self.renderer)(&self.screen)
    }

    /// Take the validated screen
    pub fn into_screen(self) -> Screen {
        self.screen
    }
}
