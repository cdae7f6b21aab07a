//! Mapping from screens to the handlers that serve them

use std::collections::HashMap;

use tracing::debug;

use super::handler::MenuHandler;
use super::screen::{Screen, ScreenKey, ScreenType};

/// Builds a fresh handler for a screen that was just intercepted
pub type HandlerFactory<S> = Box<dyn Fn() -> Box<dyn MenuHandler<S>>>;

/// Registry of handler factories keyed by screen type, with a display-name
/// fallback
///
/// Registration is last-write-wins: collaborators registered at startup
/// replace the core defaults for the same key.
pub struct HandlerRegistry<S: ?Sized> {
    by_type: HashMap<ScreenType, HandlerFactory<S>>,
    by_name: HashMap<String, HandlerFactory<S>>,
}

impl<S: ?Sized> HandlerRegistry<S> {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers a factory for `key`, replacing any earlier registration
    ///
    /// Returns true if an existing entry was replaced.
    pub fn register(&mut self, key: impl Into<ScreenKey>, factory: HandlerFactory<S>) -> bool {
        let key = key.into();
        let replaced = match &key {
            ScreenKey::Type(screen_type) => self.by_type.insert(*screen_type, factory).is_some(),
            ScreenKey::Name(name) => self.by_name.insert(name.clone(), factory).is_some(),
        };

        if replaced {
            debug!(%key, "Replaced existing handler registration");
        }
        replaced
    }

    /// Registers a plain constructor function for `key`
    pub fn register_fn<F>(&mut self, key: impl Into<ScreenKey>, factory: F) -> bool
    where
        F: Fn() -> Box<dyn MenuHandler<S>> + 'static,
    {
        self.register(key, Box::new(factory))
    }

    /// Finds the factory for a screen: exact type first, then display name
    pub fn lookup(&self, screen: &dyn Screen) -> Option<&HandlerFactory<S>> {
        self.by_type
            .get(&screen.screen_type())
            .or_else(|| self.by_name.get(&screen.display_name()))
    }

    /// Builds a handler for `screen` if one is registered
    pub fn create(&self, screen: &dyn Screen) -> Option<Box<dyn MenuHandler<S>>> {
        self.lookup(screen).map(|factory| factory())
    }

    /// Returns true if a factory is registered under exactly `key`
    pub fn contains(&self, key: &ScreenKey) -> bool {
        match key {
            ScreenKey::Type(screen_type) => self.by_type.contains_key(screen_type),
            ScreenKey::Name(name) => self.by_name.contains_key(name),
        }
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.by_type.len() + self.by_name.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ?Sized> Default for HandlerRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
