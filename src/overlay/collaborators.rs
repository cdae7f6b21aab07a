//! Optional collaborators that contribute handlers when loaded
//!
//! The table is declared up front and consulted once, after the host has
//! finished starting, so entries registered here land after the core
//! defaults and win on conflicting keys.

use tracing::debug;

use super::handler::MenuHandler;
use super::host::CollaboratorRegistry;
use super::registry::{HandlerFactory, HandlerRegistry};
use super::screen::ScreenKey;

/// Handlers contributed by one optional collaborator
pub struct Collaborator<S: ?Sized> {
    id: String,
    entries: Vec<(ScreenKey, HandlerFactory<S>)>,
}

impl<S: ?Sized> Collaborator<S> {
    /// Creates a collaborator with no entries
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Declares that screens matching `key` are served by `factory`
    pub fn handles<F>(mut self, key: impl Into<ScreenKey>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn MenuHandler<S>> + 'static,
    {
        self.entries.push((key.into(), Box::new(factory)));
        self
    }

    /// Collaborator identifier as reported by the host
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of declared entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Static table of optional collaborators
pub struct CollaboratorTable<S: ?Sized> {
    collaborators: Vec<Collaborator<S>>,
}

impl<S: ?Sized> CollaboratorTable<S> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            collaborators: Vec::new(),
        }
    }

    /// Adds a collaborator to the table
    pub fn with(mut self, collaborator: Collaborator<S>) -> Self {
        self.collaborators.push(collaborator);
        self
    }

    /// Number of collaborators still in the table
    pub fn len(&self) -> usize {
        self.collaborators.len()
    }

    /// Returns true once the table is empty or has been consumed
    pub fn is_empty(&self) -> bool {
        self.collaborators.is_empty()
    }

    /// Registers the entries of every loaded collaborator and empties the
    /// table
    ///
    /// Returns the number of entries registered.
    pub fn register_loaded<R>(&mut self, loaded: &R, registry: &mut HandlerRegistry<S>) -> usize
    where
        R: CollaboratorRegistry + ?Sized,
    {
        let mut registered = 0;

        for collaborator in std::mem::take(&mut self.collaborators) {
            if !loaded.is_loaded(&collaborator.id) {
                continue;
            }

            debug!(
                collaborator = %collaborator.id,
                "Collaborator detected, registering its screens"
            );
            for (key, factory) in collaborator.entries {
                debug!(collaborator = %collaborator.id, %key, "Registered screen");
                registry.register(key, factory);
                registered += 1;
            }
        }

        registered
    }
}

impl<S: ?Sized> Default for CollaboratorTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
