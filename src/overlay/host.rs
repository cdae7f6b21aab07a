//! Services the host application provides to the coordinator

use bitflags::bitflags;

use super::button::Button;

bitflags! {
    /// High-frequency host events the coordinator listens to only while a
    /// handler is active
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Listeners: u8 {
        const BUTTON_PRESSED = 1 << 0;
        const RENDERED = 1 << 1;
    }
}

/// Host-side services used while routing events
pub trait Host {
    /// Stop the host from processing `button` any further this frame
    fn suppress(&mut self, button: Button);

    /// Start delivering the given events to the coordinator
    fn add_listeners(&mut self, listeners: Listeners);

    /// Stop delivering the given events to the coordinator
    fn remove_listeners(&mut self, listeners: Listeners);
}

/// Answers whether an optional collaborator is loaded in the host
pub trait CollaboratorRegistry {
    fn is_loaded(&self, id: &str) -> bool;
}

impl<T: AsRef<str>> CollaboratorRegistry for [T] {
    fn is_loaded(&self, id: &str) -> bool {
        self.iter().any(|loaded| loaded.as_ref() == id)
    }
}
