//! Host services of the demo application

use tracing::trace;

use crate::overlay::{Button, Host, Listeners};

/// Listener and suppression state the demo host keeps for the coordinator
#[derive(Debug, Default)]
pub struct DemoHost {
    listening: Listeners,
    suppressed: Vec<Button>,
}

impl DemoHost {
    /// Creates a host with no listeners registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the coordinator asked for `listeners`
    pub fn listens(&self, listeners: Listeners) -> bool {
        self.listening.contains(listeners)
    }

    /// Consumes a suppression of `button`, returning whether there was one
    pub fn take_suppressed(&mut self, button: Button) -> bool {
        match self.suppressed.iter().position(|b| *b == button) {
            Some(index) => {
                self.suppressed.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops suppressions left over from the previous frame
    pub fn end_frame(&mut self) {
        self.suppressed.clear();
    }
}

impl Host for DemoHost {
    fn suppress(&mut self, button: Button) {
        trace!(?button, "Suppressed");
        self.suppressed.push(button);
    }

    fn add_listeners(&mut self, listeners: Listeners) {
        self.listening.insert(listeners);
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        self.listening.remove(listeners);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::KeyCode;

    #[test]
    fn test_suppression_is_consumed_once() {
        let mut host = DemoHost::new();
        let button = Button::Key(KeyCode::Num3);

        host.suppress(button);
        assert!(host.take_suppressed(button));
        assert!(!host.take_suppressed(button));
    }

    #[test]
    fn test_end_frame_clears_suppressions() {
        let mut host = DemoHost::new();
        host.suppress(Button::Key(KeyCode::Enter));
        host.end_frame();
        assert!(!host.take_suppressed(Button::Key(KeyCode::Enter)));
    }

    #[test]
    fn test_listeners() {
        let mut host = DemoHost::new();
        assert!(!host.listens(Listeners::RENDERED));

        host.add_listeners(Listeners::all());
        assert!(host.listens(Listeners::RENDERED | Listeners::BUTTON_PRESSED));

        host.remove_listeners(Listeners::all());
        assert!(!host.listens(Listeners::BUTTON_PRESSED));
    }
}
