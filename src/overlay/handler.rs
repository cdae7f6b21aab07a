//! Menu handler trait implemented once per screen type

use super::button::Button;
use super::error::HandlerResult;
use super::screen::Screen;

/// Outcome of forwarding a pressed button to the active handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The overlay used the input; suppressed unless it is a cancel input
    Handled,
    /// The overlay swallowed the input; always suppressed
    Consumed,
    /// The overlay ignored the input; it reaches the host untouched
    NotHandled,
}

/// Overlay controller attached to one active screen
///
/// `S` is the drawing surface the host hands out each frame. The coordinator
/// guarantees `close` is called before the same handler is reopened and that
/// no two handlers are open at once.
pub trait MenuHandler<S: ?Sized> {
    /// Name of this handler for logs and errors
    fn name(&self) -> &'static str;

    /// Attach to a newly active screen
    fn open(&mut self, screen: &dyn Screen) -> HandlerResult;

    /// Detach from the current screen
    fn close(&mut self) -> HandlerResult;

    /// Called once per update tick while active
    fn update(&mut self) -> HandlerResult {
        Ok(())
    }

    /// Draw the overlay for this frame
    fn draw(&mut self, surface: &mut S) -> HandlerResult;

    /// Handle a pressed button
    fn handle_input(&mut self, button: Button) -> HandlerResult<InputOutcome>;

    /// Close the transient split menu, if one is showing
    fn close_split_menu(&mut self);

    /// Returns true if `screen` is the kind of screen this handler serves
    ///
    /// Used after a deferred resize to decide between reopening and dropping.
    fn is_correct_menu_type(&self, screen: &dyn Screen) -> bool;
}
