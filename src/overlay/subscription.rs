//! Listener bookkeeping for the active handler slot

use tracing::debug;

use super::handler::MenuHandler;
use super::host::{Host, Listeners};

/// Tracks whether the high-frequency listeners are registered with the host
///
/// `subscribe` and `unsubscribe` are no-ops when already in the target
/// state, so the host never sees a duplicate registration.
#[derive(Debug, Default)]
pub struct Subscription {
    subscribed: bool,
}

impl Subscription {
    /// Listeners held while subscribed
    pub const LISTENERS: Listeners = Listeners::BUTTON_PRESSED.union(Listeners::RENDERED);

    /// Creates an unsubscribed tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the listeners unless already registered
    ///
    /// Returns true if the host was called.
    pub fn subscribe<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.subscribed {
            return false;
        }
        host.add_listeners(Self::LISTENERS);
        self.subscribed = true;
        debug!(listeners = ?Self::LISTENERS, "Subscribed to handler events");
        true
    }

    /// Removes the listeners unless already removed
    ///
    /// Returns true if the host was called.
    pub fn unsubscribe<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.subscribed {
            return false;
        }
        host.remove_listeners(Self::LISTENERS);
        self.subscribed = false;
        debug!(listeners = ?Self::LISTENERS, "Unsubscribed from handler events");
        true
    }

    /// Returns true while the listeners are registered
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

/// The single active handler together with its subscription state
pub(crate) struct ActiveSlot<S: ?Sized> {
    handler: Option<Box<dyn MenuHandler<S>>>,
    subscription: Subscription,
}

impl<S: ?Sized> ActiveSlot<S> {
    pub fn new() -> Self {
        Self {
            handler: None,
            subscription: Subscription::new(),
        }
    }

    pub fn handler(&self) -> Option<&(dyn MenuHandler<S> + 'static)> {
        self.handler.as_deref()
    }

    pub fn handler_mut(&mut self) -> Option<&mut (dyn MenuHandler<S> + 'static)> {
        self.handler.as_deref_mut()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_subscribed()
    }

    /// Opens a guard that reconciles the subscription with the slot when
    /// dropped, on every exit path
    pub fn lock<'a, H: Host + ?Sized>(&'a mut self, host: &'a mut H) -> SlotGuard<'a, S, H> {
        SlotGuard { slot: self, host }
    }

    fn sync<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.handler.is_some() {
            self.subscription.subscribe(host);
        } else {
            self.subscription.unsubscribe(host);
        }
    }
}

/// Scoped access to the active slot
///
/// While the guard lives the slot may be emptied or refilled freely; on drop
/// the listeners are registered iff a handler is left in the slot.
pub(crate) struct SlotGuard<'a, S: ?Sized, H: Host + ?Sized> {
    slot: &'a mut ActiveSlot<S>,
    host: &'a mut H,
}

impl<S: ?Sized, H: Host + ?Sized> SlotGuard<'_, S, H> {
    pub fn handler_mut(&mut self) -> Option<&mut (dyn MenuHandler<S> + 'static)> {
        self.slot.handler.as_deref_mut()
    }

    pub fn take(&mut self) -> Option<Box<dyn MenuHandler<S>>> {
        self.slot.handler.take()
    }

    pub fn put(&mut self, handler: Box<dyn MenuHandler<S>>) {
        debug_assert!(self.slot.handler.is_none(), "previous handler must be closed first");
        self.slot.handler = Some(handler);
    }
}

impl<S: ?Sized, H: Host + ?Sized> Drop for SlotGuard<'_, S, H> {
    fn drop(&mut self) {
        self.slot.sync(&mut *self.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::button::Button;
    use crate::overlay::error::HandlerResult;
    use crate::overlay::handler::InputOutcome;
    use crate::overlay::screen::Screen;

    struct Idle;

    impl MenuHandler<()> for Idle {
        fn name(&self) -> &'static str {
            "idle"
        }
        fn open(&mut self, _screen: &dyn Screen) -> HandlerResult {
            Ok(())
        }
        fn close(&mut self) -> HandlerResult {
            Ok(())
        }
        fn draw(&mut self, _surface: &mut ()) -> HandlerResult {
            Ok(())
        }
        fn handle_input(&mut self, _button: Button) -> HandlerResult<InputOutcome> {
            Ok(InputOutcome::NotHandled)
        }
        fn close_split_menu(&mut self) {}
        fn is_correct_menu_type(&self, _screen: &dyn Screen) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct CountingHost {
        added: usize,
        removed: usize,
        listening: Listeners,
    }

    impl Host for CountingHost {
        fn suppress(&mut self, _button: Button) {}

        fn add_listeners(&mut self, listeners: Listeners) {
            self.added += 1;
            self.listening.insert(listeners);
        }

        fn remove_listeners(&mut self, listeners: Listeners) {
            self.removed += 1;
            self.listening.remove(listeners);
        }
    }

    #[test]
    fn test_subscribe_is_idempotent() {
        let mut host = CountingHost::default();
        let mut subscription = Subscription::new();

        assert!(subscription.subscribe(&mut host));
        assert!(!subscription.subscribe(&mut host));
        assert!(!subscription.subscribe(&mut host));

        assert_eq!(host.added, 1);
        assert!(subscription.is_subscribed());
        assert_eq!(host.listening, Subscription::LISTENERS);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut host = CountingHost::default();
        let mut subscription = Subscription::new();

        assert!(!subscription.unsubscribe(&mut host));
        subscription.subscribe(&mut host);
        assert!(subscription.unsubscribe(&mut host));
        assert!(!subscription.unsubscribe(&mut host));

        assert_eq!(host.added, 1);
        assert_eq!(host.removed, 1);
        assert!(host.listening.is_empty());
    }

    #[test]
    fn test_empty_slot_guard_leaves_listeners_off() {
        let mut host = CountingHost::default();
        let mut slot = ActiveSlot::<()>::new();

        {
            let mut guard = slot.lock(&mut host);
            assert!(guard.take().is_none());
        }

        assert!(!slot.is_subscribed());
        assert_eq!(host.added, 0);
        assert_eq!(host.removed, 0);
    }

    #[test]
    fn test_guard_syncs_listeners_with_slot() {
        let mut host = CountingHost::default();
        let mut slot = ActiveSlot::<()>::new();

        slot.lock(&mut host).put(Box::new(Idle));
        assert!(slot.is_subscribed());
        assert_eq!(slot.handler().map(|h| h.name()), Some("idle"));

        // Replacing the handler keeps the listeners registered
        {
            let mut guard = slot.lock(&mut host);
            let previous = guard.take();
            assert!(previous.is_some());
            guard.put(Box::new(Idle));
        }
        assert_eq!((host.added, host.removed), (1, 0));

        let taken = slot.lock(&mut host).take();
        assert!(taken.is_some());
        assert!(!slot.is_subscribed());
        assert_eq!(host.listening, Listeners::empty());
    }
}
