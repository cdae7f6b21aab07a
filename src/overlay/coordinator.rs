//! Routes host UI lifecycle events to the handler of the active screen

use tracing::{debug, info, trace};

use super::button::Button;
use super::clock::{FrameClock, PendingResize};
use super::collaborators::CollaboratorTable;
use super::error::{OverlayError, OverlayResult};
use super::handler::{InputOutcome, MenuHandler};
use super::host::{CollaboratorRegistry, Host};
use super::registry::HandlerRegistry;
use super::screen::{Screen, same_type};
use super::subscription::ActiveSlot;

/// Whether a handler is attached to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    /// No handler; high-frequency listeners released
    Idle,
    /// A handler is open and the listeners are registered
    Active,
}

/// Event-driven coordinator owning the active menu handler
///
/// The host calls one `on_*` method per notification, on its main thread,
/// in the order it raises them (update before render each frame). After
/// every call the listeners are registered iff a handler is active, even
/// when the call returns an error.
pub struct Coordinator<S: ?Sized> {
    registry: HandlerRegistry<S>,
    collaborators: CollaboratorTable<S>,
    slot: ActiveSlot<S>,
    clock: FrameClock,
    resize: PendingResize,
    launched: bool,
}

impl<S: ?Sized> Coordinator<S> {
    /// Creates an idle coordinator using `registry` for handler lookups
    pub fn new(registry: HandlerRegistry<S>) -> Self {
        Self {
            registry,
            collaborators: CollaboratorTable::new(),
            slot: ActiveSlot::new(),
            clock: FrameClock::default(),
            resize: PendingResize::default(),
            launched: false,
        }
    }

    /// Sets the number of distinct frame clock values
    pub fn with_clock_modulus(mut self, modulus: u32) -> Self {
        self.clock = FrameClock::new(modulus);
        self
    }

    /// Sets the collaborators consulted by [`Coordinator::on_game_launched`]
    pub fn with_collaborators(mut self, collaborators: CollaboratorTable<S>) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// A screen was opened, closed or replaced
    ///
    /// `new` is `None` when the screen closed.
    pub fn on_menu_changed<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        old: Option<&dyn Screen>,
        new: Option<&dyn Screen>,
    ) -> OverlayResult {
        let Some(new) = new else {
            let mut slot = self.slot.lock(host);
            if let Some(mut handler) = slot.take() {
                trace!(handler = handler.name(), "Screen closed, closing handler");
                close_handler::<S, _>(handler.as_mut())?;
            }
            return Ok(());
        };

        // The host re-announces the same screen after a resize
        if self.resize.take_flag() && same_type(old, Some(new)) {
            debug!(screen = %new.display_name(), "Ignoring screen change caused by resize");
            return Ok(());
        }

        trace!(
            from = ?old.map(|screen| screen.display_name()),
            to = %new.display_name(),
            "Screen changed"
        );
        let Some(mut handler) = self.registry.create(new) else {
            trace!(screen = %new.display_name(), "No handler registered");
            return Ok(());
        };
        info!(screen = %new.display_name(), handler = handler.name(), "Screen intercepted");

        let mut slot = self.slot.lock(host);
        if let Some(mut previous) = slot.take() {
            close_handler::<S, _>(previous.as_mut())?;
        }
        open_handler::<S, _>(handler.as_mut(), new)?;
        slot.put(handler);
        Ok(())
    }

    /// The host window was resized
    ///
    /// The host may not have rebuilt its screen yet, so the handler is
    /// refreshed on the next tick instead of here.
    pub fn on_window_resized(&mut self) {
        self.resize.record(self.clock.current());
        trace!(tick = self.clock.current(), "Window resized, refresh deferred");
    }

    /// One iteration of the host's fixed-rate update loop
    ///
    /// `active` is the screen the host considers active after this tick's
    /// state update.
    pub fn on_update_ticked<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        active: Option<&dyn Screen>,
    ) -> OverlayResult {
        let now = self.clock.advance();
        let mut slot = self.slot.lock(host);

        if let Some(resized_on) = self.resize.take_due(now) {
            if let Some(mut handler) = slot.take() {
                close_handler::<S, _>(handler.as_mut())?;

                // Leaving to the title screen also resizes, after which the
                // active screen is no longer the one the handler served
                match active {
                    Some(screen) if handler.is_correct_menu_type(screen) => {
                        debug!(
                            resized_on,
                            screen = %screen.display_name(),
                            handler = handler.name(),
                            "Refreshing handler after resize"
                        );
                        open_handler::<S, _>(handler.as_mut(), screen)?;
                        slot.put(handler);
                    }
                    _ => {
                        debug!(
                            resized_on,
                            handler = handler.name(),
                            "Active screen changed during resize, dropping handler"
                        );
                    }
                }
            }
        }

        if let Some(handler) = slot.handler_mut() {
            handler.update().map_err(|source| OverlayError::Update {
                handler: handler.name(),
                source,
            })?;
        }
        Ok(())
    }

    /// The host finished drawing a frame; draw the overlay on top
    pub fn on_rendered(&mut self, surface: &mut S) -> OverlayResult {
        if let Some(handler) = self.slot.handler_mut() {
            handler.draw(surface).map_err(|source| OverlayError::Draw {
                handler: handler.name(),
                source,
            })?;
        }
        Ok(())
    }

    /// A button was pressed while the listeners were registered
    pub fn on_button_pressed<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        button: Button,
    ) -> OverlayResult {
        if !self.slot.is_subscribed() {
            return Ok(());
        }
        let Some(handler) = self.slot.handler_mut() else {
            return Ok(());
        };

        let outcome = handler.handle_input(button).map_err(|source| OverlayError::Input {
            handler: handler.name(),
            source,
        })?;
        trace!(?button, ?outcome, "Input routed");

        match outcome {
            // Cancel keys close the split menu and still reach the host
            InputOutcome::Handled if button.is_cancel() => handler.close_split_menu(),
            InputOutcome::Handled | InputOutcome::Consumed => host.suppress(button),
            InputOutcome::NotHandled if button.is_pointer_click() => {
                // Click went elsewhere, the split menu lost focus
                handler.close_split_menu();
            }
            InputOutcome::NotHandled => {}
        }
        Ok(())
    }

    /// The host finished starting; register handlers of loaded collaborators
    ///
    /// Only the first call has an effect. Returns the number of entries
    /// registered.
    pub fn on_game_launched<R: CollaboratorRegistry + ?Sized>(&mut self, loaded: &R) -> usize {
        if self.launched {
            debug!("Collaborators already registered");
            return 0;
        }
        self.launched = true;

        let registered = self.collaborators.register_loaded(loaded, &mut self.registry);
        if registered > 0 {
            info!(registered, total = self.registry.len(), "Registered collaborator screens");
        }
        registered
    }

    /// Current state of the coordinator
    pub fn state(&self) -> CoordinatorState {
        if self.slot.handler().is_some() {
            CoordinatorState::Active
        } else {
            CoordinatorState::Idle
        }
    }

    /// Returns true while the high-frequency listeners are registered
    pub fn is_subscribed(&self) -> bool {
        self.slot.is_subscribed()
    }

    /// Name of the active handler, if any
    pub fn active_handler_name(&self) -> Option<&'static str> {
        self.slot.handler().map(|handler| handler.name())
    }

    /// Current frame clock value
    pub fn clock(&self) -> u32 {
        self.clock.current()
    }

    /// Tick a deferred resize was recorded on, if one is pending
    pub fn pending_resize(&self) -> Option<u32> {
        self.resize.tick()
    }

    /// Handler registry used for lookups
    pub fn registry(&self) -> &HandlerRegistry<S> {
        &self.registry
    }

    /// Mutable access to the registry for late registrations
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry<S> {
        &mut self.registry
    }
}

fn open_handler<S, M>(handler: &mut M, screen: &dyn Screen) -> OverlayResult
where
    S: ?Sized,
    M: MenuHandler<S> + ?Sized,
{
    handler.open(screen).map_err(|source| OverlayError::Open {
        handler: handler.name(),
        screen: screen.display_name(),
        source,
    })
}

fn close_handler<S, M>(handler: &mut M) -> OverlayResult
where
    S: ?Sized,
    M: MenuHandler<S> + ?Sized,
{
    handler.close().map_err(|source| OverlayError::Close {
        handler: handler.name(),
        source,
    })
}
