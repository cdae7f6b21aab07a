//! Main application handler for the demo host

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::host::DemoHost;
use super::mapping::{collaborators, default_registry};
use super::screens::{ScreenKind, Screens};
use super::split_menu::OverlayFrame;
use super::window::{title_text, window_attributes_from_config};
use crate::config::AppConfig;
use crate::overlay::{Button, Coordinator, KeyCode, Listeners, MouseButton, OverlayResult};

/// Demo host application driving the overlay coordinator
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    screens: Screens,
    host: DemoHost,
    coordinator: Coordinator<OverlayFrame>,
    tick_period: Duration,
    last_update: Option<Instant>,
    tick_accumulator: Duration,
    last_title: String,
}

impl App {
    /// Creates a new demo application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting demo host");
        info!(overlay = ?config.overlay, "Overlay configuration");

        let coordinator = Coordinator::new(default_registry())
            .with_clock_modulus(config.overlay.clock_modulus)
            .with_collaborators(collaborators());
        let tick_period = Duration::from_secs_f64(1.0 / config.overlay.tick_rate_hz);

        Self {
            config,
            window: None,
            screens: Screens::new(),
            host: DemoHost::new(),
            coordinator,
            tick_period,
            last_update: None,
            tick_accumulator: Duration::ZERO,
            last_title: String::new(),
        }
    }

    /// Creates a new demo application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    /// Read access to the coordinator
    pub fn coordinator(&self) -> &Coordinator<OverlayFrame> {
        &self.coordinator
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl App {
    /// Shows `kind` (or closes the active screen) and notifies the coordinator
    fn show_screen(&mut self, kind: Option<ScreenKind>) -> OverlayResult {
        let change = self.screens.show(kind);
        debug!(?kind, "Host screen changed");
        self.coordinator
            .on_menu_changed(&mut self.host, change.old.as_deref(), self.screens.active())
    }

    /// Window resize: the host rebuilds its active screen after notifying
    fn resize(&mut self) -> OverlayResult {
        self.coordinator.on_window_resized();
        match self.screens.rebuild() {
            Some(change) => self.coordinator.on_menu_changed(
                &mut self.host,
                change.old.as_deref(),
                self.screens.active(),
            ),
            None => Ok(()),
        }
    }

    /// Routes a pressed button through the overlay, then to the host UI
    fn press(&mut self, button: Button) -> OverlayResult {
        if self.host.listens(Listeners::BUTTON_PRESSED) {
            self.coordinator.on_button_pressed(&mut self.host, button)?;
        }
        if self.host.take_suppressed(button) {
            return Ok(());
        }
        self.host_button(button)
    }

    /// The host's own handling of buttons the overlay let through
    fn host_button(&mut self, button: Button) -> OverlayResult {
        let Button::Key(key) = button else {
            return Ok(());
        };
        let active = self.screens.active_kind();

        match key {
            KeyCode::E if active == Some(ScreenKind::Inventory) => self.show_screen(None),
            KeyCode::E => self.show_screen(Some(ScreenKind::Inventory)),
            KeyCode::S => self.show_screen(Some(ScreenKind::Shop)),
            KeyCode::C => self.show_screen(Some(ScreenKind::Chest)),
            KeyCode::K => self.show_screen(Some(ScreenKind::AddonChest)),
            KeyCode::Tab => self.show_screen(Some(ScreenKind::Crafting)),
            KeyCode::T => {
                // Returning to the title also resizes the window
                self.coordinator.on_window_resized();
                self.show_screen(Some(ScreenKind::Title))
            }
            KeyCode::Escape if active.is_some() => self.show_screen(None),
            _ => Ok(()),
        }
    }

    /// Runs all update ticks that are due
    fn tick(&mut self) -> OverlayResult {
        let now = Instant::now();
        let elapsed = self
            .last_update
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_update = Some(now);
        self.tick_accumulator += elapsed;

        while self.tick_accumulator >= self.tick_period {
            self.tick_accumulator -= self.tick_period;
            self.coordinator
                .on_update_ticked(&mut self.host, self.screens.active())?;
        }
        Ok(())
    }

    /// Draws the overlay into the window title
    fn render(&mut self) -> OverlayResult {
        let mut frame = OverlayFrame::new();
        if self.host.listens(Listeners::RENDERED) {
            self.coordinator.on_rendered(&mut frame)?;
        }
        self.host.end_frame();

        let screen = self.screens.active().map(|screen| screen.display_name());
        let title = title_text(&self.config.window.title, screen.as_deref(), &frame.text());
        if title != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.last_title = title;
        }
        Ok(())
    }

    /// Handler failures are fatal to the demo host
    fn check(&self, event_loop: &ActiveEventLoop, result: OverlayResult) {
        if let Err(e) = result {
            let cause = std::error::Error::source(&e)
                .map(|source| source.to_string())
                .unwrap_or_default();
            error!(
                error = %e,
                %cause,
                handler = e.handler(),
                "Overlay handler failed, exiting"
            );
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.window = Some(Arc::new(window));
                self.last_update = Some(Instant::now());

                let registered = self
                    .coordinator
                    .on_game_launched(self.config.overlay.collaborators.as_slice());
                info!(
                    registered,
                    handlers = self.coordinator.registry().len(),
                    "Host launched"
                );
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.tick();
        self.check(event_loop, result);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let result = match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
                Ok(())
            }
            WindowEvent::Resized(_) => self.resize(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(code) => self.press(Button::Key(KeyCode::from(code))),
                    PhysicalKey::Unidentified(_) => Ok(()),
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => match MouseButton::from_winit(button) {
                Some(button) => self.press(Button::Mouse(button)),
                None => Ok(()),
            },
            WindowEvent::RedrawRequested => self.render(),
            _ => Ok(()),
        };
        self.check(event_loop, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OverlayConfig, WindowConfig};
    use crate::overlay::CoordinatorState;

    fn app() -> App {
        App::new(AppConfig {
            profile: "test".to_string(),
            window: WindowConfig::default(),
            overlay: OverlayConfig::default(),
        })
    }

    #[test]
    fn test_inventory_key_opens_intercepted_screen() {
        let mut app = app();
        app.press(Button::Key(KeyCode::E)).unwrap();

        assert_eq!(app.screens.active_kind(), Some(ScreenKind::Inventory));
        assert_eq!(app.coordinator().state(), CoordinatorState::Active);
        assert!(app.host.listens(Listeners::all()));
    }

    #[test]
    fn test_escape_with_split_menu_closes_both() {
        let mut app = app();
        app.press(Button::Key(KeyCode::S)).unwrap();
        app.press(Button::Mouse(MouseButton::Right)).unwrap();
        app.press(Button::Key(KeyCode::Num5)).unwrap();

        // cancel is not suppressed: the host closes the shop as well
        app.press(Button::Key(KeyCode::Escape)).unwrap();
        assert_eq!(app.screens.active_kind(), None);
        assert_eq!(app.coordinator().state(), CoordinatorState::Idle);
        assert!(!app.host.listens(Listeners::BUTTON_PRESSED));
    }

    #[test]
    fn test_digit_typed_into_split_menu_does_not_reach_host() {
        let mut app = app();
        app.press(Button::Key(KeyCode::C)).unwrap();
        app.press(Button::Mouse(MouseButton::Right)).unwrap();

        // the suppressed digit never reaches the host
        app.press(Button::Key(KeyCode::Num1)).unwrap();
        assert_eq!(app.screens.active_kind(), Some(ScreenKind::Chest));
        assert!(!app.host.take_suppressed(Button::Key(KeyCode::Num1)));
    }

    #[test]
    fn test_resize_refreshes_handler_on_next_tick() {
        let mut app = app();
        app.press(Button::Key(KeyCode::E)).unwrap();
        app.resize().unwrap();
        assert!(app.coordinator().pending_resize().is_some());

        app.coordinator
            .on_update_ticked(&mut app.host, app.screens.active())
            .unwrap();
        assert!(app.coordinator().pending_resize().is_none());
        assert_eq!(app.coordinator().state(), CoordinatorState::Active);
    }

    #[test]
    fn test_return_to_title_drops_handler_on_next_tick() {
        let mut app = app();
        app.press(Button::Key(KeyCode::E)).unwrap();
        app.press(Button::Key(KeyCode::T)).unwrap();

        // the unrecognized title screen leaves the handler attached...
        assert_eq!(app.coordinator().state(), CoordinatorState::Active);

        // ...until the deferred resize finds the wrong screen type
        app.coordinator
            .on_update_ticked(&mut app.host, app.screens.active())
            .unwrap();
        assert_eq!(app.coordinator().state(), CoordinatorState::Idle);
        assert!(!app.host.listens(Listeners::RENDERED));
    }
}
