//! Split-stack overlay coordination
//!
//! Keeps one overlay handler attached to whichever host screen is active:
//! - Looks up a handler for each new screen (by type, then display name)
//! - Closes the previous handler before opening the next one
//! - Defers resize handling to the following tick, when the host has
//!   rebuilt its screen
//! - Arbitrates pressed buttons between the overlay and the host UI
//!
//! # Architecture
//!
//! ```text
//! Host events → Coordinator ──lookup──→ HandlerRegistry
//!                   │                         ↑
//!                   │               CollaboratorTable (startup)
//!                   ↓
//!              MenuHandler (open / update / draw / handle_input / close)
//!                   ↓
//!              Host (suppress, listeners)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = HandlerRegistry::new();
//! registry.register_fn(ScreenKey::of::<ShopScreen>(), || Box::new(ShopHandler::default()));
//! let mut coordinator = Coordinator::new(registry);
//!
//! // Host callbacks
//! coordinator.on_menu_changed(&mut host, old, new)?;
//! coordinator.on_window_resized();
//! coordinator.on_update_ticked(&mut host, active_screen)?;
//! coordinator.on_rendered(&mut frame)?;
//! coordinator.on_button_pressed(&mut host, button)?;
//! ```

mod button;
mod clock;
mod collaborators;
mod coordinator;
mod error;
mod handler;
mod host;
mod registry;
mod screen;
mod subscription;

// Re-export public API
pub use button::{Button, KeyCode, MouseButton};
pub use clock::{FrameClock, PendingResize};
pub use collaborators::{Collaborator, CollaboratorTable};
pub use coordinator::{Coordinator, CoordinatorState};
pub use error::{HandlerError, HandlerResult, OverlayError, OverlayResult};
pub use handler::{InputOutcome, MenuHandler};
pub use host::{CollaboratorRegistry, Host, Listeners};
pub use registry::{HandlerFactory, HandlerRegistry};
pub use screen::{Screen, ScreenKey, ScreenType, same_type};
pub use subscription::Subscription;
