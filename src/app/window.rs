//! Window attributes and title text of the demo host

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

use crate::config::WindowConfig;

/// Smallest logical size that still leaves room for the title overlay
const MIN_WIDTH: f64 = 320.0;
const MIN_HEIGHT: f64 = 240.0;

/// Builds the demo window from configuration
///
/// The configured size is raised to the minimum so the window title, which
/// carries the overlay text, stays readable.
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let size = LogicalSize::new(config.width.max(MIN_WIDTH), config.height.max(MIN_HEIGHT));
    let fullscreen = config.fullscreen.then_some(Fullscreen::Borderless(None));

    Window::default_attributes()
        .with_title(title_text(&config.title, None, ""))
        .with_inner_size(size)
        .with_min_inner_size(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated)
        .with_fullscreen(fullscreen)
}

/// Window title showing the active screen and the overlay text
pub fn title_text(base: &str, screen: Option<&str>, overlay: &str) -> String {
    let mut title = base.to_string();
    if let Some(screen) = screen {
        title.push_str(" - ");
        title.push_str(screen);
    }
    if !overlay.is_empty() {
        title.push_str(" [");
        title.push_str(overlay);
        title.push(']');
    }
    title
}
