//! Demo host application
//!
//! A winit window standing in for the host UI: it owns the active screen,
//! forwards lifecycle notifications to the coordinator and shows the overlay
//! in the window title.

mod host;
mod mapping;
mod runner;
mod screens;
mod split_menu;
mod window;

pub use host::DemoHost;
pub use mapping::{CHESTS_ANYWHERE, collaborators, default_registry};
pub use runner::App;
pub use screens::{
    ADDON_CHEST_NAME, AddonScreen, ChestScreen, CraftingScreen, InventoryScreen, ScreenChange,
    ScreenKind, Screens, ShopScreen, TitleScreen,
};
pub use split_menu::{OverlayFrame, StackSplitHandler};
pub use window::{title_text, window_attributes_from_config};
