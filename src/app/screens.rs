//! Screens of the demo host

use std::any::Any;

use crate::overlay::{Screen, ScreenType};

/// Display name of the screen contributed by the chests add-on
pub const ADDON_CHEST_NAME: &str = "Chests Anywhere";

/// Title/start screen, never intercepted
pub struct TitleScreen;

/// Player inventory
pub struct InventoryScreen;

/// Shop run by a named shopkeeper
pub struct ShopScreen {
    pub shopkeeper: String,
}

/// Storage chest
pub struct ChestScreen {
    pub label: String,
}

/// Crafting page
pub struct CraftingScreen;

/// Screen built by an add-on; only its display name tells it apart
pub struct AddonScreen {
    pub name: String,
}

macro_rules! impl_screen {
    ($ty:ty, |$this:ident| $name:expr) => {
        impl Screen for $ty {
            fn screen_type(&self) -> ScreenType {
                ScreenType::of::<Self>()
            }

            fn display_name(&self) -> String {
                let $this = self;
                $name
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

impl_screen!(TitleScreen, |_this| "Title".to_string());
impl_screen!(InventoryScreen, |_this| "Inventory".to_string());
impl_screen!(ShopScreen, |this| format!("Shop ({})", this.shopkeeper));
impl_screen!(ChestScreen, |this| this.label.clone());
impl_screen!(CraftingScreen, |_this| "Crafting".to_string());
impl_screen!(AddonScreen, |this| this.name.clone());

/// Kinds of screen the demo host can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Title,
    Inventory,
    Shop,
    Chest,
    Crafting,
    AddonChest,
}

impl ScreenKind {
    /// Builds a fresh screen object of this kind
    pub fn build(self) -> Box<dyn Screen> {
        match self {
            ScreenKind::Title => Box::new(TitleScreen),
            ScreenKind::Inventory => Box::new(InventoryScreen),
            ScreenKind::Shop => Box::new(ShopScreen {
                shopkeeper: "Pierre".to_string(),
            }),
            ScreenKind::Chest => Box::new(ChestScreen {
                label: "Chest".to_string(),
            }),
            ScreenKind::Crafting => Box::new(CraftingScreen),
            ScreenKind::AddonChest => Box::new(AddonScreen {
                name: ADDON_CHEST_NAME.to_string(),
            }),
        }
    }
}

/// Result of a screen transition, holding the screen that was replaced
pub struct ScreenChange {
    pub old: Option<Box<dyn Screen>>,
}

/// The demo host's active screen
#[derive(Default)]
pub struct Screens {
    active: Option<(ScreenKind, Box<dyn Screen>)>,
}

impl Screens {
    /// Creates a host with no active screen
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen, if any
    pub fn active(&self) -> Option<&dyn Screen> {
        self.active.as_ref().map(|(_, screen)| screen.as_ref())
    }

    /// Kind of the active screen, if any
    pub fn active_kind(&self) -> Option<ScreenKind> {
        self.active.as_ref().map(|(kind, _)| *kind)
    }

    /// Shows a new screen of `kind`, or closes the active one with `None`
    pub fn show(&mut self, kind: Option<ScreenKind>) -> ScreenChange {
        let next = kind.map(|kind| (kind, kind.build()));
        let old = std::mem::replace(&mut self.active, next);
        ScreenChange {
            old: old.map(|(_, screen)| screen),
        }
    }

    /// Rebuilds the active screen, as hosts do after the window is resized
    pub fn rebuild(&mut self) -> Option<ScreenChange> {
        let kind = self.active_kind()?;
        Some(self.show(Some(kind)))
    }
}
