//! Which demo screens get a split-stack handler

use crate::overlay::{Collaborator, CollaboratorTable, HandlerRegistry, ScreenKey};

use super::screens::{
    ADDON_CHEST_NAME, AddonScreen, ChestScreen, CraftingScreen, InventoryScreen, ShopScreen,
};
use super::split_menu::{OverlayFrame, StackSplitHandler};

/// Id of the optional chests add-on
pub const CHESTS_ANYWHERE: &str = "chests-anywhere";

/// Registry with the core screen mapping
pub fn default_registry() -> HandlerRegistry<OverlayFrame> {
    let mut registry = HandlerRegistry::new();
    registry.register_fn(
        ScreenKey::of::<InventoryScreen>(),
        StackSplitHandler::<InventoryScreen>::factory,
    );
    registry.register_fn(
        ScreenKey::of::<ShopScreen>(),
        StackSplitHandler::<ShopScreen>::factory,
    );
    registry.register_fn(
        ScreenKey::of::<ChestScreen>(),
        StackSplitHandler::<ChestScreen>::factory,
    );
    registry.register_fn(
        ScreenKey::of::<CraftingScreen>(),
        StackSplitHandler::<CraftingScreen>::factory,
    );
    registry
}

/// Optional add-ons whose screens are intercepted when they are loaded
pub fn collaborators() -> CollaboratorTable<OverlayFrame> {
    CollaboratorTable::new().with(Collaborator::new(CHESTS_ANYWHERE).handles(
        ScreenKey::named(ADDON_CHEST_NAME),
        StackSplitHandler::<AddonScreen>::factory,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::{ScreenKind, TitleScreen};

    #[test]
    fn test_core_screens_are_mapped() {
        let registry = default_registry();
        assert_eq!(registry.len(), 4);

        for kind in [
            ScreenKind::Inventory,
            ScreenKind::Shop,
            ScreenKind::Chest,
            ScreenKind::Crafting,
        ] {
            let screen = kind.build();
            assert!(
                registry.lookup(screen.as_ref()).is_some(),
                "{:?} should be mapped",
                kind
            );
        }
        assert!(!registry.contains(&ScreenKey::of::<TitleScreen>()));
    }

    #[test]
    fn test_addon_screen_needs_its_collaborator() {
        let mut registry = default_registry();
        let addon = ScreenKind::AddonChest.build();
        assert!(registry.lookup(addon.as_ref()).is_none());

        let loaded = [CHESTS_ANYWHERE];
        let registered = collaborators().register_loaded(&loaded[..], &mut registry);
        assert_eq!(registered, 1);

        let handler = registry.create(addon.as_ref()).expect("add-on screen mapped by name");
        assert!(handler.is_correct_menu_type(addon.as_ref()));
    }
}
