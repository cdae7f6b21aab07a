//! Host screens and the keys used to look up their handlers

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A host UI screen (what the host calls a "menu")
///
/// The overlay only ever needs a screen's type identity and its display
/// name; handlers that need more downcast through [`Screen::as_any`].
pub trait Screen: Any {
    /// Runtime type of this screen
    ///
    /// Implementations return `ScreenType::of::<Self>()`.
    fn screen_type(&self) -> ScreenType;

    /// Display name, used as the fallback lookup key
    ///
    /// Some screens share a type and are only told apart by a name built at
    /// runtime.
    fn display_name(&self) -> String;

    /// Downcast to concrete type for handler-specific access
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Type identity of a screen
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for logs.
#[derive(Clone, Copy)]
pub struct ScreenType {
    id: TypeId,
    name: &'static str,
}

impl ScreenType {
    /// Type key for the screen type `T`
    pub fn of<T: Screen>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for ScreenType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ScreenType {}

impl Hash for ScreenType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Key a handler factory is registered under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScreenKey {
    /// Exact screen type
    Type(ScreenType),
    /// Screen display name
    Name(String),
}

impl ScreenKey {
    /// Type key for the screen type `T`
    pub fn of<T: Screen>() -> Self {
        ScreenKey::Type(ScreenType::of::<T>())
    }

    /// Name key
    pub fn named(name: impl Into<String>) -> Self {
        ScreenKey::Name(name.into())
    }
}

impl From<ScreenType> for ScreenKey {
    fn from(screen_type: ScreenType) -> Self {
        ScreenKey::Type(screen_type)
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKey::Type(screen_type) => write!(f, "{}", screen_type),
            ScreenKey::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// Returns true if both screens are present and share a type
pub fn same_type(a: Option<&dyn Screen>, b: Option<&dyn Screen>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.screen_type() == b.screen_type(),
        _ => false,
    }
}
