//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::overlay::FrameClock;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, also the prefix of the overlay text
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Stack Split".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Overlay coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Number of distinct frame clock values
    pub clock_modulus: u32,
    /// Update ticks per second driven by the demo host
    pub tick_rate_hz: f64,
    /// Collaborator ids the demo host reports as loaded
    pub collaborators: Vec<String>,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            clock_modulus: FrameClock::DEFAULT_MODULUS,
            tick_rate_hz: 60.0,
            collaborators: Vec::new(),
            log_filter: "stack_split=debug".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Overlay configuration
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{profile}.toml (profile-specific overrides)
    /// 3. Environment variables with prefix STACK_SPLIT_ (e.g., STACK_SPLIT_OVERLAY__CLOCK_MODULUS=30)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            // Use __ as separator for nested fields (e.g., STACK_SPLIT_WINDOW__WIDTH)
            .add_source(
                Environment::with_prefix("STACK_SPLIT")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("overlay.collaborators")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration using the STACK_SPLIT_PROFILE environment variable,
    /// defaulting to "debug" if not set
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("STACK_SPLIT_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile)
    }

    /// Rejects values the coordinator and host loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overlay.clock_modulus < FrameClock::MIN_MODULUS {
            return Err(ConfigError::Message(format!(
                "overlay.clock_modulus must be at least {}, got {}",
                FrameClock::MIN_MODULUS,
                self.overlay.clock_modulus
            )));
        }
        if self.overlay.tick_rate_hz.is_nan() || self.overlay.tick_rate_hz <= 0.0 {
            return Err(ConfigError::Message(format!(
                "overlay.tick_rate_hz must be positive, got {}",
                self.overlay.tick_rate_hz
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("debug").unwrap_or_else(|_| Self {
            profile: "debug".to_string(),
            window: WindowConfig::default(),
            overlay: OverlayConfig::default(),
        })
    }
}
