//! Stack Split
//!
//! Attaches a split-stack overlay to the host's item menus. An event-driven
//! coordinator picks a handler for the active screen and keeps the host's
//! high-frequency listeners registered only while a handler is active.

/// Demo host - window, screens and the split-stack handler
pub mod app;

/// Configuration loading (files, profiles and environment)
pub mod config;

/// Screen-to-handler coordination
pub mod overlay;
