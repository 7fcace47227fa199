//! Configuration management for OBS Setup Presets.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use preset_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/presets.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Start in: {}", config.settings().browse.default_category);
//!
//! // Modify a setting
//! config.settings_mut().display.compact = true;
//!
//! // Save just the display section atomically
//! config.update_section(ConfigSection::Display).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigNotice, ConfigResult};
pub use settings::{BrowseSettings, ConfigSection, DisplaySettings, LoggingSettings, Settings};
