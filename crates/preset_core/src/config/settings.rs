//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::ALL_CATEGORIES;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Initial browsing state.
    #[serde(default)]
    pub browse: BrowseSettings,

    /// Card rendering options.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to a file in `logs_folder`.
    #[serde(default)]
    pub log_to_file: bool,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: false,
            logs_folder: default_logs_folder(),
        }
    }
}

/// Initial browsing state applied when a view starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSettings {
    /// Category selected on start ("All" or a category label).
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Search text pre-filled on start.
    #[serde(default)]
    pub default_query: String,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_query: String::new(),
        }
    }
}

/// Card rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Show tag badges under each card.
    #[serde(default = "default_true")]
    pub show_tags: bool,

    /// Omit descriptions.
    #[serde(default)]
    pub compact: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_tags: true,
            compact: false,
        }
    }
}

/// Configuration sections that can be updated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Logging,
    Browse,
    Display,
}

impl ConfigSection {
    /// All sections in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Logging,
        ConfigSection::Browse,
        ConfigSection::Display,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "logging",
            ConfigSection::Browse => "browse",
            ConfigSection::Display => "display",
        }
    }

    /// Comment written above the table.
    pub(super) fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "# Logging configuration",
            ConfigSection::Browse => "# Initial search and category selection",
            ConfigSection::Display => "# Card rendering",
        }
    }
}
