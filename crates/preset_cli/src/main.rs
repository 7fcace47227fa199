//! OBS Setup Presets - Main entry point
//!
//! This is the terminal front-end for the preset catalog. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - One-shot listing, the interactive browser and settings edits

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use preset_core::catalog::Catalog;
use preset_core::config::{ConfigManager, ConfigNotice, ConfigSection};
use preset_core::logging::{init_tracing, init_tracing_with_file};
use preset_core::models::{category_labels, Category, ALL_CATEGORIES};
use preset_core::query::SearchState;

mod browse;
mod render;

/// Default config path: .config/presets.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("presets.toml")
}

#[derive(Parser)]
#[command(name = "obs-presets")]
#[command(version)]
#[command(about = "Browse ready-made OBS Studio setup templates", long_about = None)]
struct Cli {
    /// Path to the settings file
    #[arg(long, global = true, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List templates matching a search and category
    List {
        /// Case-insensitive text matched against title, description and tags
        #[arg(short, long)]
        query: Option<String>,
        /// "All" or an exact category label
        #[arg(short, long)]
        category: Option<String>,
        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show a single template
    Show {
        /// Template id
        id: u32,
        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },
    /// Print the category filter labels
    Categories,
    /// Interactive search over stdin
    Browse,
    /// Inspect or change saved settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the config path and current settings
    Show,
    /// Set the search and category a view starts with
    SetBrowse {
        /// "All" or an exact category label
        #[arg(short, long)]
        category: Option<String>,
        /// Pre-filled search text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Set card rendering options
    SetDisplay {
        /// Omit descriptions
        #[arg(long)]
        compact: Option<bool>,
        /// Show tag badges
        #[arg(long)]
        show_tags: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for log settings)
    let mut config_manager = ConfigManager::new(&cli.config);
    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let mut level = config_manager.settings().logging.level;
    for _ in 0..cli.verbose {
        level = level.more_verbose();
    }

    let _log_guard = if config_manager.settings().logging.log_to_file {
        let logs_dir = config_manager.logs_folder();
        Some(
            init_tracing_with_file(level, &logs_dir)
                .with_context(|| format!("Failed to open logs folder {}", logs_dir.display()))?,
        )
    } else {
        init_tracing(level);
        None
    };

    // Clean-ups happened before the subscriber existed
    report_config_notices(config_manager.take_notices());

    tracing::debug!("Core version: {}", preset_core::version());
    tracing::debug!("Config: {}", config_manager.path().display());

    let catalog = Catalog::builtin();
    catalog
        .validate()
        .context("Built-in catalog failed validation")?;

    run(cli.command, catalog, &mut config_manager, &mut io::stdout().lock())
}

fn report_config_notices(notices: Vec<ConfigNotice>) {
    for notice in notices {
        tracing::warn!("{}", notice);
    }
}

fn run<W: Write>(
    command: Commands,
    catalog: &Catalog,
    config: &mut ConfigManager,
    out: &mut W,
) -> Result<()> {
    let settings = config.settings().clone();

    match command {
        Commands::List {
            query,
            category,
            json,
        } => {
            let mut state = SearchState::with_category(
                category.unwrap_or_else(|| settings.browse.default_category.clone()),
            );
            state.set_query(query.unwrap_or_else(|| settings.browse.default_query.clone()));

            let results = state.results(catalog);
            tracing::info!(
                query = %state.query(),
                category = %state.selected_category(),
                "{} of {} templates matched",
                results.len(),
                catalog.len()
            );

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
            } else {
                write!(out, "{}", render::render_results(&results, &settings.display))?;
            }
        }
        Commands::Show { id, json } => {
            let template = catalog
                .get(id)
                .with_context(|| format!("No template with id {id}"))?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(template)?)?;
            } else {
                write!(out, "{}", render::render_card(template, &settings.display))?;
            }
        }
        Commands::Categories => {
            for label in category_labels() {
                writeln!(out, "{label}")?;
            }
        }
        Commands::Browse => {
            let mut state = SearchState::with_category(settings.browse.default_category.clone());
            if !settings.browse.default_query.is_empty() {
                state.set_query(settings.browse.default_query.clone());
            }

            let stdin = io::stdin();
            browse::run(catalog, state, &settings.display, stdin.lock(), out)?;
        }
        Commands::Config { command } => run_config(command, config, out)?,
    }

    Ok(())
}

fn run_config<W: Write>(
    command: ConfigCommand,
    config: &mut ConfigManager,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            writeln!(out, "{}", config.path().display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(config.settings())?)?;
        }
        ConfigCommand::SetBrowse { category, query } => {
            if let Some(category) = category {
                if category != ALL_CATEGORIES && category.parse::<Category>().is_err() {
                    bail!(
                        "Unknown category '{}', expected one of: {}",
                        category,
                        category_labels().join(", ")
                    );
                }
                config.settings_mut().browse.default_category = category;
            }
            if let Some(query) = query {
                config.settings_mut().browse.default_query = query;
            }

            config
                .update_section(ConfigSection::Browse)
                .context("Failed to save [browse] settings")?;
            writeln!(out, "Saved [browse] to {}", config.path().display())?;
        }
        ConfigCommand::SetDisplay { compact, show_tags } => {
            if let Some(compact) = compact {
                config.settings_mut().display.compact = compact;
            }
            if let Some(show_tags) = show_tags {
                config.settings_mut().display.show_tags = show_tags;
            }

            config
                .update_section(ConfigSection::Display)
                .context("Failed to save [display] settings")?;
            writeln!(out, "Saved [display] to {}", config.path().display())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use clap::CommandFactory;
    use tempfile::{tempdir, TempDir};

    fn manager() -> (TempDir, ConfigManager) {
        let dir = tempdir().unwrap();
        let mut config = ConfigManager::new(dir.path().join("presets.toml"));
        config.load_or_create().unwrap();
        (dir, config)
    }

    fn run_to_string(command: Commands, config: &mut ConfigManager) -> String {
        let mut out = Vec::new();
        run(command, Catalog::builtin(), config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn list(query: Option<&str>, category: Option<&str>, json: bool) -> Commands {
        Commands::List {
            query: query.map(str::to_string),
            category: category.map(str::to_string),
            json,
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_arguments() {
        let cli = Cli::parse_from(["obs-presets", "list", "-q", "4k", "-c", "All", "--json"]);
        assert_eq!(cli.config, default_config_path());
        match cli.command {
            Commands::List {
                query,
                category,
                json,
            } => {
                assert_eq!(query.as_deref(), Some("4k"));
                assert_eq!(category.as_deref(), Some("All"));
                assert!(json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["obs-presets", "show", "6", "-vv", "--config", "x.toml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Show { id: 6, json: false }));
    }

    #[test]
    fn show_unknown_id_fails() {
        let (_dir, mut config) = manager();
        let err = run(
            Commands::Show { id: 42, json: false },
            Catalog::builtin(),
            &mut config,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn list_json_returns_filtered_sequence() {
        let (_dir, mut config) = manager();
        let out = run_to_string(list(Some("4k"), Some("All"), true), &mut config);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 6);
        assert_eq!(items[0]["category"], "Recording");
    }

    #[test]
    fn list_json_keeps_catalog_order() {
        let (_dir, mut config) = manager();
        let out = run_to_string(list(None, Some("Streaming"), true), &mut config);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let ids: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn list_falls_back_to_browse_settings() {
        let (_dir, mut config) = manager();
        config.settings_mut().browse.default_category = "Streaming".to_string();
        config.settings_mut().browse.default_query = "gaming".to_string();

        let out = run_to_string(list(None, None, false), &mut config);
        assert!(out.contains("Streaming 1080p Twitch"));
        assert!(out.contains("YouTube Gaming 1440p"));
        assert!(!out.contains("Gameplay Recording"));
        assert!(!out.contains("Low-End PC Stream"));
    }

    #[test]
    fn list_arguments_override_browse_settings() {
        let (_dir, mut config) = manager();
        config.settings_mut().browse.default_category = "Podcast".to_string();

        let out = run_to_string(list(Some("4k"), Some("All"), false), &mut config);
        assert!(out.contains("YouTube 4K Recording"));
        assert!(!out.contains("Podcast / Webinar"));
    }

    #[test]
    fn list_without_matches_prints_empty_state() {
        let (_dir, mut config) = manager();
        let out = run_to_string(list(Some("нет такого"), None, false), &mut config);
        assert!(out.contains(render::EMPTY_TITLE));
    }

    #[test]
    fn categories_lists_all_first() {
        let (_dir, mut config) = manager();
        let out = run_to_string(Commands::Categories, &mut config);
        assert_eq!(out, "All\nStreaming\nRecording\nPodcast\n");
    }

    #[test]
    fn set_browse_persists_section() {
        let (_dir, mut config) = manager();
        let command = Commands::Config {
            command: ConfigCommand::SetBrowse {
                category: Some("Recording".to_string()),
                query: Some("youtube".to_string()),
            },
        };
        run_to_string(command, &mut config);

        let mut reloaded = ConfigManager::new(config.path());
        reloaded.load_or_create().unwrap();
        assert_eq!(reloaded.settings().browse.default_category, "Recording");
        assert_eq!(reloaded.settings().browse.default_query, "youtube");

        let out = run_to_string(list(None, None, false), &mut reloaded);
        assert!(out.contains("YouTube 4K Recording"));
        assert!(!out.contains("YouTube Gaming 1440p"));
    }

    #[test]
    fn set_browse_rejects_unknown_category() {
        let (_dir, mut config) = manager();
        let command = Commands::Config {
            command: ConfigCommand::SetBrowse {
                category: Some("Music".to_string()),
                query: None,
            },
        };
        let err = run(command, Catalog::builtin(), &mut config, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Music"));
        assert_eq!(config.settings().browse.default_category, "All");
    }

    #[test]
    fn set_display_persists_section() {
        let (_dir, mut config) = manager();
        let command = Commands::Config {
            command: ConfigCommand::SetDisplay {
                compact: Some(true),
                show_tags: None,
            },
        };
        run_to_string(command, &mut config);

        let mut reloaded = ConfigManager::new(config.path());
        reloaded.load_or_create().unwrap();
        assert!(reloaded.settings().display.compact);
        assert!(reloaded.settings().display.show_tags);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn config_cleanups_are_logged_as_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        std::fs::write(
            &path,
            "[legacy]\nvalue = 1\n\n[browse]\ndefault_category = \"Music\"\n",
        )
        .unwrap();

        let mut config = ConfigManager::new(&path);
        config.load_or_create().unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            report_config_notices(config.take_notices());
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Dropping unknown config section 'legacy'"));
        assert!(logs.contains("Unknown default_category 'Music', falling back to 'All'"));
        assert!(logs.contains("Rewrote cleaned config"));
    }
}
