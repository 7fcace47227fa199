//! Interactive browsing loop.
//!
//! Every input line is one event: it updates the search state and the view
//! is re-rendered from scratch.

use std::io::{BufRead, Write};

use anyhow::Result;
use preset_core::catalog::Catalog;
use preset_core::config::DisplaySettings;
use preset_core::models::{category_labels, Category, ALL_CATEGORIES};
use preset_core::query::SearchState;

use crate::render::{render_category_bar, render_results};

const HELP: &str = "Type to search. Commands: :c <category>  :all  :clear  :help  :q";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Search(String),
    Category(String),
    /// `:c` with no label.
    MissingCategory,
    ClearQuery,
    Help,
    Quit,
}

fn parse_event(line: &str) -> Event {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        ":q" | ":quit" => Event::Quit,
        ":all" => Event::Category(ALL_CATEGORIES.to_string()),
        ":clear" => Event::ClearQuery,
        ":help" => Event::Help,
        ":c" => Event::MissingCategory,
        cmd => match cmd.strip_prefix(":c ") {
            Some(label) => Event::Category(label.trim().to_string()),
            None => Event::Search(line.to_string()),
        },
    }
}

/// Drive a browsing session until `:q` or end of input.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut state: SearchState,
    display: &DisplaySettings,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{HELP}")?;
    render_view(catalog, &state, display, &mut output)?;

    for line in input.lines() {
        match parse_event(&line?) {
            Event::Quit => break,
            Event::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Event::MissingCategory => {
                tracing::warn!("':c' needs a category label");
                writeln!(output, "Usage: :c <{}>", category_labels().join("|"))?;
                continue;
            }
            Event::Search(query) => state.set_query(query),
            Event::ClearQuery => state.clear_query(),
            Event::Category(label) => {
                if label != ALL_CATEGORIES && label.parse::<Category>().is_err() {
                    tracing::warn!("Unknown category '{}'", label);
                }
                state.select_category(label);
            }
        }
        render_view(catalog, &state, display, &mut output)?;
    }

    tracing::debug!("Browse session ended");
    Ok(())
}

fn render_view<W: Write>(
    catalog: &Catalog,
    state: &SearchState,
    display: &DisplaySettings,
    output: &mut W,
) -> Result<()> {
    let results = state.results(catalog);

    writeln!(output)?;
    writeln!(output, "Search: {}", state.query())?;
    writeln!(output, "{}", render_category_bar(state.selected_category()))?;
    writeln!(output)?;
    write!(output, "{}", render_results(&results, display))?;
    output.flush()?;
    Ok(())
}
