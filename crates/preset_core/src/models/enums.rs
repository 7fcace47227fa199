//! Category enum and the filter selector labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ModelError;

/// Selector label that lets every category through the filter.
///
/// Never attached to a template.
pub const ALL_CATEGORIES: &str = "All";

/// Coarse classification of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Live streaming to a platform.
    Streaming,
    /// Local recording for later editing.
    Recording,
    /// Voice-first content: podcasts, webinars.
    Podcast,
}

impl Category {
    /// All categories in filter-button order.
    pub const ALL: [Category; 3] = [Category::Streaming, Category::Recording, Category::Podcast];

    /// Label used for display and for exact-match filtering.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Streaming => "Streaming",
            Category::Recording => "Recording",
            Category::Podcast => "Podcast",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Parse an exact, case-sensitive label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Labels of the category filter buttons, "All" first.
pub fn category_labels() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(Category::ALL.iter().map(Category::label))
        .collect()
}
