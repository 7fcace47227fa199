//! Immutable template catalog.
//!
//! The catalog is an ordered, read-only list of templates built once per
//! process. There is no mutation API: order and contents are fixed after
//! construction.
//!
//! # Example
//!
//! ```
//! use preset_core::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 6);
//! assert_eq!(catalog.get(6).map(|t| t.title.as_str()), Some("YouTube 4K Recording"));
//! ```

mod builtin;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{ModelError, Template};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::new(builtin::templates());
    tracing::trace!(count = catalog.len(), "Built-in catalog constructed");
    catalog
});

/// Catalog invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate template id {0}")]
    DuplicateId(u32),

    #[error("Template ids must be positive")]
    InvalidId,

    #[error("Template {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Template {0} has a zero frame rate")]
    InvalidFps(u32),

    #[error("Template {id}: {source}")]
    InvalidField {
        id: u32,
        #[source]
        source: ModelError,
    },
}

/// Result type for catalog checks.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ordered, read-only sequence of templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Wrap a template list. Order is preserved as given.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by id.
    pub fn get(&self, id: u32) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Check catalog invariants, reporting the first violation.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::with_capacity(self.templates.len());

        for template in &self.templates {
            let id = template.id;
            if id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if template.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(id));
            }
            if template.fps == 0 {
                return Err(CatalogError::InvalidFps(id));
            }
            template
                .parsed_resolution()
                .map_err(|source| CatalogError::InvalidField { id, source })?;
            template
                .parsed_bitrate()
                .map_err(|source| CatalogError::InvalidField { id, source })?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
