use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use super::domain::{Scheme, SchemeCategory, SchemeId};

const STANDARD_CATALOG: &str = include_str!("../../data/schemes.json");

/// Number of leading catalog entries shown as the citizen's saved schemes.
const SAVED_SCHEME_COUNT: usize = 2;

/// Read-only scheme table, kept in publication order.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    /// The embedded ten-scheme demo catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_reader(STANDARD_CATALOG.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_reader(reader)?;
        Self::from_schemes(schemes)
    }

    pub fn from_schemes(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(schemes.len());
        for scheme in &schemes {
            if !seen.insert(scheme.id) {
                return Err(CatalogError::DuplicateId(scheme.id));
            }
        }
        Ok(Self { schemes })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: SchemeId) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.id == id)
    }

    /// Active schemes matching the category filter whose name or description
    /// contains the query, ignoring case.
    pub fn browse(&self, filter: &SchemeFilter) -> Vec<&Scheme> {
        let query = filter.query.to_lowercase();
        self.schemes
            .iter()
            .filter(|scheme| scheme.is_active)
            .filter(|scheme| filter.category.matches(scheme.category))
            .filter(|scheme| {
                scheme.name.to_lowercase().contains(&query)
                    || scheme.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Active schemes carrying the static `eligible` display flag.
    pub fn featured_eligible(&self) -> Vec<&Scheme> {
        self.schemes
            .iter()
            .filter(|scheme| scheme.eligible && scheme.is_active)
            .collect()
    }

    pub fn saved(&self) -> Vec<&Scheme> {
        self.schemes.iter().take(SAVED_SCHEME_COUNT).collect()
    }

    pub fn active_count(&self) -> usize {
        self.schemes.iter().filter(|scheme| scheme.is_active).count()
    }

    pub fn overview(&self) -> CatalogOverview {
        CatalogOverview {
            active_schemes: self.active_count(),
            eligible_schemes: self.featured_eligible().len(),
            saved_schemes: self.saved().len(),
            featured: self.featured_eligible().into_iter().cloned().collect(),
            saved: self.saved().into_iter().cloned().collect(),
        }
    }
}

/// Category selector used by the browse view; `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SchemeCategory),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        SchemeCategory::from_code(value).map(Self::Only)
    }

    fn matches(&self, category: SchemeCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeFilter {
    pub category: CategoryFilter,
    pub query: String,
}

/// Headline counts plus the featured and saved lists for the schemes landing view.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogOverview {
    pub active_schemes: usize,
    pub eligible_schemes: usize,
    pub saved_schemes: usize,
    pub featured: Vec<Scheme>,
    pub saved: Vec<Scheme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Filter buttons in display order, starting with "all".
pub fn category_options() -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        id: "all",
        name: "All Schemes",
    })
    .chain(SchemeCategory::ALL.iter().map(|category| CategoryOption {
        id: category.code(),
        name: category.label(),
    }))
    .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scheme catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scheme id {0} appears more than once")]
    DuplicateId(SchemeId),
}
