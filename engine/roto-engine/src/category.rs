//! Category definitions and the league catalog
//!
//! The set of categories is fixed for the life of the engine: defined once at
//! startup (either the standard basketball nine or a catalog loaded from
//! TOML), read-only thereafter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

use crate::error::{Result, RotoError};

/// One statistical category tracked per team per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Stable key used in stat rows and result maps, e.g. "fg_pct".
    pub key: String,
    /// Display label, e.g. "FG%".
    pub label: String,
    /// Sort direction when ranking: true for "more is better" (points,
    /// rebounds), false for "fewer is better" (turnovers).
    pub higher_is_better: bool,
}

impl CategoryDef {
    pub fn new(key: &str, label: &str, higher_is_better: bool) -> Self {
        Self { key: key.to_string(), label: label.to_string(), higher_is_better }
    }
}

/// The ordered, validated set of categories the engine ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<CategoryDef>,
}

impl CategoryCatalog {
    /// Build a catalog from explicit definitions. Fails on an empty list or
    /// duplicate keys.
    pub fn new(categories: Vec<CategoryDef>) -> Result<Self> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The standard nine-category basketball catalog. Turnovers is the only
    /// category where fewer is better.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                CategoryDef::new("fg_pct", "FG%", true),
                CategoryDef::new("ft_pct", "FT%", true),
                CategoryDef::new("three_ptm", "3PTM", true),
                CategoryDef::new("pts", "PTS", true),
                CategoryDef::new("reb", "REB", true),
                CategoryDef::new("ast", "AST", true),
                CategoryDef::new("st", "ST", true),
                CategoryDef::new("blk", "BLK", true),
                CategoryDef::new("turnovers", "TO", false),
            ],
        }
    }

    /// Load a catalog from TOML configuration supplied at startup:
    ///
    /// ```toml
    /// [[categories]]
    /// key = "pts"
    /// label = "PTS"
    /// higher_is_better = true
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        info!(categories = catalog.len(), "loaded category catalog");
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(RotoError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for def in &self.categories {
            if !seen.insert(def.key.as_str()) {
                return Err(RotoError::DuplicateCategory(def.key.clone()));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDef> {
        self.categories.iter()
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|d| d.key == key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
