//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::category::CategoryCatalog;
use crate::error::Result;

/// Which team count the bracket score is measured against.
///
/// `bracket_score = basis - rank + 1`, so the basis decides how many points
/// first place is worth. The league's reference behavior measures against the
/// teams that actually submitted a valid value for the category; an earlier
/// revision measured against the whole week's roster, which inflates every
/// bracket score whenever a category has missing submissions. Both are kept
/// selectable; `ValidTeams` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketBasis {
    /// Count of teams with a valid value for the category.
    #[default]
    ValidTeams,
    /// Count of all rows in the week, valid or not.
    WeekRoster,
}

/// Validated scoring configuration, fixed for the life of a scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub catalog: CategoryCatalog,
    #[serde(default)]
    pub bracket_basis: BracketBasis,
}

impl ScoringConfig {
    pub fn new(catalog: CategoryCatalog, bracket_basis: BracketBasis) -> Self {
        Self { catalog, bracket_basis }
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            catalog: CategoryCatalog::standard(),
            bracket_basis: BracketBasis::default(),
        }
    }
}
