//! Core identifiers and stat row / result types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type TeamId = i64;
pub type WeekId = i64;

/// One scoring period. `number` is the league-facing week number, `id` the
/// storage identifier the stat source keys rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: WeekId,
    pub number: u32,
}

impl Week {
    pub fn new(id: WeekId, number: u32) -> Self {
        Self { id, number }
    }

    /// Display label, e.g. "Week 3"
    pub fn label(&self) -> String {
        format!("Week {}", self.number)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.number)
    }
}

/// One team's raw measurements for one week.
///
/// An absent key and an explicit `None` both mean "no data submitted"; the
/// engine treats them identically. Rows are never mutated by the engine -
/// ranking output lives in [`TeamWeekResult`], not bolted onto the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatRow {
    pub team_id: TeamId,
    pub values: HashMap<String, Option<f64>>,
}

impl StatRow {
    /// Create an empty row (no categories submitted).
    pub fn new(team_id: TeamId) -> Self {
        Self { team_id, values: HashMap::new() }
    }

    /// Builder-style value insertion, mostly for fixtures.
    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), Some(value));
        self
    }

    /// Builder-style explicit null (submitted row, no value for the category).
    pub fn with_null(mut self, key: &str) -> Self {
        self.values.insert(key.to_string(), None);
        self
    }

    /// The usable value for a category: present, non-null, and finite.
    /// NaN and infinities are treated the same as "no data".
    pub fn value(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(Some(v)) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

/// A team's rank and bracket points in a single category for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRankResult {
    pub team_id: TeamId,
    /// 1-based competition rank among teams with a valid value.
    pub rank: u32,
    /// `basis - rank + 1`; the best rank earns the most points, the worst
    /// earns at least 1.
    pub bracket_score: u32,
}

/// Aggregate scoring output for one team in one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWeekResult {
    pub team_id: TeamId,
    /// Per-category rank results, only for categories where the team had a
    /// valid value.
    pub per_category: HashMap<String, CategoryRankResult>,
    /// Sum of bracket scores over `per_category`; zero when every category
    /// is missing.
    pub total_score: u32,
    /// 1-based competition rank of `total_score` within the week, descending.
    pub total_rank: u32,
}
