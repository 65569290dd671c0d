//! Category ranking and weekly roto scoring
//!
//! Ranks are "competition" ranks: tied values share the rank of the first
//! team in the tie group, and the next distinct value resumes at its true
//! 1-based position in the sorted order (two teams tied at 1 are followed by
//! rank 3, never rank 2 or 4).

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::category::CategoryDef;
use crate::config::{BracketBasis, ScoringConfig};
use crate::error::Result;
use crate::types::{CategoryRankResult, StatRow, TeamId, TeamWeekResult};

/// Stateless scorer over a fixed category catalog.
///
/// Every method is a pure function of its arguments: the scorer holds
/// configuration only, so calls are independent and safe to issue from any
/// number of threads at once.
#[derive(Debug, Clone)]
pub struct RotoScorer {
    cfg: ScoringConfig,
}

impl RotoScorer {
    /// Create a scorer from validated configuration.
    pub fn new(cfg: ScoringConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Scorer over the standard nine-category catalog.
    pub fn standard() -> Self {
        Self { cfg: ScoringConfig::default() }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.cfg
    }

    /// Rank one category across the week's rows.
    ///
    /// Teams without a usable value (absent, null, or non-finite) are left
    /// out of the result map entirely: no rank, no bracket score. An
    /// all-missing category yields an empty map.
    pub fn rank_category(
        &self,
        rows: &[StatRow],
        def: &CategoryDef,
    ) -> HashMap<TeamId, CategoryRankResult> {
        let mut valid: Vec<(TeamId, f64)> = rows
            .iter()
            .filter_map(|row| row.value(&def.key).map(|v| (row.team_id, v)))
            .collect();

        if valid.is_empty() {
            return HashMap::new();
        }

        // Stable sort keeps row order among exact ties, so replays are
        // deterministic. Values are finite by construction.
        if def.higher_is_better {
            valid.sort_by(|a, b| b.1.total_cmp(&a.1));
        } else {
            valid.sort_by(|a, b| a.1.total_cmp(&b.1));
        }

        let basis = match self.cfg.bracket_basis {
            BracketBasis::ValidTeams => valid.len() as u32,
            BracketBasis::WeekRoster => rows.len() as u32,
        };

        let mut results = HashMap::with_capacity(valid.len());
        let mut rank = 1u32;
        for (pos, (team_id, value)) in valid.iter().enumerate() {
            if pos > 0 && valid[pos - 1].1 != *value {
                rank = pos as u32 + 1;
            }
            results.insert(
                *team_id,
                CategoryRankResult {
                    team_id: *team_id,
                    rank,
                    bracket_score: basis - rank + 1,
                },
            );
        }

        trace!(
            category = %def.key,
            valid = valid.len(),
            roster = rows.len(),
            "ranked category"
        );

        results
    }

    /// Compute the full weekly ranking: per-category ranks, bracket-point
    /// totals, and the total rank for every team in the week.
    ///
    /// Every row's team appears in the output, including teams with no valid
    /// value anywhere (they score 0 and rank last or tied-last). An empty
    /// week yields an empty map.
    pub fn compute_week_ranking(&self, rows: &[StatRow]) -> HashMap<TeamId, TeamWeekResult> {
        if rows.is_empty() {
            return HashMap::new();
        }

        let mut per_team: HashMap<TeamId, HashMap<String, CategoryRankResult>> =
            HashMap::with_capacity(rows.len());
        for def in self.cfg.catalog.iter() {
            for (team_id, result) in self.rank_category(rows, def) {
                per_team
                    .entry(team_id)
                    .or_default()
                    .insert(def.key.clone(), result);
            }
        }

        // Totals in row order so equal scores resolve the same way on every
        // replay regardless of map iteration order.
        let mut totals: Vec<(TeamId, u32)> = rows
            .iter()
            .map(|row| {
                let total = per_team
                    .get(&row.team_id)
                    .map(|cats| cats.values().map(|c| c.bracket_score).sum())
                    .unwrap_or(0);
                (row.team_id, total)
            })
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1));

        let mut results = HashMap::with_capacity(totals.len());
        let mut rank = 1u32;
        for (pos, (team_id, total_score)) in totals.iter().enumerate() {
            if pos > 0 && totals[pos - 1].1 != *total_score {
                rank = pos as u32 + 1;
            }
            results.insert(
                *team_id,
                TeamWeekResult {
                    team_id: *team_id,
                    per_category: per_team.remove(team_id).unwrap_or_default(),
                    total_score: *total_score,
                    total_rank: rank,
                },
            );
        }

        debug!(teams = rows.len(), "computed week ranking");

        results
    }
}
