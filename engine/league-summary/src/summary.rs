//! Weekly min/max/avg aggregation over categories and total scores

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use roto_engine::{RotoScorer, StatRow, Week, WeekId};

/// Min, max, and mean over the valid values a week produced for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl MetricSummary {
    /// Aggregate a set of values. `None` when there is nothing to aggregate,
    /// never a zero-filled summary.
    fn over(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for v in values {
            min = min.min(*v);
            max = max.max(*v);
            sum += v;
        }
        Some(Self { min, max, avg: sum / values.len() as f64 })
    }
}

/// League-wide benchmarks for one week: one summary per category (over raw
/// submitted values) plus one over total scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueWeekSummary {
    pub week: Week,
    /// Category key -> summary; `None` where no team submitted a valid value.
    pub categories: HashMap<String, Option<MetricSummary>>,
    /// Summary over weekly total scores, `None` for a week with no rows.
    pub total: Option<MetricSummary>,
}

/// Aggregate one week's rows into league benchmarks.
pub fn summarize_week(scorer: &RotoScorer, week: Week, rows: &[StatRow]) -> LeagueWeekSummary {
    let mut categories = HashMap::with_capacity(scorer.config().catalog.len());
    for def in scorer.config().catalog.iter() {
        let values: Vec<f64> = rows.iter().filter_map(|r| r.value(&def.key)).collect();
        categories.insert(def.key.clone(), MetricSummary::over(&values));
    }

    let totals: Vec<f64> = scorer
        .compute_week_ranking(rows)
        .values()
        .map(|r| r.total_score as f64)
        .collect();
    let total = MetricSummary::over(&totals);

    debug!(week = week.number, teams = rows.len(), "summarized league week");

    LeagueWeekSummary { week, categories, total }
}

/// Aggregate a run of weeks, in the supplied order, one summary per week.
pub fn summarize_weeks(
    scorer: &RotoScorer,
    weeks: &[Week],
    stats_by_week: &HashMap<WeekId, Vec<StatRow>>,
) -> Vec<LeagueWeekSummary> {
    weeks
        .iter()
        .map(|week| {
            let rows = stats_by_week.get(&week.id).map(Vec::as_slice).unwrap_or(&[]);
            summarize_week(scorer, *week, rows)
        })
        .collect()
}
