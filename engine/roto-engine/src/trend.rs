//! Multi-week trend for a single team
//!
//! Replays the weekly ranking over a caller-supplied sequence of weeks and
//! extracts one team's result per week. The trend never fabricates a row for
//! a week the team has no data in, and never revises an earlier week's result
//! based on a later one.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::scoring::RotoScorer;
use crate::source::StatSource;
use crate::types::{StatRow, TeamId, TeamWeekResult, Week, WeekId};

/// One team's scoring result for one week of its trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub week: Week,
    pub result: TeamWeekResult,
}

/// Lazy iterator over a team's weekly results, in the order the weeks were
/// supplied. Weeks where the team has no stat row are skipped. Restartable:
/// building a fresh iterator over the same inputs replays identically.
pub struct TeamTrend<'a> {
    scorer: &'a RotoScorer,
    team_id: TeamId,
    weeks: std::slice::Iter<'a, Week>,
    stats_by_week: &'a HashMap<WeekId, Vec<StatRow>>,
}

impl Iterator for TeamTrend<'_> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<TrendPoint> {
        for week in self.weeks.by_ref() {
            let Some(rows) = self.stats_by_week.get(&week.id) else {
                continue;
            };
            if !rows.iter().any(|r| r.team_id == self.team_id) {
                continue;
            }
            let mut ranking = self.scorer.compute_week_ranking(rows);
            if let Some(result) = ranking.remove(&self.team_id) {
                return Some(TrendPoint { week: *week, result });
            }
        }
        None
    }
}

impl RotoScorer {
    /// Lazily walk `team_id`'s results over `weeks` (caller-supplied
    /// chronological order), reading rows from `stats_by_week`.
    pub fn team_trend<'a>(
        &'a self,
        team_id: TeamId,
        weeks: &'a [Week],
        stats_by_week: &'a HashMap<WeekId, Vec<StatRow>>,
    ) -> TeamTrend<'a> {
        TeamTrend { scorer: self, team_id, weeks: weeks.iter(), stats_by_week }
    }

    /// Collect the whole trend at once.
    pub fn build_team_trend(
        &self,
        team_id: TeamId,
        weeks: &[Week],
        stats_by_week: &HashMap<WeekId, Vec<StatRow>>,
    ) -> Vec<TrendPoint> {
        let points: Vec<TrendPoint> = self.team_trend(team_id, weeks, stats_by_week).collect();
        debug!(
            team_id,
            weeks = weeks.len(),
            points = points.len(),
            "built team trend"
        );
        points
    }

    /// Build a trend by fetching each week's rows from a stat source. Source
    /// failures (e.g. an unknown week) propagate to the caller.
    pub fn build_team_trend_from_source<S: StatSource + ?Sized>(
        &self,
        team_id: TeamId,
        weeks: &[Week],
        source: &S,
    ) -> Result<Vec<TrendPoint>> {
        let mut stats_by_week = HashMap::with_capacity(weeks.len());
        for week in weeks {
            stats_by_week.insert(week.id, source.fetch_stats_for_week(week.id)?);
        }
        Ok(self.build_team_trend(team_id, weeks, &stats_by_week))
    }
}
