//! League summary - per-week benchmark aggregates for the trend view
//!
//! The trend chart draws a team's line against league-wide min/max/avg lines.
//! Those benchmarks are this crate's job, not the scoring engine's: it
//! aggregates raw category values per week, plus the same three metrics over
//! weekly total scores (computed via the engine).

mod summary;

pub use summary::{LeagueWeekSummary, MetricSummary, summarize_week, summarize_weeks};
