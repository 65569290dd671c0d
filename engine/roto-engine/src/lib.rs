//! Roto engine - deterministic weekly category ranking and scoring
//!
//! Consumes one week's raw stat rows, ranks every team within each statistical
//! category, converts ranks into bracket points, and sums those into a ranked
//! weekly total. Replaying the computation over a sequence of weeks produces a
//! single team's trend. The engine is a pure function of its inputs: no I/O,
//! no shared state, no dependence on prior calls.

mod category;
mod config;
mod error;
mod scoring;
mod source;
mod trend;
mod types;


pub use category::{CategoryCatalog, CategoryDef};
pub use config::{BracketBasis, ScoringConfig};
pub use error::{Result, RotoError};
pub use scoring::RotoScorer;
pub use source::{MemoryStatSource, StatSource};
pub use trend::{TeamTrend, TrendPoint};
pub use types::{CategoryRankResult, StatRow, TeamId, TeamWeekResult, Week, WeekId};
