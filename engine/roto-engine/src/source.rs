//! Stat source seam
//!
//! Persistent storage is an external collaborator; the engine only needs a
//! way to ask for one week's rows. Storage may return teams with no
//! submitted stats either as rows full of nulls or by omitting them - the
//! engine's value filter treats both the same.

use std::collections::HashMap;

use crate::error::{Result, RotoError};
use crate::types::{StatRow, WeekId};

/// Read interface the engine consumes from the storage collaborator.
pub trait StatSource {
    fn fetch_stats_for_week(&self, week_id: WeekId) -> Result<Vec<StatRow>>;
}

/// In-memory stat source, used by tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatSource {
    weeks: HashMap<WeekId, Vec<StatRow>>,
}

impl MemoryStatSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_week(&mut self, week_id: WeekId, rows: Vec<StatRow>) {
        self.weeks.insert(week_id, rows);
    }
}

impl StatSource for MemoryStatSource {
    fn fetch_stats_for_week(&self, week_id: WeekId) -> Result<Vec<StatRow>> {
        self.weeks
            .get(&week_id)
            .cloned()
            .ok_or(RotoError::WeekNotFound(week_id))
    }
}
