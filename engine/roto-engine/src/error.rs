//! Error types for the roto engine

use thiserror::Error;

use crate::types::WeekId;

/// Result type for roto engine operations
pub type Result<T> = std::result::Result<T, RotoError>;

/// Errors that can occur in the roto engine.
///
/// Scoring itself is infallible over caller data: missing or malformed
/// category values are excluded from ranking, never raised. Fallibility is
/// confined to configuration and the stat-source seam.
#[derive(Error, Debug)]
pub enum RotoError {
    #[error("category catalog is empty")]
    EmptyCatalog,

    #[error("duplicate category key: {0}")]
    DuplicateCategory(String),

    #[error("failed to parse category catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("week not found: {0}")]
    WeekNotFound(WeekId),

    #[error("stat source error: {0}")]
    Source(String),
}

impl From<String> for RotoError {
    fn from(err: String) -> Self {
        RotoError::Source(err)
    }
}
