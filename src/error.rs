//! Error types for the NBA standings batch job

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StandingsError>;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Transport error reaching the standings API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Standings API returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{env_var} environment variable not set")]
    MissingConfig { env_var: String },

    #[error("Invalid league: {league:?}")]
    InvalidLeague { league: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Database connection failed: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Database access denied: {message}")]
    Authentication { message: String },

    #[error("Database unreachable: {message}")]
    Network { message: String },

    #[error("Database not found: {}", path.display())]
    DatabaseNotFound { path: PathBuf },

    #[error("Failed to create table: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Bulk insert failed: {message}")]
    Insert { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StandingsError {
    /// True for the failures raised while opening the database.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            StandingsError::Connection(_)
                | StandingsError::Authentication { .. }
                | StandingsError::Network { .. }
                | StandingsError::DatabaseNotFound { .. }
        )
    }
}
