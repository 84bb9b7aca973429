//! NBA standings batch job
//!
//! Fetches conference standings from API-NBA (RapidAPI), keeps the best teams
//! by conference rank, flattens each nested standing into a fixed row layout,
//! and appends the rows to the `top_teams` SQLite table.
//!
//! ## Pipeline
//!
//! - **Rate limits**: one probe request, quota headers printed for the operator
//! - **Fetch**: `GET /standings?league=..&season=..`, failures logged and treated as "no data"
//! - **Rank**: stable sort by conference rank, keep the first N (5 by default)
//! - **Flatten**: nested groups become `<Group>_<Key>` columns
//! - **Store**: create `top_teams` if needed, bulk insert in one transaction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_standings::{
//!     commands::top_teams::{handle_top_teams, TopTeamsParams},
//!     core::{ApiConfig, DatabaseConfig},
//!     League, Season,
//! };
//!
//! # async fn example() -> nba_standings::Result<()> {
//! let outcome = handle_top_teams(TopTeamsParams {
//!     league: League::default(),
//!     season: Season::new(2022),
//!     limit: 5,
//!     as_json: false,
//!     api: ApiConfig::from_env()?,
//!     database: DatabaseConfig::new("standings.db"),
//! })
//! .await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export RAPIDAPI_KEY=...            # required
//! export NBA_STANDINGS_DB=./nba.db   # optional, defaults to the cache directory
//! ```
//!
//! `keys.env` and `.env` in the working directory are read as well.
//!
//! ## Exit Status
//!
//! The job exits 0 for every pipeline outcome: no data, database connection,
//! schema or insert failures are logged to stderr and reported as a
//! [`commands::top_teams::RunOutcome`]. It exits non-zero only when
//! configuration fails before the pipeline starts, such as an unset
//! `RAPIDAPI_KEY` or invalid command-line arguments.

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{League, Season};
pub use error::{Result, StandingsError};
pub use nba::{FlatRecord, StandingsResponse, TeamStanding};

pub const API_KEY_ENV_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_ENV_VAR: &str = "RAPIDAPI_HOST";
pub const API_URL_ENV_VAR: &str = "NBA_STANDINGS_URL";
pub const DATABASE_PATH_ENV_VAR: &str = "NBA_STANDINGS_DB";
