//! API-NBA client and the standings transformations
//!
//! - `http`: standings fetch and rate-limit probe
//! - `types`: wire types for the `/standings` payload
//! - `rank`: top-N selection by conference rank
//! - `flatten`: nested standings to `top_teams` rows

pub mod flatten;
pub mod http;
pub mod rank;
pub mod types;

pub use flatten::{flatten, CellValue, FlatRecord, TOP_TEAMS_COLUMNS};
pub use rank::{top_n, DEFAULT_TOP_N};
pub use types::{RateLimitSnapshot, StandingsQuery, StandingsResponse, TeamStanding};
