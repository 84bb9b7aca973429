//! Type-safe wrappers for API-NBA query parameters.

pub mod ids;
pub mod time;

pub use ids::League;
pub use time::Season;
