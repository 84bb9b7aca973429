//! Command implementations for the NBA standings CLI

pub mod output;
pub mod rate_limits;
pub mod top_teams;
