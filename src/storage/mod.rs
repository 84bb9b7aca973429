//! Storage layer for the NBA standings job
//!
//! This module wraps the SQLite database holding `top_teams`:
//! - `models`: SQL conversions for flat records
//! - `schema`: connection and table management
//! - `queries`: bulk insert and read-back

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use queries::insert_sql;
pub use schema::{create_table_sql, StandingsDatabase, TOP_TEAMS_TABLE};
