//! Core utilities for the NBA standings job
//!
//! This module consolidates the pieces every command needs:
//! - `config`: API and database configuration resolved from the environment
//! - `http`: request headers for the RapidAPI gateway
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{default_database_path, load_env_files, ApiConfig, DatabaseConfig};
pub use http::api_headers;
pub use logging::init_logging;
