//! Configuration objects built once at process start and passed down.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    error::{Result, StandingsError},
    API_HOST_ENV_VAR, API_KEY_ENV_VAR, API_URL_ENV_VAR, DATABASE_PATH_ENV_VAR,
};

/// Default RapidAPI host for API-NBA.
pub const DEFAULT_API_HOST: &str = "api-nba-v1.p.rapidapi.com";

/// Default standings endpoint.
pub const DEFAULT_STANDINGS_URL: &str = "https://api-nba-v1.p.rapidapi.com/standings";

/// Secrets file read before `.env`.
pub const KEYS_ENV_FILE: &str = "keys.env";

/// Everything needed to talk to the standings endpoint.
#[derive(Clone)]
pub struct ApiConfig {
    pub url: String,
    pub api_key: String,
    pub api_host: String,
}

impl ApiConfig {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Resolve from `RAPIDAPI_KEY` (required), `RAPIDAPI_HOST` and `NBA_STANDINGS_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| StandingsError::MissingConfig {
                env_var: API_KEY_ENV_VAR.to_string(),
            })?;
        let api_host =
            std::env::var(API_HOST_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
        let url =
            std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_STANDINGS_URL.to_string());

        Ok(Self::new(url, api_key, api_host))
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}

/// Where the `top_teams` table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    /// Create the database file (and its parent directory) when missing.
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: true,
        }
    }

    /// Explicit path wins, then `NBA_STANDINGS_DB`, then the cache directory.
    pub fn resolve(path: Option<PathBuf>, create_if_missing: bool) -> Self {
        let path = path
            .or_else(|| std::env::var_os(DATABASE_PATH_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(default_database_path);
        Self {
            path,
            create_if_missing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Path: ~/.cache/nba-standings/standings.db
pub fn default_database_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-standings").join("standings.db")
}

/// Load `keys.env` then `.env` from the working directory, if present.
///
/// Values already in the process environment are never overwritten.
pub fn load_env_files() {
    for file in [KEYS_ENV_FILE, ".env"] {
        match dotenvy::from_filename(file) {
            Ok(path) => debug!(path = %path.display(), "loaded environment file"),
            Err(err) if err.not_found() => {}
            Err(err) => debug!(file, error = %err, "could not load environment file"),
        }
    }
}
