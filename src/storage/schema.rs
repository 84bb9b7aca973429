//! Database connection and schema management

use crate::{
    core::DatabaseConfig,
    error::{Result, StandingsError},
    nba::flatten::TOP_TEAMS_COLUMNS,
};
use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

/// Target table for the flattened standings.
pub const TOP_TEAMS_TABLE: &str = "top_teams";

/// Connection to the database holding `top_teams`
pub struct StandingsDatabase {
    pub(crate) conn: Connection,
}

impl StandingsDatabase {
    /// Open the configured database and make sure it is usable.
    ///
    /// Does not touch the schema; call [`StandingsDatabase::ensure_schema`].
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let path = config.path();

        if !config.create_if_missing && !path.exists() {
            return Err(StandingsError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if config.create_if_missing {
            // Ensure the cache directory exists
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| classify_io_error(parent, e))?;
            }
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn =
            Connection::open_with_flags(path, flags).map_err(|e| classify_open_error(path, e))?;

        // SQLite opens lazily, so read the catalog to surface a bad file now
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| classify_open_error(path, e))?;

        info!(path = %path.display(), "connected to database");
        Ok(Self { conn })
    }

    /// In-memory database, mostly for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StandingsError::Connection)?;
        Ok(Self { conn })
    }

    /// Create `top_teams` if it does not exist. Safe to call on every run.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(&create_table_sql())
            .map_err(StandingsError::Schema)?;
        debug!(table = TOP_TEAMS_TABLE, "schema ready");
        Ok(())
    }

    /// Whether `top_teams` exists.
    pub fn table_exists(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [TOP_TEAMS_TABLE],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

/// `CREATE TABLE IF NOT EXISTS` for `top_teams`, generated from the column list.
///
/// No primary key: the table is append-only and re-runs duplicate rows.
pub fn create_table_sql() -> String {
    let columns: Vec<String> = TOP_TEAMS_COLUMNS
        .iter()
        .map(|c| {
            let not_null = if c.nullable { "" } else { " NOT NULL" };
            format!("    \"{}\" {}{}", c.name, c.sql_type.as_sql(), not_null)
        })
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        TOP_TEAMS_TABLE,
        columns.join(",\n")
    )
}

fn classify_open_error(path: &Path, err: rusqlite::Error) -> StandingsError {
    match err.sqlite_error_code() {
        Some(ErrorCode::CannotOpen) | Some(ErrorCode::NotFound) => {
            StandingsError::DatabaseNotFound {
                path: path.to_path_buf(),
            }
        }
        Some(ErrorCode::PermissionDenied)
        | Some(ErrorCode::AuthorizationForStatementDenied)
        | Some(ErrorCode::ReadOnly) => StandingsError::Authentication {
            message: err.to_string(),
        },
        Some(ErrorCode::SystemIoFailure)
        | Some(ErrorCode::FileLockingProtocolFailed)
        | Some(ErrorCode::DatabaseBusy)
        | Some(ErrorCode::DatabaseLocked) => StandingsError::Network {
            message: err.to_string(),
        },
        _ => StandingsError::Connection(err),
    }
}

fn classify_io_error(path: &Path, err: std::io::Error) -> StandingsError {
    let message = format!("{}: {}", path.display(), err);
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => StandingsError::Authentication { message },
        _ => StandingsError::Network { message },
    }
}
