//! Row operations on `top_teams`

use super::{models::cell_from_sql, schema::StandingsDatabase, schema::TOP_TEAMS_TABLE};
use crate::{
    error::{Result, StandingsError},
    nba::flatten::{FlatRecord, TOP_TEAMS_COLUMNS},
};
use rusqlite::params_from_iter;
use tracing::{debug, info};

fn column_list() -> String {
    TOP_TEAMS_COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `INSERT INTO top_teams (...) VALUES (?, ...)` with one placeholder per column.
pub fn insert_sql() -> String {
    let placeholders = vec!["?"; TOP_TEAMS_COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TOP_TEAMS_TABLE,
        column_list(),
        placeholders
    )
}

/// Check a record against the column list before anything is bound.
fn validate_record(row: usize, record: &FlatRecord) -> Result<()> {
    let cells = record.cells();
    if cells.len() != TOP_TEAMS_COLUMNS.len() {
        return Err(StandingsError::Insert {
            message: format!(
                "row {}: expected {} values, got {}",
                row,
                TOP_TEAMS_COLUMNS.len(),
                cells.len()
            ),
        });
    }

    for (column, value) in TOP_TEAMS_COLUMNS.iter().zip(cells) {
        if !value.fits(column.sql_type, column.nullable) {
            return Err(StandingsError::Insert {
                message: format!(
                    "row {}: column {} expects {}, got {:?}",
                    row,
                    column.name,
                    column.sql_type.as_sql(),
                    value
                ),
            });
        }
    }
    Ok(())
}

fn insert_error(err: rusqlite::Error) -> StandingsError {
    StandingsError::Insert {
        message: err.to_string(),
    }
}

impl StandingsDatabase {
    /// Append all records in one transaction, in order.
    ///
    /// All or nothing: the first invalid record or failed statement rolls the
    /// whole batch back. Returns the number of rows written.
    pub fn insert_rows(&mut self, records: &[FlatRecord]) -> Result<usize> {
        let tx = self.conn.transaction().map_err(insert_error)?;
        {
            let mut stmt = tx.prepare(&insert_sql()).map_err(insert_error)?;
            for (row, record) in records.iter().enumerate() {
                validate_record(row, record)?;
                stmt.execute(params_from_iter(record.cells()))
                    .map_err(insert_error)?;
            }
        }
        tx.commit().map_err(insert_error)?;

        info!(rows = records.len(), table = TOP_TEAMS_TABLE, "rows inserted");
        Ok(records.len())
    }

    /// Total rows in `top_teams`.
    pub fn count_rows(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", TOP_TEAMS_TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Every stored row, in insertion order.
    pub fn load_rows(&self) -> Result<Vec<FlatRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY rowid",
            column_list(),
            TOP_TEAMS_TABLE
        ))?;

        let rows = stmt.query_map([], |row| {
            let cells = TOP_TEAMS_COLUMNS
                .iter()
                .enumerate()
                .map(|(idx, column)| cell_from_sql(idx, column, row.get_ref(idx)?))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(FlatRecord::from_cells(cells))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        debug!(rows = records.len(), "loaded stored rows");
        Ok(records)
    }
}
