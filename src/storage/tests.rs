//! Unit tests for storage functionality

use super::*;
use crate::nba::flatten::{CellValue, FlatRecord, TOP_TEAMS_COLUMNS};

fn create_test_db() -> StandingsDatabase {
    let db = StandingsDatabase::new_in_memory().unwrap();
    db.ensure_schema().unwrap();
    db
}

fn record(name: &str, rank: i64) -> FlatRecord {
    let cells = TOP_TEAMS_COLUMNS
        .iter()
        .map(|c| match c.name {
            "Team_Name" => CellValue::Text(name.to_string()),
            "Rank" => CellValue::Integer(rank),
            "Streak_WinningStreak" => CellValue::Boolean(rank % 2 == 1),
            _ if c.nullable => CellValue::Null,
            _ => match c.sql_type {
                crate::nba::flatten::SqlType::Text => CellValue::Text("x".to_string()),
                crate::nba::flatten::SqlType::Integer => CellValue::Integer(1),
                crate::nba::flatten::SqlType::Boolean => CellValue::Boolean(false),
            },
        })
        .collect();
    FlatRecord::from_cells(cells)
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let db = StandingsDatabase::new_in_memory().unwrap();
    assert!(!db.table_exists().unwrap());

    db.ensure_schema().unwrap();
    db.ensure_schema().unwrap();

    assert!(db.table_exists().unwrap());
    let tables: i64 = db
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'top_teams'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn test_schema_declares_every_column() {
    let db = create_test_db();
    let mut stmt = db.conn.prepare("PRAGMA table_info(top_teams)").unwrap();
    let columns: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert_eq!(columns.len(), TOP_TEAMS_COLUMNS.len());
    for ((name, ty), column) in columns.iter().zip(TOP_TEAMS_COLUMNS.iter()) {
        assert_eq!(name, column.name);
        assert_eq!(ty, column.sql_type.as_sql());
    }
}

#[test]
fn test_insert_rows_adds_exactly_n_in_order() {
    let mut db = create_test_db();
    let records: Vec<FlatRecord> = (1..=5).map(|r| record(&format!("Team {}", r), r)).collect();

    let inserted = db.insert_rows(&records).unwrap();
    assert_eq!(inserted, 5);
    assert_eq!(db.count_rows().unwrap(), 5);

    let stored = db.load_rows().unwrap();
    assert_eq!(stored, records);
}

#[test]
fn test_insert_rows_appends_on_rerun() {
    let mut db = create_test_db();
    let records = vec![record("Nuggets", 1), record("Grizzlies", 2)];

    db.insert_rows(&records).unwrap();
    db.ensure_schema().unwrap();
    db.insert_rows(&records).unwrap();

    assert_eq!(db.count_rows().unwrap(), 4);
}

#[test]
fn test_insert_rows_empty_batch() {
    let mut db = create_test_db();
    assert_eq!(db.insert_rows(&[]).unwrap(), 0);
    assert_eq!(db.count_rows().unwrap(), 0);
}

#[test]
fn test_insert_rows_type_mismatch_rolls_back_batch() {
    let mut db = create_test_db();

    let mut cells = record("Bad", 3).cells().to_vec();
    let rank_idx = TOP_TEAMS_COLUMNS.iter().position(|c| c.name == "Rank").unwrap();
    cells[rank_idx] = CellValue::Text("third".to_string());
    let records = vec![record("Good", 1), FlatRecord::from_cells(cells)];

    match db.insert_rows(&records) {
        Err(crate::error::StandingsError::Insert { message }) => {
            assert!(message.contains("row 1"));
            assert!(message.contains("Rank"));
        }
        other => panic!("Expected Insert error, got {:?}", other),
    }
    assert_eq!(db.count_rows().unwrap(), 0);
}

#[test]
fn test_insert_rows_column_count_mismatch() {
    let mut db = create_test_db();
    let short = FlatRecord::from_cells(vec![CellValue::Text("Short".to_string())]);

    let err = db.insert_rows(&[record("Fine", 1), short]).unwrap_err();
    assert!(err.to_string().contains("expected 24 values, got 1"));
    assert_eq!(db.count_rows().unwrap(), 0);
}

#[test]
fn test_insert_without_schema_fails() {
    let mut db = StandingsDatabase::new_in_memory().unwrap();
    match db.insert_rows(&[record("Orphan", 1)]) {
        Err(crate::error::StandingsError::Insert { message }) => {
            assert!(message.contains("top_teams"));
        }
        other => panic!("Expected Insert error, got {:?}", other),
    }
}

#[test]
fn test_null_and_boolean_round_trip() {
    let mut db = create_test_db();
    let rec = record("Heat", 1);
    db.insert_rows(std::slice::from_ref(&rec)).unwrap();

    let stored = db.load_rows().unwrap();
    assert_eq!(stored[0].get("Division_GamesBehind"), Some(&CellValue::Null));
    assert_eq!(
        stored[0].get("Streak_WinningStreak"),
        Some(&CellValue::Boolean(true))
    );
}

#[test]
fn test_insert_sql_placeholders() {
    let sql = insert_sql();
    assert!(sql.starts_with("INSERT INTO top_teams (\"Team_Name\", \"Conference\", \"Rank\""));
    assert_eq!(sql.matches('?').count(), TOP_TEAMS_COLUMNS.len());
}
