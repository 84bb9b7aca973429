//! Storage against on-disk databases

mod common;

use common::{shuffled_east, standings_body};
use nba_standings::{
    core::DatabaseConfig,
    nba::{flatten::flatten, rank::top_n, types::StandingsResponse},
    storage::StandingsDatabase,
    FlatRecord, StandingsError,
};

fn records() -> Vec<FlatRecord> {
    let resp: StandingsResponse = serde_json::from_value(standings_body(shuffled_east())).unwrap();
    flatten(top_n(&resp, 5))
}

#[test]
fn test_connect_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("sub").join("standings.db"));

    let db = StandingsDatabase::connect(&config).unwrap();
    db.ensure_schema().unwrap();
    assert!(config.path().exists());
    assert!(db.table_exists().unwrap());
}

#[test]
fn test_connect_without_create_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("missing.db"),
        create_if_missing: false,
    };

    match StandingsDatabase::connect(&config) {
        Err(StandingsError::DatabaseNotFound { path }) => assert_eq!(path, config.path),
        Err(other) => panic!("Expected DatabaseNotFound, got {:?}", other),
        Ok(_) => panic!("Expected DatabaseNotFound, got a connection"),
    }
}

#[test]
fn test_schema_idempotent_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("standings.db"));

    {
        let mut db = StandingsDatabase::connect(&config).unwrap();
        db.ensure_schema().unwrap();
        db.insert_rows(&records()).unwrap();
    }

    let db = StandingsDatabase::connect(&config).unwrap();
    db.ensure_schema().unwrap();
    assert_eq!(db.count_rows().unwrap(), 5);
}

#[test]
fn test_insert_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = StandingsDatabase::connect(&DatabaseConfig::new(dir.path().join("s.db"))).unwrap();
    db.ensure_schema().unwrap();

    let records = records();
    assert_eq!(db.insert_rows(&records).unwrap(), records.len());
    assert_eq!(db.load_rows().unwrap(), records);
}

#[test]
fn test_each_run_appends() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("s.db"));

    for run in 1..=3 {
        let mut db = StandingsDatabase::connect(&config).unwrap();
        db.ensure_schema().unwrap();
        db.insert_rows(&records()).unwrap();
        assert_eq!(db.count_rows().unwrap(), 5 * run);
    }
}
