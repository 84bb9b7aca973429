//! The batch run: probe, fetch, rank, flatten, print, store.
//!
//! Every step failure is logged and turned into a [`RunOutcome`]; nothing in
//! the pipeline aborts the process.

use std::fmt;

use tracing::{error, info, warn};

use crate::{
    core::{ApiConfig, DatabaseConfig},
    nba::{
        flatten::{flatten, FlatRecord},
        http::{build_client, get_standings},
        rank::top_n,
        types::StandingsQuery,
    },
    storage::StandingsDatabase,
    League, Result, Season,
};

use super::{
    output::{format_json, format_table},
    rate_limits::report_rate_limits,
};

/// Configuration for one run of the top-teams job.
#[derive(Debug, Clone)]
pub struct TopTeamsParams {
    pub league: League,
    pub season: Season,
    /// How many teams to keep after ranking.
    pub limit: usize,
    pub as_json: bool,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

/// How far a run got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The API returned nothing usable; the database was not touched.
    NoData,
    ConnectionFailed,
    SchemaFailed,
    InsertFailed,
    Inserted { rows: usize },
}

/// The line shown to the operator for each outcome.
impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::NoData => write!(f, "No data found"),
            RunOutcome::ConnectionFailed => write!(f, "Database connection failed"),
            RunOutcome::SchemaFailed => write!(f, "Could not create top_teams"),
            RunOutcome::InsertFailed => write!(f, "Insert failed, nothing was written"),
            RunOutcome::Inserted { rows } => write!(f, "Inserted {} rows into top_teams", rows),
        }
    }
}

/// Handle the top-teams command
pub async fn handle_top_teams(params: TopTeamsParams) -> Result<RunOutcome> {
    let client = build_client()?;

    if let Some(snapshot) = report_rate_limits(&client, &params.api).await {
        println!("Rate limits: {}", snapshot);
    }

    let query = StandingsQuery::new(params.league.clone(), params.season);
    let standings = get_standings(&client, &params.api, &query)
        .await
        .filter(|resp| !resp.is_empty());

    // No data ends the run here, before any database work
    let Some(standings) = standings else {
        warn!(league = %params.league, season = %params.season, "no standings returned");
        println!("{}", RunOutcome::NoData);
        return Ok(RunOutcome::NoData);
    };

    let top = top_n(&standings, params.limit);
    if top.is_empty() {
        warn!(limit = params.limit, "no teams left after ranking");
        println!("{}", RunOutcome::NoData);
        return Ok(RunOutcome::NoData);
    }

    let records = flatten(top);
    info!(teams = standings.response.len(), kept = records.len(), "standings ranked");

    if params.as_json {
        println!("{}", format_json(&records)?);
    } else {
        println!("{}", format_table(&records));
    }

    Ok(store_records(&params.database, &records))
}

/// Connect, ensure the schema, and append `records`.
pub fn store_records(database: &DatabaseConfig, records: &[FlatRecord]) -> RunOutcome {
    let mut db = match StandingsDatabase::connect(database) {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, path = %database.path().display(), "database connection failed");
            return RunOutcome::ConnectionFailed;
        }
    };

    if let Err(e) = db.ensure_schema() {
        error!(error = %e, "could not create top_teams");
        return RunOutcome::SchemaFailed;
    }

    match db.insert_rows(records) {
        Ok(rows) => {
            let outcome = RunOutcome::Inserted { rows };
            match db.count_rows() {
                Ok(total) => println!("✓ {} ({} total)", outcome, total),
                Err(e) => {
                    warn!(error = %e, "could not count stored rows");
                    println!("✓ {}", outcome);
                }
            }
            outcome
        }
        Err(e) => {
            error!(error = %e, "insert failed, nothing was written");
            RunOutcome::InsertFailed
        }
    }
}
