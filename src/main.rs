//! Entry point: load configuration, parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_standings::{
    cli::{Commands, NbaStandings},
    commands::{
        rate_limits::handle_rate_limits,
        top_teams::{handle_top_teams, TopTeamsParams},
    },
    core::{init_logging, load_env_files, ApiConfig, DatabaseConfig},
};
use tracing::info;

/// Run the batch job. Pipeline failures are logged and still exit zero.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = NbaStandings::parse();
    init_logging(app.verbose);
    load_env_files();

    let api = ApiConfig::from_env().context("API configuration")?;

    match app.command {
        Commands::TopTeams {
            query,
            limit,
            db,
            no_create,
            json,
        } => {
            let outcome = handle_top_teams(TopTeamsParams {
                league: query.league,
                season: query.season,
                limit,
                as_json: json,
                api,
                database: DatabaseConfig::resolve(db, !no_create),
            })
            .await?;
            info!(?outcome, "run finished");
        }

        Commands::RateLimits { json } => handle_rate_limits(&api, json).await?,
    }

    Ok(())
}
