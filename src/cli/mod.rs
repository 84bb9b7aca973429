//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{League, Season};

use crate::nba::rank::DEFAULT_TOP_N;

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  every pipeline outcome, including no data and database failures
     (the reason is logged to stderr)
  1  configuration errors before the pipeline starts, e.g. RAPIDAPI_KEY unset
  2  invalid command-line arguments";

/// Parse `--limit`: a positive team count.
fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// League and season selection shared by the query commands
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// League name sent to API-NBA.
    #[clap(long, short, default_value_t = League::default())]
    pub league: League,

    /// Season start year (e.g. 2022 for 2022-23).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch standings, keep the best teams by conference rank, and append them to `top_teams`.
    TopTeams {
        #[clap(flatten)]
        query: QueryArgs,

        /// Number of teams to keep.
        #[clap(long, short = 'n', default_value_t = DEFAULT_TOP_N, value_parser = parse_limit)]
        limit: usize,

        /// SQLite database file (or set `NBA_STANDINGS_DB`).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Fail instead of creating the database file when it is missing.
        #[clap(long)]
        no_create: bool,

        /// Print the rows as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show the API quota headers (uses one request).
    RateLimits {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-standings",
    about = "NBA standings to SQL batch job",
    after_help = EXIT_STATUS_HELP
)]
pub struct NbaStandings {
    /// Debug-level logging (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
