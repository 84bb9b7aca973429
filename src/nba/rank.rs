//! Top-N selection by conference rank.

use crate::nba::types::{StandingsResponse, TeamStanding};

/// How many teams a run keeps.
pub const DEFAULT_TOP_N: usize = 5;

/// The best `n` teams by ascending conference rank.
///
/// The sort is stable: teams sharing a rank keep their API order. An empty or
/// missing `response` sequence yields an empty vec.
pub fn top_n(response: &StandingsResponse, n: usize) -> Vec<&TeamStanding> {
    let mut teams: Vec<&TeamStanding> = response.response.iter().collect();
    teams.sort_by_key(|t| t.conference.rank);
    teams.truncate(n);
    teams
}
