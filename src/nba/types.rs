//! Wire types for the API-NBA `/standings` endpoint.

use reqwest::StatusCode;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use tracing::warn;


/// Accept a JSON string or number and keep it as text.
fn text_from_value<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number, got {other}"))),
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    text_from_value(raw)?.ok_or_else(|| D::Error::custom("expected string or number, got null"))
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    text_from_value(raw)
}

/// Decode `response` entry by entry; a team that fails to decode is logged
/// and dropped instead of sinking the whole payload.
fn de_teams<'de, D>(deserializer: D) -> Result<Vec<TeamStanding>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    let teams: Vec<TeamStanding> = raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(team) => Some(team),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed standings entry");
                None
            }
        })
        .collect();
    Ok(teams)
}

/// Top-level envelope returned by `/standings`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StandingsResponse {
    /// Echo of the request (`"standings"`).
    #[serde(default)]
    pub get: Option<String>,
    /// API-NBA reports bad keys or parameters here, with HTTP 200.
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default, deserialize_with = "de_teams")]
    pub response: Vec<TeamStanding>,
}

impl StandingsResponse {
    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    /// Errors the API embedded in an otherwise successful payload.
    pub fn api_errors(&self) -> Option<String> {
        match &self.errors {
            Value::Null => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

/// One team's standing for a season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamStanding {
    pub team: TeamInfo,
    pub conference: ConferenceStanding,
    pub division: DivisionStanding,
    pub win: RecordSplit,
    pub loss: RecordSplit,
    /// `streak`, `winStreak` and `tieBreakerPoints` sit at the top level of the payload.
    #[serde(flatten)]
    pub streak: StreakInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamInfo {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConferenceStanding {
    pub name: String,
    /// 1 is best. Sole ranking key.
    pub rank: u32,
    #[serde(default)]
    pub win: Option<u32>,
    #[serde(default)]
    pub loss: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DivisionStanding {
    pub name: String,
    pub rank: u32,
    pub win: u32,
    pub loss: u32,
    #[serde(rename = "gamesBehind", deserialize_with = "de_opt_text", default)]
    pub games_behind: Option<String>,
}

/// Home/away/total split, used for both `win` and `loss`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecordSplit {
    pub home: u32,
    pub away: u32,
    pub total: u32,
    #[serde(deserialize_with = "de_text")]
    pub percentage: String,
    #[serde(rename = "lastTen")]
    pub last_ten: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreakInfo {
    #[serde(rename = "streak")]
    pub current: u32,
    #[serde(rename = "winStreak")]
    pub winning: bool,
    #[serde(rename = "tieBreakerPoints", deserialize_with = "de_opt_text", default)]
    pub tie_breaker_points: Option<String>,
}

/// Query parameters for one standings request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsQuery {
    pub league: crate::League,
    pub season: crate::Season,
}

impl StandingsQuery {
    pub fn new(league: crate::League, season: crate::Season) -> Self {
        Self { league, season }
    }

    pub fn to_params(&self) -> [(&'static str, String); 2] {
        [
            ("league", self.league.to_string()),
            ("season", self.season.to_string()),
        ]
    }
}

/// A quota header value; absent headers stay distinguishable from zero.
///
/// Serializes as its display text, so JSON output reads `"unknown"` too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaValue {
    Known(String),
    Unknown,
}

impl QuotaValue {
    pub fn is_known(&self) -> bool {
        matches!(self, QuotaValue::Known(_))
    }
}

impl Serialize for QuotaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for QuotaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotaValue::Known(v) => write!(f, "{}", v),
            QuotaValue::Unknown => write!(f, "unknown"),
        }
    }
}

/// Point-in-time read of the RapidAPI quota headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitSnapshot {
    #[serde(skip)]
    pub status: StatusCode,
    pub daily_limit: QuotaValue,
    pub daily_remaining: QuotaValue,
    pub per_minute_limit: QuotaValue,
    pub per_minute_remaining: QuotaValue,
}

impl fmt::Display for RateLimitSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "daily limit: {}, daily remaining: {}, per-minute limit: {}, per-minute remaining: {}",
            self.daily_limit, self.daily_remaining, self.per_minute_limit, self.per_minute_remaining
        )
    }
}
