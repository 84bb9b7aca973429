use reqwest::{
    header::{HeaderMap, HeaderName},
    Client, StatusCode,
};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    core::{api_headers, ApiConfig},
    error::StandingsError,
    nba::types::{QuotaValue, RateLimitSnapshot, StandingsQuery, StandingsResponse},
    Result,
};


pub const USER_AGENT: &str = concat!("nba-standings/", env!("CARGO_PKG_VERSION"));

/// Daily quota headers set by the RapidAPI gateway.
pub const DAILY_LIMIT_HEADER: &str = "x-ratelimit-requests-limit";
pub const DAILY_REMAINING_HEADER: &str = "x-ratelimit-requests-remaining";
/// Per-minute quota headers set by the upstream API.
pub const MINUTE_LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const MINUTE_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Build the shared HTTP client. Timeouts are left at reqwest defaults.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET `url` and parse the body as JSON.
///
/// Non-2xx statuses come back as [`StandingsError::HttpStatus`]; anything that
/// goes wrong on the wire is [`StandingsError::Transport`].
pub async fn fetch_json<Q>(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    query: &Q,
) -> Result<Value>
where
    Q: serde::Serialize + ?Sized,
{
    let res = client
        .get(url)
        .headers(headers.clone())
        .query(query)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "standings API error body");
        return Err(StandingsError::HttpStatus {
            status: status.as_u16(),
            message: status_message(status, &body),
        });
    }

    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn status_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    // RapidAPI error bodies look like {"message": "..."}
    match serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
    {
        Some(detail) => format!("{reason}: {detail}"),
        None => reason.to_string(),
    }
}

/// Fetch and decode the standings for one league and season.
pub async fn fetch_standings(
    client: &Client,
    api: &ApiConfig,
    query: &StandingsQuery,
) -> Result<StandingsResponse> {
    let headers = api_headers(api)?;
    let raw = fetch_json(client, &api.url, &headers, &query.to_params()).await?;
    let parsed: StandingsResponse = serde_json::from_value(raw)?;

    if let Some(errors) = parsed.api_errors() {
        warn!(%errors, "standings API reported errors");
    }
    debug!(teams = parsed.response.len(), "standings fetched");
    Ok(parsed)
}

/// Fetch standings, logging any failure and returning `None` instead.
///
/// No retry is attempted; callers treat `None` as "no data".
pub async fn get_standings(
    client: &Client,
    api: &ApiConfig,
    query: &StandingsQuery,
) -> Option<StandingsResponse> {
    match fetch_standings(client, api, query).await {
        Ok(resp) => Some(resp),
        Err(e) => {
            error!(
                error = %e,
                league = %query.league,
                season = %query.season,
                "failed to fetch standings"
            );
            None
        }
    }
}

/// Issue one request (consuming one unit of quota) and read the quota headers.
///
/// Headers are read whatever the status, a 429 still reports the quota.
pub async fn probe_rate_limits(client: &Client, api: &ApiConfig) -> Result<RateLimitSnapshot> {
    let headers = api_headers(api)?;
    let res = client.get(&api.url).headers(headers).send().await?;

    let status = res.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "rate-limit probe returned a non-success status");
    }
    Ok(snapshot_from_headers(status, res.headers()))
}

/// Read the four quota headers; header names are case-insensitive.
pub fn snapshot_from_headers(status: StatusCode, headers: &HeaderMap) -> RateLimitSnapshot {
    let read = |name: &'static str| {
        headers
            .get(HeaderName::from_static(name))
            .and_then(|v| v.to_str().ok())
            .map(|v| QuotaValue::Known(v.trim().to_string()))
            .unwrap_or(QuotaValue::Unknown)
    };

    RateLimitSnapshot {
        status,
        daily_limit: read(DAILY_LIMIT_HEADER),
        daily_remaining: read(DAILY_REMAINING_HEADER),
        per_minute_limit: read(MINUTE_LIMIT_HEADER),
        per_minute_remaining: read(MINUTE_REMAINING_HEADER),
    }
}
