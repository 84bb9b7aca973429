//! Rate-limit probe command

use reqwest::Client;
use tracing::warn;

use crate::{
    core::ApiConfig,
    nba::{
        http::{build_client, probe_rate_limits},
        types::RateLimitSnapshot,
    },
    Result,
};

/// Probe the quota headers, logging instead of failing.
///
/// Purely observational: the outcome never changes what the caller does next.
pub async fn report_rate_limits(client: &Client, api: &ApiConfig) -> Option<RateLimitSnapshot> {
    match probe_rate_limits(client, api).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "rate-limit probe failed");
            None
        }
    }
}

/// Handle the rate-limits command
pub async fn handle_rate_limits(api: &ApiConfig, as_json: bool) -> Result<()> {
    let client = build_client()?;

    match report_rate_limits(&client, api).await {
        Some(snapshot) if as_json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        Some(snapshot) => println!("Rate limits: {}", snapshot),
        None => println!("Rate limits: unavailable"),
    }

    Ok(())
}
