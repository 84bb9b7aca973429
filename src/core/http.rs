//! HTTP utilities for the RapidAPI gateway

use crate::{core::config::ApiConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Build the key/host headers every API-NBA request carries.
pub fn api_headers(api: &ApiConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut key = HeaderValue::from_str(&api.api_key)?;
    key.set_sensitive(true);
    h.insert(HeaderName::from_static(API_KEY_HEADER), key);
    h.insert(
        HeaderName::from_static(API_HOST_HEADER),
        HeaderValue::from_str(&api.api_host)?,
    );
    Ok(h)
}
