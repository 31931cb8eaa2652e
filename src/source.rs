use crate::models::{RawEvent, RecordPage};
use reqwest::Client;
use std::env;
use thiserror::Error;
use tracing::debug;

/// The only two record fields the aggregation consumes; requesting just
/// these keeps page payloads small.
pub const PROJECTED_FIELDS: &str = "dateKey,eventType";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub region: Option<String>,
}

impl StoreConfig {
    /// Reads `STORE_URL` and `STORE_REGION` from the environment. `None`
    /// means the store location is not configured; callers report that
    /// without issuing any page request.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("STORE_URL").ok().filter(|value| !value.is_empty())?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            region: env::var("STORE_REGION").ok().filter(|value| !value.is_empty()),
        })
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record store request failed: {0}")]
    Unavailable(#[from] reqwest::Error),
}

/// Scans the whole record store, following continuation tokens until a page
/// arrives without one. A failed page request fails the entire scan; no
/// partial record set is ever returned.
pub async fn fetch_all_records(
    client: &Client,
    config: &StoreConfig,
) -> Result<Vec<RawEvent>, SourceError> {
    let url = format!("{}/records", config.base_url);
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let mut request = client.get(&url).query(&[("fields", PROJECTED_FIELDS)]);
        if let Some(token) = cursor.as_deref() {
            request = request.query(&[("cursor", token)]);
        }
        if let Some(region) = config.region.as_deref() {
            request = request.header("x-store-region", region);
        }

        let page: RecordPage = request.send().await?.error_for_status()?.json().await?;

        pages += 1;
        records.extend(page.items);
        match page.next_token {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    debug!(pages, records = records.len(), "record store scan complete");
    Ok(records)
}
