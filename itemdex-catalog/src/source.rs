//! Catalog acquisition.
//!
//! The raw catalog is a JSON array of item records. It can live on disk, be
//! served over HTTP(S), or be handed in pre-materialized (tests, embedding).
//! The source only knows how to produce the full record list once; caching
//! is the index's job.

use std::path::PathBuf;

use tokio::time::Duration;

use itemdex_core::RawItem;

use crate::error::CatalogError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the raw item catalog comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// JSON file on the local filesystem.
    File(PathBuf),
    /// JSON payload served over HTTP(S).
    Url(String),
    /// Pre-materialized records.
    Static(Vec<RawItem>),
}

impl CatalogSource {
    /// Build a source from a location string: anything that looks like an
    /// http(s) URL is fetched, everything else is treated as a file path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Fetch and parse the full set of raw item records.
    pub(crate) async fn fetch(&self) -> Result<Vec<RawItem>, CatalogError> {
        match self {
            Self::File(path) => {
                let contents = std::fs::read_to_string(path)?;
                parse_items(&contents)
            }
            Self::Url(url) => {
                let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
                let response = http.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::download(format!("HTTP {status} for {url}")));
                }
                let text = response.text().await?;
                parse_items(&text)
            }
            Self::Static(items) => Ok(items.clone()),
        }
    }
}

/// Parse a JSON payload into raw item records.
fn parse_items(payload: &str) -> Result<Vec<RawItem>, CatalogError> {
    let items: Vec<RawItem> = serde_json::from_str(payload)?;
    log::debug!("Parsed {} catalog records", items.len());
    Ok(items)
}
