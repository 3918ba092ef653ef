/// Errors that can occur while acquiring or reading the item catalog.
///
/// Load failures are fatal for the request that triggered them and are
/// propagated unretried; the next access attempts the load again.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Download failed: {0}")]
    Download(String),
}

impl CatalogError {
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }
}

/// Errors surfaced by the resolver entry points.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("No item matched '{query}'")]
    NotFound { query: String },
}

impl ResolveError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// True for the normal "no result" outcome, as opposed to a load fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
