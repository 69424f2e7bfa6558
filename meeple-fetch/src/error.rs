/// Errors that can occur while fetching or decoding a catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog fetch failed with status {0}")]
    Status(u16),

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
