use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Favorites or cache storage failed
    #[error("Storage error: {0}")]
    Store(#[from] meeple_store::StoreError),

    /// Catalog download or decode failed
    #[error("{0}")]
    Fetch(#[from] meeple_fetch::FetchError),

    /// No game matched the given title
    #[error("No game matching '{0}'")]
    GameNotFound(String),

    /// More than one game matched the given title
    #[error("'{query}' matches several games: {}", matches.join(", "))]
    AmbiguousTitle { query: String, matches: Vec<String> },
}
