//! Local persistence for the catalog cache and the favorites overlay.
//!
//! Both stores are single JSON files written atomically (tmp + rename) so a
//! crash mid-write never leaves a corrupt file behind. There is no
//! cross-process coordination: concurrent writers are last-write-wins.

use std::path::Path;

use thiserror::Error;

pub mod cache;
pub mod favorites;

pub use cache::CachedCatalog;
pub use favorites::Favorites;

/// Errors from reading or writing local store files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine a {0} directory for this platform")]
    NoBaseDir(&'static str),
}

/// Serialize `value` as pretty JSON and write it atomically, creating
/// parent directories as needed.
pub(crate) fn write_json_atomic<T: serde::Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
