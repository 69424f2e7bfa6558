pub(crate) mod fav;
pub(crate) mod fetch;
pub(crate) mod list;
pub(crate) mod options;
pub(crate) mod show;
pub(crate) mod stats;

use meeple_catalog::GameRecord;
use meeple_store::{CachedCatalog, Favorites, cache, favorites};

use crate::CliError;

/// Load the cached catalog, or `None` (with a hint) if none exists yet.
pub(crate) fn load_catalog() -> Result<Option<CachedCatalog>, CliError> {
    let path = cache::default_path()?;
    let cached = CachedCatalog::load(&path)?;
    if cached.is_none() {
        log::warn!("No cached catalog found at {}", path.display());
        log::info!("Run 'meeple fetch' to download one.");
    }
    Ok(cached)
}

/// Load the favorites set from its default location.
pub(crate) fn load_favorites() -> Result<Favorites, CliError> {
    Ok(Favorites::load(&favorites::default_path()?))
}

/// Save the favorites set to its default location.
pub(crate) fn save_favorites(favs: &Favorites) -> Result<(), CliError> {
    favs.save(&favorites::default_path()?)?;
    Ok(())
}

/// Find a single game by title: exact match first (case-insensitive),
/// then a unique substring match.
pub(crate) fn find_by_title<'a>(
    games: &'a [GameRecord],
    query: &str,
) -> Result<&'a GameRecord, CliError> {
    let needle = query.trim().to_lowercase();

    if let Some(game) = games
        .iter()
        .find(|g| g.title.to_lowercase() == needle)
    {
        return Ok(game);
    }

    let partial: Vec<&GameRecord> = games
        .iter()
        .filter(|g| g.title.to_lowercase().contains(&needle))
        .collect();

    match partial.as_slice() {
        [game] => Ok(game),
        [] => Err(CliError::GameNotFound(query.to_string())),
        many => Err(CliError::AmbiguousTitle {
            query: query.to_string(),
            matches: many.iter().map(|g| g.title.clone()).collect(),
        }),
    }
}
