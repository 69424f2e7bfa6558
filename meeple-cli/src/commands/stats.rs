use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_catalog::{difficulty_options, genre_options, location_options};

use crate::CliError;

use super::{load_catalog, load_favorites};

/// Show catalog statistics.
pub(crate) fn run_stats() -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };
    let favorites = load_favorites()?;

    let rated = cached.games.iter().filter(|g| g.rating.is_some()).count();
    // Each populator prepends an "all" entry.
    let genres = genre_options(&cached.games).len() - 1;
    let locations = location_options(&cached.games).len() - 1;
    let difficulties = difficulty_options(&cached.games).len() - 1;

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Source:   {}", cached.url);
    log::info!(
        "  Fetched:  {}",
        cached.fetched_at.format("%Y-%m-%d %H:%M UTC"),
    );
    log::info!("");
    log::info!("  Games:          {:>6}", cached.games.len());
    log::info!("  Genres:         {:>6}", genres);
    log::info!("  Locations:      {:>6}", locations);
    log::info!("  Difficulties:   {:>6}", difficulties);
    log::info!("  Rated:          {:>6}", rated);
    log::info!("  Favorites:      {:>6}", favorites.len());

    Ok(())
}
