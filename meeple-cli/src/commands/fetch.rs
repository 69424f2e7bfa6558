use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_fetch::DEFAULT_CATALOG_URL;
use meeple_store::{CachedCatalog, cache};

use crate::CliError;

/// Download the catalog and write it to the local cache.
pub(crate) fn run_fetch(url: Option<String>, force: bool) -> Result<(), CliError> {
    let url = url.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
    let cache_path = cache::default_path()?;

    if !force
        && let Some(cached) = CachedCatalog::load(&cache_path)?
    {
        log::info!(
            "Catalog already cached ({} games, fetched {})",
            cached.games.len(),
            cached.fetched_at.format("%Y-%m-%d %H:%M UTC"),
        );
        log::info!("Use 'meeple fetch --force' to re-download.");
        return Ok(());
    }

    // Create a tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(format!("Fetching catalog from {url}..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = rt.block_on(meeple_fetch::fetch_catalog(&url));
    pb.finish_and_clear();

    let games = result?;

    let cached = CachedCatalog::new(&url, games);
    cached.save(&cache_path)?;

    println!(
        "{} Fetched {} games to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        cached.games.len(),
        cache_path.display(),
    );

    Ok(())
}
