use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_catalog::{CardView, SortKey, filter, sort_records};

use crate::CliError;
use crate::cli_types::FilterArgs;

use super::{load_catalog, load_favorites};

/// List games matching the given filters.
pub(crate) fn run_list(
    filters: &FilterArgs,
    sort: Option<SortKey>,
    favorites_only: bool,
) -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };
    let favorites = load_favorites()?;

    let criteria = filters.to_criteria();
    let mut shown = filter(&cached.games, &criteria);

    if favorites_only {
        shown.retain(|g| favorites.is_favorite(&g.id));
    }
    if let Some(key) = sort {
        sort_records(&mut shown, key);
    }

    if shown.is_empty() {
        println!(
            "{}",
            "No games matched your filters".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for game in &shown {
        print_card(&CardView::from_record(game, favorites.is_favorite(&game.id)));
    }

    println!();
    println!("{} of {} games shown", shown.len(), cached.games.len());

    Ok(())
}

fn print_card(card: &CardView) {
    let marker = if card.favorite { " \u{2665}" } else { "" };
    println!(
        "{}{}  {}",
        card.title.if_supports_color(Stdout, |t| t.bold()),
        marker.if_supports_color(Stdout, |t| t.red()),
        format!("(rating {})", card.rating).if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "  {}  |  {} players  |  {}",
        card.genres.if_supports_color(Stdout, |t| t.cyan()),
        card.players,
        card.playtime,
    );
    if !card.description.is_empty() {
        println!("  {}", card.description);
    }
}
