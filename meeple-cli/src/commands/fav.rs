use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_catalog::CardView;

use crate::CliError;
use crate::cli_types::FavAction;

use super::{find_by_title, load_catalog, load_favorites, save_favorites};

/// Run a favorites subcommand.
pub(crate) fn run_fav(action: FavAction) -> Result<(), CliError> {
    match action {
        FavAction::Add { title } => run_add(&title),
        FavAction::Remove { title } => run_remove(&title),
        FavAction::Toggle { title } => run_toggle(&title),
        FavAction::List => run_fav_list(),
        FavAction::Clear => run_clear(),
    }
}

fn run_add(title: &str) -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };
    let game = find_by_title(&cached.games, title)?;

    let mut favorites = load_favorites()?;
    if favorites.add(game) {
        save_favorites(&favorites)?;
        println!(
            "{} Added '{}' to favorites",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            game.title,
        );
    } else {
        println!("'{}' is already a favorite", game.title);
    }
    Ok(())
}

fn run_remove(title: &str) -> Result<(), CliError> {
    let mut favorites = load_favorites()?;

    // Favorites outlive the catalog, so search them directly.
    let game = find_by_title(favorites.games(), title)?;
    let id = game.id.clone();
    let game_title = game.title.clone();

    favorites.remove(&id);
    save_favorites(&favorites)?;
    println!(
        "{} Removed '{}' from favorites",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        game_title,
    );
    Ok(())
}

fn run_toggle(title: &str) -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };
    let game = find_by_title(&cached.games, title)?;

    let mut favorites = load_favorites()?;
    let now_favorite = favorites.toggle(game);
    save_favorites(&favorites)?;

    if now_favorite {
        println!(
            "{} '{}' is now a favorite",
            "\u{2665}".if_supports_color(Stdout, |t| t.red()),
            game.title,
        );
    } else {
        println!("'{}' is no longer a favorite", game.title);
    }
    Ok(())
}

fn run_fav_list() -> Result<(), CliError> {
    let favorites = load_favorites()?;

    if favorites.is_empty() {
        println!(
            "{}",
            "No favorites yet.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        println!("Run 'meeple fav add <title>' to add one.");
        return Ok(());
    }

    for game in favorites.games() {
        let card = CardView::from_record(game, true);
        println!(
            "{} {}  {}",
            "\u{2665}".if_supports_color(Stdout, |t| t.red()),
            card.title.if_supports_color(Stdout, |t| t.bold()),
            format!("(rating {})", card.rating).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();
    println!("{} favorites", favorites.len());
    Ok(())
}

fn run_clear() -> Result<(), CliError> {
    let mut favorites = load_favorites()?;
    let count = favorites.len();
    favorites.clear();
    save_favorites(&favorites)?;
    println!(
        "{} Cleared {} favorites",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count,
    );
    Ok(())
}
