use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_catalog::DetailView;

use crate::CliError;

use super::{find_by_title, load_catalog, load_favorites};

/// Show full details for one game.
pub(crate) fn run_show(title: &str) -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };
    let favorites = load_favorites()?;

    let game = find_by_title(&cached.games, title)?;
    let view = DetailView::from_record(game, favorites.is_favorite(&game.id));

    let marker = if view.favorite { " \u{2665}" } else { "" };
    println!(
        "{}{}",
        view.title.if_supports_color(Stdout, |t| t.bold()),
        marker.if_supports_color(Stdout, |t| t.red()),
    );
    println!();
    print_field("Rating", &view.rating);
    print_field("Genres", &view.genres);
    print_field("Players", &view.players);
    print_field("Playtime", &view.playtime);
    print_field("Min age", &view.min_age);
    print_field("Location", &view.location);
    print_field("Difficulty", &view.difficulty);
    if let Some(url) = &view.image_url {
        print_field("Image", url);
    }
    if !view.description.is_empty() {
        println!();
        println!("{}", view.description);
    }

    Ok(())
}

fn print_field(label: &str, value: &str) {
    // Pad before colorizing so ANSI codes don't skew the column width.
    let label = format!("{:<12}", format!("{label}:"));
    println!("  {}{}", label.if_supports_color(Stdout, |t| t.cyan()), value);
}
