use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_catalog::{
    SelectOption, age_options, difficulty_options, genre_options, location_options,
    player_options, playtime_options,
};

use crate::CliError;
use crate::cli_types::OptionField;

use super::load_catalog;

/// Print the selectable values for one filter field.
pub(crate) fn run_options(field: OptionField) -> Result<(), CliError> {
    let Some(cached) = load_catalog()? else {
        return Ok(());
    };

    let options = match field {
        OptionField::Genre => genre_options(&cached.games),
        OptionField::Players => player_options(&cached.games),
        OptionField::Playtime => playtime_options(),
        OptionField::Location => location_options(&cached.games),
        OptionField::Difficulty => difficulty_options(&cached.games),
        OptionField::Age => age_options(&cached.games),
    };

    for SelectOption { key, label } in &options {
        let key = format!("{key:<12}");
        println!("  {}{}", key.if_supports_color(Stdout, |t| t.cyan()), label);
    }

    Ok(())
}
