//! meeple CLI
//!
//! Command-line interface for browsing a board game catalog: fetch and
//! cache the catalog, filter and sort listings, and keep a favorites set.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Fetch { url, force } => commands::fetch::run_fetch(url, force),
        Commands::List {
            filters,
            sort,
            favorites,
        } => commands::list::run_list(&filters, sort, favorites),
        Commands::Show { title } => commands::show::run_show(&title),
        Commands::Options { field } => commands::options::run_options(field),
        Commands::Fav { action } => commands::fav::run_fav(action),
        Commands::Stats => commands::stats::run_stats(),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Configure logging. Normal runs print bare info-level messages; --verbose
/// adds debug messages with timestamps and targets, --quiet drops to warnings.
fn init_logger(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.init();
}
