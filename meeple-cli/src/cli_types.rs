//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand, ValueEnum};

use meeple_catalog::{FilterCriteria, RangeOption, SortKey};

#[derive(Parser)]
#[command(name = "meeple")]
#[command(about = "Browse and filter a board game catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that narrow down the catalog.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Match titles and descriptions against this text (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Genre key (e.g., strategy, family); "all" disables the filter
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Player count: a number, "min-max", "N+", or "all"
    #[arg(short, long, default_value = "all")]
    pub players: RangeOption,

    /// Playtime in minutes: a number, "min-max", "N+", or "all"
    #[arg(short = 't', long, default_value = "all")]
    pub playtime: RangeOption,

    /// Location key (e.g., shelf-a); "all" disables the filter
    #[arg(short, long)]
    pub location: Option<String>,

    /// Difficulty key (e.g., easy, medium, hard); "all" disables the filter
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Only games with a minimum age of at least this
    #[arg(short = 'a', long)]
    pub min_age: Option<u32>,
}

impl FilterArgs {
    pub(crate) fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            genre: self.genre.clone(),
            players: self.players,
            playtime: self.playtime,
            location: self.location.clone(),
            difficulty: self.difficulty.clone(),
            min_age: self.min_age,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Download the catalog and cache it locally
    Fetch {
        /// Catalog URL (defaults to the bundled catalog)
        #[arg(long)]
        url: Option<String>,

        /// Re-download even if a cached catalog exists
        #[arg(short, long)]
        force: bool,
    },

    /// List games, optionally filtered and sorted
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order: title or rating
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Only show favorite games
        #[arg(short = 'F', long)]
        favorites: bool,
    },

    /// Show full details for a single game
    Show {
        /// Game title (exact, or unique partial match)
        title: String,
    },

    /// Print the selectable values for a filter field
    Options {
        /// Which filter field to list
        #[arg(value_enum)]
        field: OptionField,
    },

    /// Manage favorite games
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },

    /// Show catalog statistics
    Stats,
}

#[derive(Subcommand)]
pub(crate) enum FavAction {
    /// Add a game to the favorites
    Add {
        /// Game title (exact, or unique partial match)
        title: String,
    },

    /// Remove a game from the favorites
    Remove {
        /// Game title (exact, or unique partial match)
        title: String,
    },

    /// Toggle a game's favorite state
    Toggle {
        /// Game title (exact, or unique partial match)
        title: String,
    },

    /// List favorite games
    List,

    /// Remove all favorites
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OptionField {
    Genre,
    Players,
    Playtime,
    Location,
    Difficulty,
    Age,
}
