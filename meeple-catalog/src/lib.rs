//! Board-game catalog data model, normalization, filtering, and view-models.
//!
//! This crate is pure logic with no I/O: the upstream JSON is adapted into
//! canonical [`GameRecord`]s once at load time, and everything downstream
//! (filtering, option derivation, rendering) works on that shape. Local
//! persistence lives in `meeple-store` and network loading in `meeple-fetch`.

pub mod adapt;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod types;
pub mod view;

pub use adapt::{RawGameRecord, adapt_value};
pub use filter::{
    FilterCriteria, ParseRangeOptionError, ParseSortKeyError, RangeOption, SortKey, filter,
    sort_records,
};
pub use options::{
    SelectOption, age_options, difficulty_options, genre_options, location_options,
    player_options, playtime_options,
};
pub use types::{GameId, GameRecord, Keyed, PlayerRange};
pub use view::{CardView, DetailView};
