// Filtering of normalized games: per-axis predicates and the interactive filter state.

pub mod matching;
pub mod state;

pub use matching::{
    filter_games, matches, GameFilters, DEFAULT_MAX_PRICE, PRICE_MAX, PRICE_MIN, PRICE_STEP,
};
pub use state::FilterState;
