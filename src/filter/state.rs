use crate::filter::matching::{filter_games, GameFilters, PRICE_MAX, PRICE_MIN, PRICE_STEP};
use crate::model::{DifficultyCategory, Game, Platform, SpecsCategory};
use std::collections::BTreeSet;
use tracing::debug;

/// Current filters plus the games they apply to. The filtered view is recomputed after every
/// change, so it always corresponds to the current `(games, filters)` pair.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    games: Vec<Game>,
    filters: GameFilters,
    filtered: Vec<Game>,
}

impl FilterState {
    pub fn new(games: Vec<Game>) -> Self {
        Self::with_filters(games, GameFilters::default())
    }

    pub fn with_filters(games: Vec<Game>, filters: GameFilters) -> Self {
        let filtered = filter_games(&games, &filters);
        Self {
            games,
            filters,
            filtered,
        }
    }

    pub fn filters(&self) -> &GameFilters {
        &self.filters
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn filtered_games(&self) -> &[Game] {
        &self.filtered
    }

    /// "N de M juegos".
    pub fn summary(&self) -> String {
        format!("{} de {} juegos", self.filtered.len(), self.games.len())
    }

    pub fn set_games(&mut self, games: Vec<Game>) {
        self.games = games;
        self.recompute();
    }

    /// Snapped to the nearest slider step and clamped into the slider range. NaN is ignored.
    pub fn update_max_price(&mut self, price: f64) {
        if price.is_nan() {
            return;
        }
        let snapped = (price / PRICE_STEP).round() * PRICE_STEP;
        let max_price = snapped.clamp(PRICE_MIN, PRICE_MAX);
        self.replace_filters(|prev| GameFilters { max_price, ..prev });
    }

    pub fn toggle_difficulty(&mut self, difficulty: DifficultyCategory) {
        self.replace_filters(|prev| GameFilters {
            difficulties: toggled(&prev.difficulties, difficulty),
            ..prev
        });
    }

    pub fn update_specs_category(&mut self, specs_category: SpecsCategory) {
        self.replace_filters(|prev| GameFilters {
            specs_category,
            ..prev
        });
    }

    pub fn toggle_available_in_spanish(&mut self) {
        self.replace_filters(|prev| GameFilters {
            available_in_spanish: !prev.available_in_spanish,
            ..prev
        });
    }

    pub fn toggle_platform(&mut self, platform: Platform) {
        self.replace_filters(|prev| GameFilters {
            platforms: toggled(&prev.platforms, platform),
            ..prev
        });
    }

    fn replace_filters(&mut self, update: impl FnOnce(GameFilters) -> GameFilters) {
        let next = update(self.filters.clone());
        self.filters = next;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter_games(&self.games, &self.filters);
        debug!("Filter view: {}", self.summary());
    }
}

fn toggled<T: Ord + Copy>(set: &BTreeSet<T>, value: T) -> BTreeSet<T> {
    let mut next = set.clone();
    if !next.remove(&value) {
        next.insert(value);
    }
    next
}
