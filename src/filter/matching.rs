use crate::model::{DifficultyCategory, Game, Platform, SpecsCategory};
use std::collections::BTreeSet;

pub const DEFAULT_MAX_PRICE: f64 = 90.0;
pub const PRICE_MIN: f64 = 0.0;
pub const PRICE_MAX: f64 = 90.0;
pub const PRICE_STEP: f64 = 5.0;

/// Five-axis filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameFilters {
    /// Inclusive ceiling, in the reference currency.
    pub max_price: f64,
    pub difficulties: BTreeSet<DifficultyCategory>,
    /// The hardware the user has: games needing this tier or less pass.
    pub specs_category: SpecsCategory,
    pub available_in_spanish: bool,
    /// A game passes if it runs on any one of these.
    pub platforms: BTreeSet<Platform>,
}

impl Default for GameFilters {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            difficulties: DifficultyCategory::ALL.into_iter().collect(),
            specs_category: SpecsCategory::Powerful,
            available_in_spanish: false,
            platforms: Platform::ALL.into_iter().collect(),
        }
    }
}

pub fn matches_price(game: &Game, max_price: f64) -> bool {
    game.price_value <= max_price
}

pub fn matches_difficulty(game: &Game, difficulties: &BTreeSet<DifficultyCategory>) -> bool {
    difficulties.contains(&game.difficulty_category)
}

/// Hierarchical: each selected tier includes every lower requirement tier.
pub fn matches_specs(game: &Game, selected: SpecsCategory) -> bool {
    game.specs_category <= selected
}

pub fn matches_language(game: &Game, available_in_spanish: bool) -> bool {
    !available_in_spanish || game.has_spanish
}

pub fn matches_platform(game: &Game, platforms: &BTreeSet<Platform>) -> bool {
    game.platforms.iter().any(|p| platforms.contains(p))
}

pub fn matches(game: &Game, filters: &GameFilters) -> bool {
    matches_price(game, filters.max_price)
        && matches_difficulty(game, &filters.difficulties)
        && matches_specs(game, filters.specs_category)
        && matches_language(game, filters.available_in_spanish)
        && matches_platform(game, &filters.platforms)
}

/// Stable filter: survivors keep their relative order.
pub fn filter_games(games: &[Game], filters: &GameFilters) -> Vec<Game> {
    games
        .iter()
        .filter(|game| matches(game, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LanguageCategory, PriceCategory};

    fn game(
        id: &str,
        price: f64,
        difficulty: DifficultyCategory,
        specs: SpecsCategory,
        platforms: &[Platform],
    ) -> Game {
        Game {
            id: id.into(),
            name: id.into(),
            price: format!("${price}"),
            price_value: price,
            price_category: PriceCategory::from_value(price),
            difficulty: difficulty.label().into(),
            difficulty_category: difficulty,
            specs: specs.label().into(),
            specs_category: specs,
            language: LanguageCategory::English.label().into(),
            language_category: LanguageCategory::English,
            platforms: platforms.to_vec(),
            has_spanish: false,
            description: String::new(),
            steam_url: String::new(),
            genres: None,
        }
    }

    fn with_language(mut g: Game, language: LanguageCategory) -> Game {
        g.language_category = language;
        g.has_spanish = language.satisfies_spanish();
        g
    }

    fn simple(id: &str) -> Game {
        game(id, 5.0, DifficultyCategory::Easy, SpecsCategory::Any, &[Platform::Windows])
    }

    fn with_specs(id: &str, specs: SpecsCategory) -> Game {
        game(id, 1.0, DifficultyCategory::Easy, specs, &[Platform::Windows])
    }

    #[test]
    fn defaults_accept_everything_within_price_range() {
        let filters = GameFilters::default();
        let g = game(
            "x",
            89.0,
            DifficultyCategory::Hardcore,
            SpecsCategory::Powerful,
            &[Platform::Linux],
        );
        assert!(matches(&g, &filters));
        let mut pricey = simple("y");
        pricey.price_value = 90.01;
        assert!(!matches(&pricey, &filters));
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let g = simple("a");
        assert!(matches_price(&g, 5.0));
        assert!(!matches_price(&g, 4.99));
    }

    #[test]
    fn specs_hierarchy() {
        let any = with_specs("a", SpecsCategory::Any);
        let powerful = with_specs("p", SpecsCategory::Powerful);
        let decent = with_specs("d", SpecsCategory::Decent);

        for tier in [SpecsCategory::Any, SpecsCategory::Decent, SpecsCategory::Powerful] {
            assert!(matches_specs(&any, tier));
        }
        assert!(!matches_specs(&powerful, SpecsCategory::Any));
        assert!(!matches_specs(&powerful, SpecsCategory::Decent));
        assert!(matches_specs(&powerful, SpecsCategory::Powerful));
        assert!(!matches_specs(&decent, SpecsCategory::Any));
        assert!(matches_specs(&decent, SpecsCategory::Decent));
    }

    #[test]
    fn language_axis() {
        let spanish = with_language(simple("s"), LanguageCategory::Spanish);
        let english = with_language(simple("e"), LanguageCategory::English);
        let na = with_language(simple("n"), LanguageCategory::NotApplicable);

        for g in [&spanish, &english, &na] {
            assert!(matches_language(g, false));
        }
        assert!(matches_language(&spanish, true));
        assert!(matches_language(&na, true));
        assert!(!matches_language(&english, true));
    }

    #[test]
    fn platform_axis_is_intersection() {
        let mut g = simple("g");
        g.platforms = vec![Platform::Windows, Platform::Linux];
        let mac_linux: BTreeSet<_> = [Platform::Mac, Platform::Linux].into_iter().collect();
        let mac_only: BTreeSet<_> = [Platform::Mac].into_iter().collect();
        assert!(matches_platform(&g, &mac_linux));
        assert!(!matches_platform(&g, &mac_only));
        assert!(!matches_platform(&g, &BTreeSet::new()));
    }

    #[test]
    fn difficulty_set_membership() {
        let g = simple("a");
        let casual_only: BTreeSet<_> = [DifficultyCategory::Casual].into_iter().collect();
        assert!(!matches_difficulty(&g, &casual_only));
        assert!(matches_difficulty(&g, &GameFilters::default().difficulties));
    }

    #[test]
    fn scenario_only_windows_record_survives() {
        let filters = GameFilters {
            max_price: 10.0,
            difficulties: [DifficultyCategory::Easy].into_iter().collect(),
            specs_category: SpecsCategory::Any,
            available_in_spanish: false,
            platforms: [Platform::Windows].into_iter().collect(),
        };
        let games = vec![
            game("win", 5.0, DifficultyCategory::Easy, SpecsCategory::Any, &[Platform::Windows]),
            game("lin", 5.0, DifficultyCategory::Easy, SpecsCategory::Any, &[Platform::Linux]),
        ];
        let result = filter_games(&games, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "win");
    }

    #[test]
    fn filtering_keeps_input_order() {
        let games: Vec<Game> = [
            (1.0, SpecsCategory::Powerful),
            (2.0, SpecsCategory::Any),
            (50.0, SpecsCategory::Any),
            (3.0, SpecsCategory::Decent),
            (4.0, SpecsCategory::Any),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (price, specs))| {
            game(&i.to_string(), price, DifficultyCategory::Casual, specs, &[Platform::Mac])
        })
        .collect();

        let filters = GameFilters {
            max_price: 10.0,
            specs_category: SpecsCategory::Decent,
            ..GameFilters::default()
        };
        let ids: Vec<String> = filter_games(&games, &filters)
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }
}
