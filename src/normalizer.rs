use crate::config::GameConfigItem;
use crate::model::{
    AppData, AppDetailsEnvelope, DifficultyCategory, Game, LanguageCategory, Platform,
    PlatformFlags, PriceCategory, PriceOverview, SpecsCategory,
};
use crate::utils::{steam_url, truncate_chars, COP_RATE};
use tracing::debug;

const COP_MARKER: &str = "COL$";
const DESCRIPTION_PREVIEW_CHARS: usize = 150;
const NO_DESCRIPTION: &str = "Sin descripción disponible";
const UNKNOWN_NAME: &str = "Unknown Game";

/// Builds the canonical record for one app.
/// `None` when the catalog reported failure or sent no payload.
pub fn normalize_game(
    id: &str,
    envelope: &AppDetailsEnvelope,
    entry: Option<&GameConfigItem>,
) -> Option<Game> {
    if !envelope.success {
        return None;
    }
    let game = envelope.data.as_ref()?;

    let (price, price_value) = extract_price(game);
    let difficulty_category = entry
        .map(|e| DifficultyCategory::from_tier(e.difficulty))
        .unwrap_or(DifficultyCategory::Casual);
    let specs_category = entry
        .map(|e| SpecsCategory::from_tier(e.pc_requirements))
        .unwrap_or(SpecsCategory::Any);
    let language_category = language_category(
        game.supported_languages.as_deref(),
        entry.is_some_and(|e| e.language_not_required),
    );

    Some(Game {
        id: id.to_string(),
        name: non_empty(game.name.as_deref())
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        price,
        price_value,
        price_category: PriceCategory::from_value(price_value),
        difficulty: difficulty_category.label().to_string(),
        difficulty_category,
        specs: specs_category.label().to_string(),
        specs_category,
        language: language_category.label().to_string(),
        language_category,
        platforms: platforms(game.platforms.as_ref()),
        has_spanish: language_category.satisfies_spanish(),
        description: description(game),
        steam_url: steam_url(id),
        genres: genres(game),
    })
}

/// Display string and reference-currency value.
///
/// The source currency is inferred from the formatted string: a `COL$` display means pesos
/// and the value is divided by [`COP_RATE`]. This breaks silently if the catalog changes its
/// formatting, since no currency code is available in the payload.
fn extract_price(game: &AppData) -> (String, f64) {
    match &game.price_overview {
        Some(overview) => {
            let display = display_price(overview);
            let minor = [overview.final_amount, overview.initial_amount]
                .into_iter()
                .find(|&amount| amount > 0)
                .unwrap_or(0);
            let major = minor as f64 / 100.0;
            let value = if display.contains(COP_MARKER) {
                major / COP_RATE
            } else {
                major
            };
            (display, value)
        }
        None if game.is_free == Some(true) => ("Free".to_string(), 0.0),
        None => {
            debug!("No price block and no free flag, treating as free");
            ("Free".to_string(), 0.0)
        }
    }
}

fn display_price(overview: &PriceOverview) -> String {
    [overview.final_formatted.as_str(), overview.initial_formatted.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

fn language_category(supported: Option<&str>, language_not_required: bool) -> LanguageCategory {
    if language_not_required {
        return LanguageCategory::NotApplicable;
    }
    let Some(languages) = supported else {
        return LanguageCategory::English;
    };
    let languages = languages.to_lowercase();
    if languages.contains("spanish") || languages.contains("español") {
        LanguageCategory::Spanish
    } else {
        LanguageCategory::English
    }
}

fn platforms(flags: Option<&PlatformFlags>) -> Vec<Platform> {
    let Some(flags) = flags else {
        return vec![Platform::Windows];
    };
    let found: Vec<Platform> = [
        (flags.windows, Platform::Windows),
        (flags.mac, Platform::Mac),
        (flags.linux, Platform::Linux),
    ]
    .into_iter()
    .filter_map(|(set, platform)| set.then_some(platform))
    .collect();

    if found.is_empty() {
        vec![Platform::Windows]
    } else {
        found
    }
}

fn description(game: &AppData) -> String {
    if let Some(short) = non_empty(game.short_description.as_deref()) {
        return short.to_string();
    }
    if let Some(long) = non_empty(game.detailed_description.as_deref()) {
        return format!("{}...", truncate_chars(long, DESCRIPTION_PREVIEW_CHARS));
    }
    NO_DESCRIPTION.to_string()
}

fn genres(game: &AppData) -> Option<Vec<String>> {
    let names: Vec<String> = game
        .genres
        .iter()
        .flatten()
        .map(|g| g.description.clone())
        .collect();
    (!names.is_empty()).then_some(names)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
