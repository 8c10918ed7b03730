// Core structs: Game, GamesData, catalog payloads and error types
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    Free,
    Cheap,
    Normal,
    Expensive,
}

impl PriceCategory {
    /// Buckets a reference-currency price.
    /// Boundaries are half-open: 10 is `Normal`, 30 is `Expensive`.
    pub fn from_value(price: f64) -> Self {
        if price == 0.0 {
            Self::Free
        } else if price < 10.0 {
            Self::Cheap
        } else if price < 30.0 {
            Self::Normal
        } else {
            Self::Expensive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Gratis",
            Self::Cheap => "Barato",
            Self::Normal => "Normal",
            Self::Expensive => "Caro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyCategory {
    Easy,
    Casual,
    Hardcore,
}

impl DifficultyCategory {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Casual, Self::Hardcore];

    /// Maps an override tier (1..=3). Anything else falls back to `Casual`.
    pub fn from_tier(tier: u8) -> Self {
        match tier {
            1 => Self::Easy,
            3 => Self::Hardcore,
            _ => Self::Casual,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Principiante - Fácil de aprender",
            Self::Casual => "Casual - Moderadamente desafiante",
            Self::Hardcore => "Experimentado - Muy desafiante",
        }
    }
}

/// Hardware requirement tier. Variant order is the capability scale used by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecsCategory {
    Any,
    Decent,
    Powerful,
}

impl SpecsCategory {
    /// Maps an override tier (1..=3). Anything else falls back to `Any`.
    pub fn from_tier(tier: u8) -> Self {
        match tier {
            2 => Self::Decent,
            3 => Self::Powerful,
            _ => Self::Any,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Cualquier computador",
            Self::Decent => "Computador decente",
            Self::Powerful => "Computador potente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageCategory {
    Spanish,
    English,
    NotApplicable,
}

impl LanguageCategory {
    /// `NotApplicable` counts as satisfied: nothing in the game needs reading.
    pub fn satisfies_spanish(self) -> bool {
        matches!(self, Self::Spanish | Self::NotApplicable)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spanish => "Disponible en español",
            Self::English => "Disponible en inglés",
            Self::NotApplicable => "No require saber algún lenguaje en particular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Windows, Self::Mac, Self::Linux];

    pub fn label(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "macOS",
            Self::Linux => "Linux",
        }
    }
}

/// Normalized catalog record, the unit persisted and filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    pub price: String,
    pub price_value: f64,
    pub price_category: PriceCategory,
    pub difficulty: String,
    pub difficulty_category: DifficultyCategory,
    pub specs: String,
    pub specs_category: SpecsCategory,
    pub language: String,
    pub language_category: LanguageCategory,
    pub platforms: Vec<Platform>,
    pub has_spanish: bool,
    pub description: String,
    pub steam_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub total_games: usize,
    pub fetched_at: String,
    pub source: String,
}

/// Persisted artifact of one ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamesData {
    pub games: Vec<Game>,
    pub metadata: RunMetadata,
}

// Catalog API payloads. Every field is optional: the source guarantees nothing.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppDetailsEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<AppData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppData {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub price_overview: Option<PriceOverview>,
    pub is_free: Option<bool>,
    pub platforms: Option<PlatformFlags>,
    pub supported_languages: Option<String>,
    pub genres: Option<Vec<Genre>>,
}

/// Amounts are minor units (cents) of whatever currency the locale hint selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceOverview {
    #[serde(default, rename = "final")]
    pub final_amount: u64,
    #[serde(default, rename = "initial")]
    pub initial_amount: u64,
    #[serde(default)]
    pub final_formatted: String,
    #[serde(default)]
    pub initial_formatted: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformFlags {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "invalid format in {0}: expected an array of game config objects \
         with id, name, difficulty and pcRequirements"
    )]
    InvalidFormat(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error("no data found for game ID: {0}")]
    NoData(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed catalog response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response has no entry for game ID: {0}")]
    MissingApp(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid games data format")]
    InvalidFormat,
}
