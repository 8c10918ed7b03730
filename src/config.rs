use crate::model::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "public/data/gameConfig.json";
pub const DEFAULT_OUTPUT_PATH: &str = "public/data/gamesData.json";
pub const STEAM_API_BASE: &str = "https://store.steampowered.com/api";
pub const DEFAULT_LOCALE: &str = "spanish";
pub const DELAY_BETWEEN_REQUESTS_MS: u64 = 100;

/// Manually curated per-game override.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfigItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// 1..=3. Missing or unusable values become 0, which maps to the default tier.
    #[serde(default, deserialize_with = "lenient_tier")]
    pub difficulty: u8,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub pc_requirements: u8,
    /// `null` and non-boolean values count as not waived.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub language_not_required: bool,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

fn lenient_tier<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|tier| u8::try_from(tier).ok())
        .unwrap_or(0))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_to_string(&value)
        .ok_or_else(|| serde::de::Error::custom("id must be a string or a number"))
}

fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Override lookup keyed by game id. Duplicate ids: the last entry wins.
#[derive(Debug, Default, Clone)]
pub struct ConfigIndex {
    entries: HashMap<String, GameConfigItem>,
}

impl ConfigIndex {
    pub fn from_items(items: Vec<GameConfigItem>) -> Self {
        let mut entries = HashMap::with_capacity(items.len());
        for item in items {
            entries.insert(item.id.clone(), item);
        }
        Self { entries }
    }

    /// Never fails: a missing or malformed file yields an empty index and a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_override_items(path) {
            Ok(items) => {
                let index = Self::from_items(items);
                info!("Loaded {} game overrides from {}", index.len(), path.display());
                index
            }
            Err(e) => {
                warn!("Could not load config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&GameConfigItem> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries are decoded one by one: an entry without a usable id is skipped, the rest are kept.
fn read_override_items(path: &Path) -> Result<Vec<GameConfigItem>, ConfigError> {
    let content = read_file(path)?;
    let raw: Vec<Value> = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })?;

    let mut items = Vec::with_capacity(raw.len());
    for (position, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<GameConfigItem>(value) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping game config entry #{}: {}", position, e),
        }
    }
    Ok(items)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the ordered id list. Accepts an array of override objects, a bare array of ids,
/// or `{ "gameIds": [...] }`.
pub fn load_game_ids(path: impl AsRef<Path>) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let json: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })?;
    parse_game_ids(&json).ok_or_else(|| ConfigError::InvalidFormat(path.display().to_string()))
}

fn parse_game_ids(json: &Value) -> Option<Vec<String>> {
    let list = match json {
        Value::Array(items) => items,
        Value::Object(map) => map.get("gameIds")?.as_array()?,
        _ => return None,
    };

    list.iter()
        .map(|item| match item {
            Value::Object(obj) => obj.get("id").and_then(id_to_string),
            other => id_to_string(other),
        })
        .collect()
}

/// Settings for talking to the catalog API.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_base: String,
    pub locale: String,
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: STEAM_API_BASE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            delay: Duration::from_millis(DELAY_BETWEEN_REQUESTS_MS),
            timeout: Duration::from_secs(10),
            user_agent: concat!("todos-jugamos/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
