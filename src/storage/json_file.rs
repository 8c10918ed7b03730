use crate::model::{Game, GamesData, RunMetadata, StorageError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SOURCE_LABEL: &str = "Steam Store API";

/// The games data file. Each save replaces the whole file.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves `games` stamped with the current time.
    pub fn save_games(&self, games: &[Game]) -> Result<(), StorageError> {
        self.save_games_at(games, Utc::now())
    }

    pub fn save_games_at(
        &self,
        games: &[Game],
        fetched_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let data = GamesData {
            games: games.to_vec(),
            metadata: RunMetadata {
                total_games: games.len(),
                fetched_at: fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                source: SOURCE_LABEL.to_string(),
            },
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json)?;

        info!("Games data saved to: {}", self.path.display());
        Ok(())
    }

    /// Reads a previously saved file. The top level must be an object with a `games` array.
    pub fn load_games(&self) -> Result<GamesData, StorageError> {
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        if !value.get("games").is_some_and(Value::is_array) {
            return Err(StorageError::InvalidFormat);
        }
        Ok(serde_json::from_value(value)?)
    }
}
