use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use todos_jugamos::config::{
    load_game_ids, ConfigIndex, FetchSettings, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH,
};
use todos_jugamos::fetcher::{fetch_all, SteamClient};
use todos_jugamos::storage::JsonStorage;
use tracing::{error, info};

/// Fetches Steam details for the configured games and writes the games data file.
#[derive(Debug, Parser)]
#[command(name = "todos-jugamos", version)]
struct Cli {
    /// Game config: array of {id, name, difficulty, pcRequirements, languageNotRequired?}
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output games data file
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Pause between catalog requests, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Locale hint sent to the catalog
    #[arg(long)]
    locale: Option<String>,

    /// Catalog API base URL
    #[arg(long)]
    api_base: Option<String>,
}

impl Cli {
    fn fetch_settings(&self) -> FetchSettings {
        let mut settings = FetchSettings::default();
        if let Some(ms) = self.delay_ms {
            settings.delay = Duration::from_millis(ms);
        }
        if let Some(locale) = &self.locale {
            settings.locale = locale.clone();
        }
        if let Some(base) = &self.api_base {
            settings.api_base = base.clone();
        }
        settings
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let cli = Cli::parse();

    exit_code(run(&cli).await)
}

/// Per-game failures never reach here; only a bad id list or an unwritable output does.
fn exit_code(result: Result<(), Box<dyn std::error::Error>>) -> ExitCode {
    match result {
        Ok(()) => {
            info!("✅ Process completed successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Steam Game Data Fetcher");
    info!("Input file: {}", cli.config.display());
    info!("Output file: {}", cli.output.display());

    let game_ids = load_game_ids(&cli.config)?;
    info!("Loaded {} game IDs", game_ids.len());

    // Overrides are optional; a bad file only costs the per-game tiers.
    let index = ConfigIndex::load(&cli.config);

    let settings = cli.fetch_settings();
    let client = SteamClient::new(&settings)?;

    let games = fetch_all(&client, &index, &game_ids, settings.delay).await;

    JsonStorage::new(&cli.output).save_games(&games)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::fs;
    use tempfile::tempdir;

    fn cli(config: &std::path::Path, output: &std::path::Path) -> Cli {
        Cli::try_parse_from([
            OsStr::new("todos-jugamos"),
            config.as_os_str(),
            output.as_os_str(),
            OsStr::new("--delay-ms"),
            OsStr::new("0"),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_point_at_public_data() {
        let cli = Cli::try_parse_from(["todos-jugamos"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.fetch_settings().delay, Duration::from_millis(100));
    }

    #[tokio::test]
    async fn bad_id_list_shape_exits_non_zero() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("gameConfig.json");
        let output = dir.path().join("gamesData.json");
        fs::write(&config, r#"{"games": []}"#).unwrap();

        let code = exit_code(run(&cli(&config, &output)).await);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn unwritable_output_exits_non_zero() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("gameConfig.json");
        fs::write(&config, "[]").unwrap();

        // The output path is an existing directory.
        let code = exit_code(run(&cli(&config, dir.path())).await);
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn empty_run_writes_output_and_succeeds() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("gameConfig.json");
        let output = dir.path().join("out/gamesData.json");
        fs::write(&config, "[]").unwrap();

        let code = exit_code(run(&cli(&config, &output)).await);
        assert_eq!(code, ExitCode::SUCCESS);
        let data = JsonStorage::new(&output).load_games().unwrap();
        assert_eq!(data.metadata.total_games, 0);
    }
}
