use crate::config::ConfigIndex;
use crate::fetcher::traits::CatalogClient;
use crate::model::{FetchError, Game};
use crate::normalizer::normalize_game;
use crate::parser::parse_app_details;

use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Fetches and normalizes one app. Exactly one request, no retry.
pub async fn fetch_game<C>(
    client: &C,
    index: &ConfigIndex,
    app_id: &str,
) -> Result<Game, FetchError>
where
    C: CatalogClient + ?Sized,
{
    info!("Fetching details for game ID: {}", app_id);
    let body = client.fetch_app_details(app_id).await?;
    let envelope = parse_app_details(&body, app_id)?;
    let game = normalize_game(app_id, &envelope, index.get(app_id))
        .ok_or_else(|| FetchError::NoData(app_id.to_string()))?;
    info!("✓ Successfully processed: {}", game.name);
    Ok(game)
}

/// Fetches every id in order, one at a time, pausing `delay` between attempts.
/// Failed ids are logged and left out; the rest keep their input order.
pub async fn fetch_all<C>(
    client: &C,
    index: &ConfigIndex,
    app_ids: &[String],
    delay: Duration,
) -> Vec<Game>
where
    C: CatalogClient + ?Sized,
{
    info!("Starting to fetch {} games...", app_ids.len());

    let mut games = Vec::with_capacity(app_ids.len());
    let mut failed = 0usize;

    for (i, app_id) in app_ids.iter().enumerate() {
        match fetch_game(client, index, app_id).await {
            Ok(game) => games.push(game),
            Err(e) => {
                failed += 1;
                warn!("Error fetching game {}: {}", app_id, e);
            }
        }

        if i + 1 < app_ids.len() {
            info!("Waiting {}ms before next request...", delay.as_millis());
            sleep(delay).await;
        }
    }

    info!(
        "Completed! Successfully fetched {} out of {} games ({} failed).",
        games.len(),
        app_ids.len(),
        failed
    );
    games
}
