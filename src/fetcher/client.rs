use crate::config::FetchSettings;
use crate::fetcher::traits::CatalogClient;
use crate::model::FetchError;

use reqwest::Client;
use tracing::debug;

pub struct SteamClient {
    client: Client,
    api_base: String,
    locale: String,
}

impl SteamClient {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            locale: settings.locale.clone(),
        })
    }

    fn build_url(&self, app_id: &str) -> String {
        format!("{}/appdetails?appids={}&l={}", self.api_base, app_id, self.locale)
    }
}

#[async_trait::async_trait]
impl CatalogClient for SteamClient {
    async fn fetch_app_details(&self, app_id: &str) -> Result<String, FetchError> {
        let url = self.build_url(app_id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_id_and_locale() {
        let settings = FetchSettings {
            api_base: "https://example.test/api/".into(),
            ..FetchSettings::default()
        };
        let client = SteamClient::new(&settings).unwrap();
        assert_eq!(
            client.build_url("620"),
            "https://example.test/api/appdetails?appids=620&l=spanish"
        );
    }
}
