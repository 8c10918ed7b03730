use crate::model::FetchError;

/// Source of raw per-app catalog responses.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Raw response body for one app id.
    async fn fetch_app_details(&self, app_id: &str) -> Result<String, FetchError>;
}
