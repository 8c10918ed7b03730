// Steam appdetails response decoding
use crate::model::{AppDetailsEnvelope, ParserError};
use std::collections::HashMap;

/// The catalog answers with an object keyed by app id: `{ "<id>": { "success": .., "data": .. } }`.
pub fn parse_app_details(body: &str, app_id: &str) -> Result<AppDetailsEnvelope, ParserError> {
    let mut by_id: HashMap<String, AppDetailsEnvelope> = serde_json::from_str(body)?;
    by_id
        .remove(app_id)
        .ok_or_else(|| ParserError::MissingApp(app_id.to_string()))
}
