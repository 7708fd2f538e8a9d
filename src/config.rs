// Configuration: the API credential and endpoint are resolved once at the
// process boundary and handed to `ApiClient` as a plain value.

use crate::error::ConvertError;

/// Endpoint root used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.freecurrencyapi.com/v1";

/// Explicit configuration injected into the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Build a configuration from already-resolved values. An absent or
    /// blank key is rejected before anything touches the network.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self, ConvertError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConvertError::MissingApiKey),
        };
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Config {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
