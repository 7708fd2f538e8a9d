// API client module: a small blocking HTTP client for the currency data
// service. Two endpoints are used, `/currencies` for the catalog and
// `/latest` for exchange rates. Every call is a single attempt; callers
// treat any error as fatal.

use crate::config::Config;
use crate::error::ConvertError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// Currency metadata as returned by the `/currencies` endpoint. Only
/// `code` and `name` are used downstream; the formatting fields are kept
/// so the shape mirrors the service.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Currency {
    pub symbol: String,
    pub name: String,
    pub symbol_native: String,
    pub decimal_digits: i32,
    pub rounding: i32,
    pub code: String,
    pub name_plural: String,
}

/// Body of the `/currencies` endpoint, keyed by currency code.
#[derive(Deserialize, Debug)]
pub struct CurrencyListResponse {
    pub data: HashMap<String, Currency>,
}

/// Body of the `/latest` endpoint: currency code to rate against the base.
#[derive(Deserialize, Debug)]
pub struct ConversionResponse {
    pub data: HashMap<String, f64>,
}

/// Holds a reqwest blocking client together with the injected
/// configuration (credential and endpoint root).
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create a client for the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, config })
    }

    /// Fetch the full currency catalog.
    pub fn currencies(&self) -> Result<CurrencyListResponse, ConvertError> {
        self.get_json("currencies", &[("apikey", self.config.api_key.as_str())])
    }

    /// Fetch the rates of `targets` relative to `base`. The targets are
    /// sent as one comma-joined parameter.
    pub fn latest(&self, base: &str, targets: &[String]) -> Result<ConversionResponse, ConvertError> {
        let currencies = targets.join(",");
        self.get_json(
            "latest",
            &[
                ("apikey", self.config.api_key.as_str()),
                ("base_currency", base),
                ("currencies", currencies.as_str()),
            ],
        )
    }

    /// GET `<base_url>/<path>` and decode the JSON body. Anything other
    /// than `200 OK` is an error.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ConvertError> {
        let endpoint = format!("{}/{}", self.config.base_url, path);
        let request = self
            .client
            .get(&endpoint)
            .query(query)
            .build()
            .map_err(|e| ConvertError::Transport {
                url: endpoint.clone(),
                source: e.without_url(),
            })?;
        let url = redact(request.url());
        log::debug!("GET {}", url);

        let res = self
            .client
            .execute(request)
            .map_err(|e| ConvertError::Transport {
                url: url.clone(),
                source: e.without_url(),
            })?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(ConvertError::Status { url, status });
        }
        let body = res.text().map_err(|e| ConvertError::Transport {
            url: url.clone(),
            source: e.without_url(),
        })?;
        serde_json::from_str(&body).map_err(|source| ConvertError::Decode { url, source })
    }
}

/// Render a request URL for diagnostics with the credential masked.
pub fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}
