// Error taxonomy: every failure in the tool is fatal, so these variants
// exist to carry enough context (the redacted URL, the offending input)
// to reproduce the problem from the diagnostic line alone.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No API key found. Set it in the API_KEY environment variable or pass --api-key.")]
    MissingApiKey,
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP response code {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Error unmarshalling {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot convert amount {input:?} to a number")]
    Amount { input: String },
}
