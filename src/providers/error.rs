use crate::series::store::SeriesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network request failed for {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse timestamp '{value}'")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Series(#[from] SeriesError),
}
