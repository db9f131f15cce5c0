//! Location search backed by the open-meteo geocoding API.

use crate::providers::error::ProviderError;
use bon::bon;
use serde::{Deserialize, Serialize};

/// Default geocoding endpoint.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Queries shorter than this (after trimming) return no candidates without a
/// network round-trip.
pub const MIN_QUERY_LENGTH: usize = 2;

const DEFAULT_RESULT_LIMIT: usize = 10;

/// One location candidate, also the dashboard's notion of "where we are".
///
/// Field names match the geocoding API response, so candidates deserialize
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: None,
            admin1: None,
        }
    }

    /// "Name, Region, Country" display label; the region is skipped when it
    /// repeats the name.
    pub fn label(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref() {
            if admin1 != self.name {
                parts.push(admin1);
            }
        }
        if let Some(country) = self.country.as_deref() {
            parts.push(country);
        }
        parts.join(", ")
    }
}

impl Default for Location {
    /// The dashboard's initial location.
    fn default() -> Self {
        Self {
            name: "Berlin".into(),
            latitude: 52.54833,
            longitude: 13.407822,
            country: Some("Germany".into()),
            admin1: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Location>>,
}

/// Client for the open-meteo geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
    result_limit: usize,
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl GeocodingClient {
    /// Builds a client. `base_url` overrides the public endpoint (useful for
    /// tests); `result_limit` caps the number of candidates requested.
    #[builder]
    pub fn new(base_url: Option<String>, result_limit: Option<usize>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| GEOCODING_URL.to_string()),
            result_limit: result_limit.unwrap_or(DEFAULT_RESULT_LIMIT),
        }
    }

    /// Searches location candidates for `query`, best matches first.
    ///
    /// Trimmed queries shorter than [`MIN_QUERY_LENGTH`] characters resolve to
    /// an empty list immediately. An API answer with no `results` field is
    /// also an empty list, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LENGTH {
            return Ok(Vec::new());
        }

        let count = self.result_limit.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("name", query), ("count", count.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                url: self.base_url.clone(),
                source,
            })?;

        let url = response.url().to_string();
        if let Err(source) = response.error_for_status_ref() {
            return Err(ProviderError::HttpStatus {
                url,
                status: response.status(),
                source,
            });
        }

        let payload: GeocodingResponse = response
            .json()
            .await
            .map_err(|source| ProviderError::Decode { url, source })?;
        Ok(payload.results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_queries_short_circuit_without_network() {
        // base_url points nowhere; the guard must answer before any request.
        let client = GeocodingClient::builder()
            .base_url("http://127.0.0.1:0".to_string())
            .build();

        assert!(client.search("").await.unwrap().is_empty());
        assert!(client.search("b").await.unwrap().is_empty());
        assert!(client.search("  b  ").await.unwrap().is_empty());
    }

    #[test]
    fn candidates_deserialize_from_api_payload() {
        let payload = r#"{
            "results": [
                {
                    "id": 2950159,
                    "name": "Berlin",
                    "latitude": 52.52437,
                    "longitude": 13.41053,
                    "country": "Germany",
                    "admin1": "Land Berlin",
                    "population": 3426354
                },
                {
                    "id": 5083330,
                    "name": "Berlin",
                    "latitude": 43.46811,
                    "longitude": -71.18508,
                    "country": "United States"
                }
            ],
            "generationtime_ms": 0.7
        }"#;

        let response: GeocodingResponse = serde_json::from_str(payload).unwrap();
        let results = response.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label(), "Berlin, Land Berlin, Germany");
        assert_eq!(results[1].admin1, None);
    }

    #[test]
    fn empty_answer_is_not_an_error() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn label_skips_region_matching_the_name() {
        let location = Location {
            name: "Berlin".into(),
            latitude: 52.5,
            longitude: 13.4,
            country: Some("Germany".into()),
            admin1: Some("Berlin".into()),
        };
        assert_eq!(location.label(), "Berlin, Germany");
    }

    #[test]
    fn default_location_is_berlin() {
        let location = Location::default();
        assert_eq!(location.name, "Berlin");
        assert!((location.latitude - 52.54833).abs() < 1e-9);
    }
}
