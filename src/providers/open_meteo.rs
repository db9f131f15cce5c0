//! Hourly forecast fetching from the open-meteo API.
//!
//! One successful fetch yields one validated [`SeriesStore`]; the caller
//! replaces its store wholesale and never mutates the previous one.

use crate::providers::error::ProviderError;
use crate::providers::geocoding::Location;
use crate::series::store::{SeriesStore, WeatherChannel};
use bon::bon;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Default forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Two-week forecast window requested by default.
pub const DEFAULT_FORECAST_DAYS: u8 = 14;

/// The API accepts at most this many past days in one request.
pub const MAX_PAST_DAYS: u8 = 14;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    elevation: Option<f64>,
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<f64>>,
    wind_speed_10m: Vec<Option<f64>>,
    wind_direction_10m: Vec<Option<f64>>,
}

impl ForecastResponse {
    fn into_store(self) -> Result<SeriesStore, ProviderError> {
        let timestamps = self
            .hourly
            .time
            .iter()
            .map(|value| parse_timestamp(value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeriesStore::new(
            self.latitude,
            self.longitude,
            self.timezone,
            self.elevation,
            timestamps,
            self.hourly.temperature_2m,
            self.hourly.relative_humidity_2m,
            self.hourly.wind_speed_10m,
            self.hourly.wind_direction_10m,
        )?)
    }
}

// With timezone=auto the API reports local wall-clock times without an offset
// suffix, usually minute precision.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ProviderError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|source| ProviderError::TimestampParse {
            value: value.to_string(),
            source,
        })
}

/// Client for the open-meteo forecast API.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
    forecast_days: u8,
    past_days: u8,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl ForecastClient {
    /// Builds a client.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. Endpoint override, useful for tests.
    /// * `.forecast_days(u8)`: Optional. Forecast window, defaults to 14.
    /// * `.past_days(u8)`: Optional. Trailing history to include, defaults to
    ///   0, capped at [`MAX_PAST_DAYS`].
    #[builder]
    pub fn new(base_url: Option<String>, forecast_days: Option<u8>, past_days: Option<u8>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| FORECAST_URL.to_string()),
            forecast_days: forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS),
            past_days: past_days.unwrap_or(0).min(MAX_PAST_DAYS),
        }
    }

    /// Fetches the hourly series for `location` across all four channels with
    /// `timezone=auto`.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Network`]/[`ProviderError::HttpStatus`] for transport
    /// failures, [`ProviderError::Decode`]/[`ProviderError::TimestampParse`]
    /// for malformed payloads, and [`ProviderError::Series`] when the payload
    /// violates the store invariants (misaligned channels, unordered
    /// timestamps).
    pub async fn fetch_series(&self, location: &Location) -> Result<SeriesStore, ProviderError> {
        let hourly = WeatherChannel::ALL
            .iter()
            .map(|c| c.api_param())
            .collect::<Vec<_>>()
            .join(",");

        let mut query = vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("hourly", hourly),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ];
        if self.past_days > 0 {
            query.push(("past_days", self.past_days.to_string()));
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
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

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|source| ProviderError::Decode { url, source })?;
        payload.into_store()
    }
}
