//! The immutable-per-fetch hourly series consumed by every other component.
//!
//! A [`SeriesStore`] is created atomically from one successful provider fetch
//! (or from the synthetic fallback generator), read everywhere, and replaced
//! wholesale when a new location is loaded. It is never mutated in place.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One named hourly numeric series tracked by the dashboard.
///
/// The variants mirror the open-meteo hourly parameters the dashboard
/// requests; [`WeatherChannel::api_param`] yields the exact query-string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherChannel {
    Temperature,
    Humidity,
    WindSpeed,
    WindDirection,
}

impl WeatherChannel {
    /// Every channel, in the order they are requested from the provider.
    pub const ALL: [WeatherChannel; 4] = [
        WeatherChannel::Temperature,
        WeatherChannel::Humidity,
        WeatherChannel::WindSpeed,
        WeatherChannel::WindDirection,
    ];

    /// The open-meteo hourly parameter name for this channel.
    pub fn api_param(&self) -> &'static str {
        match self {
            WeatherChannel::Temperature => "temperature_2m",
            WeatherChannel::Humidity => "relative_humidity_2m",
            WeatherChannel::WindSpeed => "wind_speed_10m",
            WeatherChannel::WindDirection => "wind_direction_10m",
        }
    }

    /// Human-readable label for UI surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherChannel::Temperature => "Temperature",
            WeatherChannel::Humidity => "Humidity",
            WeatherChannel::WindSpeed => "Wind Speed",
            WeatherChannel::WindDirection => "Wind Direction",
        }
    }

    /// Display unit for samples of this channel.
    pub fn unit(&self) -> &'static str {
        match self {
            WeatherChannel::Temperature => "°C",
            WeatherChannel::Humidity => "%",
            WeatherChannel::WindSpeed => "km/h",
            WeatherChannel::WindDirection => "°",
        }
    }
}

impl fmt::Display for WeatherChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_param())
    }
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("series has no samples")]
    Empty,

    #[error("channel '{channel}' has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: WeatherChannel,
        expected: usize,
        found: usize,
    },

    #[error("timestamps not strictly increasing at index {index}")]
    TimestampsNotIncreasing { index: usize },
}

/// Hourly samples for one location, index-aligned across all channels.
///
/// Individual samples are `Option<f64>`: the provider may report gaps, and
/// the statistics recompute skips missing or non-finite values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesStore {
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
    elevation: Option<f64>,
    timestamps: Vec<NaiveDateTime>,
    temperature: Vec<Option<f64>>,
    humidity: Vec<Option<f64>>,
    wind_speed: Vec<Option<f64>>,
    wind_direction: Vec<Option<f64>>,
}

impl SeriesStore {
    /// Validates and assembles a store from per-channel sample vectors.
    ///
    /// # Errors
    ///
    /// [`SeriesError::Empty`] for a zero-length series,
    /// [`SeriesError::ChannelLengthMismatch`] when any channel's length differs
    /// from the timestamp count, and [`SeriesError::TimestampsNotIncreasing`]
    /// when consecutive timestamps fail to strictly increase.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: Option<String>,
        elevation: Option<f64>,
        timestamps: Vec<NaiveDateTime>,
        temperature: Vec<Option<f64>>,
        humidity: Vec<Option<f64>>,
        wind_speed: Vec<Option<f64>>,
        wind_direction: Vec<Option<f64>>,
    ) -> Result<Self, SeriesError> {
        let expected = timestamps.len();
        if expected == 0 {
            return Err(SeriesError::Empty);
        }
        for (channel, samples) in [
            (WeatherChannel::Temperature, &temperature),
            (WeatherChannel::Humidity, &humidity),
            (WeatherChannel::WindSpeed, &wind_speed),
            (WeatherChannel::WindDirection, &wind_direction),
        ] {
            if samples.len() != expected {
                return Err(SeriesError::ChannelLengthMismatch {
                    channel,
                    expected,
                    found: samples.len(),
                });
            }
        }
        if let Some(index) = timestamps.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SeriesError::TimestampsNotIncreasing { index: index + 1 });
        }

        Ok(Self {
            latitude,
            longitude,
            timezone,
            elevation,
            timestamps,
            temperature,
            humidity,
            wind_speed,
            wind_direction,
        })
    }

    /// Number of hourly samples per channel.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// A store is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn timestamp(&self, index: usize) -> Option<NaiveDateTime> {
        self.timestamps.get(index).copied()
    }

    /// The full sample vector for one channel.
    pub fn channel(&self, channel: WeatherChannel) -> &[Option<f64>] {
        match channel {
            WeatherChannel::Temperature => &self.temperature,
            WeatherChannel::Humidity => &self.humidity,
            WeatherChannel::WindSpeed => &self.wind_speed,
            WeatherChannel::WindDirection => &self.wind_direction,
        }
    }

    /// The sample at `index` for `channel`, if present and finite.
    pub fn sample(&self, channel: WeatherChannel, index: usize) -> Option<f64> {
        self.channel(channel)
            .get(index)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }
}
