//! Locally synthesized placeholder data for when the forecast fetch fails.
//!
//! The generator produces the same shape as a real provider fetch so every
//! downstream consumer (cursor, registry, colorizer) is exercised identically
//! in both paths. Output is deterministic per location: the RNG is seeded from
//! the coordinate bits, so repeated fallbacks for one location agree.

use crate::series::store::{SeriesError, SeriesStore};
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// 14 days of hourly samples, matching the provider's forecast window.
pub const SYNTHETIC_HOURS: usize = 336;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generates a placeholder hourly series starting at `start`.
///
/// Temperature follows a sinusoidal daily cycle around 15 °C with seeded
/// jitter; humidity, wind speed and wind direction are uniform draws in
/// realistic bounds. `hours` is clamped to at least 1.
pub fn synthetic_series(
    latitude: f64,
    longitude: f64,
    start: NaiveDateTime,
    hours: usize,
) -> Result<SeriesStore, SeriesError> {
    let hours = hours.max(1);
    let seed = latitude.to_bits() ^ longitude.to_bits().rotate_left(32);
    let mut rng = StdRng::seed_from_u64(seed);

    let timestamps: Vec<NaiveDateTime> =
        (0..hours).map(|i| start + Duration::hours(i as i64)).collect();

    let mut temperature = Vec::with_capacity(hours);
    let mut humidity = Vec::with_capacity(hours);
    let mut wind_speed = Vec::with_capacity(hours);
    let mut wind_direction = Vec::with_capacity(hours);

    for i in 0..hours {
        let daily_phase = i as f64 / 24.0 * TAU;
        temperature.push(Some(round1(
            daily_phase.sin() * 10.0 + 15.0 + rng.random_range(0.0..5.0),
        )));
        humidity.push(Some(rng.random_range(40.0_f64..80.0).round()));
        wind_speed.push(Some(round1(rng.random_range(0.0..25.0))));
        wind_direction.push(Some(rng.random_range(0.0_f64..360.0).round()));
    }

    SeriesStore::new(
        latitude,
        longitude,
        None,
        None,
        timestamps,
        temperature,
        humidity,
        wind_speed,
        wind_direction,
    )
}
