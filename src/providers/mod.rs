pub mod error;
pub mod geocoding;
pub mod open_meteo;
