//! Polygon-region analytics and timeline synchronization over hourly weather
//! forecasts.
//!
//! The crate centers on [`Dashboard`], an owned state container binding
//! together the hourly [`SeriesStore`] for a location, the shared
//! [`TimelineCursor`], the [`RegionRegistry`] of user-drawn polygons and the
//! interactive [`DrawingSession`]. Forecast data comes from the open-meteo
//! API via [`ForecastClient`] (with a deterministic synthetic fallback), and
//! locations are found through [`GeocodingClient`].

mod dashboard;
mod drawing;
mod error;
mod geometry;
mod playback;
mod providers;
mod regions;
mod series;
mod timeline;

pub use error::MeteomapError;

pub use dashboard::*;
pub use drawing::*;
pub use geometry::*;
pub use playback::*;
pub use timeline::*;

pub use regions::colorizer::*;
pub use regions::region::*;
pub use regions::registry::RegionRegistry;

pub use series::store::*;
pub use series::synthetic::*;

pub use providers::error::ProviderError;
pub use providers::geocoding::*;
pub use providers::open_meteo::*;
