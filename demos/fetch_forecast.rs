//! Fetches a live two-week forecast for the first geocoding hit and prints
//! the values under the playhead.

use meteomap::{Dashboard, MeteomapError, WeatherChannel};

#[tokio::main]
async fn main() -> Result<(), MeteomapError> {
    let mut dashboard = Dashboard::builder().build();

    let candidates = dashboard.search_locations("Berlin").await?;
    let location = candidates.into_iter().next().unwrap_or_default();
    println!("Loading forecast for {}", location.label());

    let origin = dashboard.load_location(location).await?;
    println!("Series installed ({origin:?}), {} hours", dashboard.cursor().len());

    if let Some(timestamp) = dashboard.current_timestamp() {
        println!("Current hour: {timestamp}");
    }
    for channel in WeatherChannel::ALL {
        match dashboard.current_sample(channel) {
            Some(value) => println!("{}: {:.1} {}", channel.label(), value, channel.unit()),
            None => println!("{}: no sample", channel.label()),
        }
    }

    Ok(())
}
