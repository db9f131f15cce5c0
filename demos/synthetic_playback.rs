//! Offline walkthrough: install a synthetic series, draw a region and sweep
//! the timeline with the playback ticker.

use meteomap::{
    synthetic_series, Dashboard, DataOrigin, LatLon, Location, MeteomapError, PlaybackSpeed,
    PlaybackTicker, SYNTHETIC_HOURS,
};

#[tokio::main]
async fn main() -> Result<(), MeteomapError> {
    let mut dashboard = Dashboard::builder().build();

    let location = Location::default();
    let ticket = dashboard.select_location(location.clone());
    let store = synthetic_series(
        location.latitude,
        location.longitude,
        chrono::Utc::now().naive_utc(),
        SYNTHETIC_HOURS,
    )?;
    dashboard.install_series(ticket, store, DataOrigin::Synthetic);

    dashboard.start_drawing();
    dashboard.handle_click(LatLon(52.50, 13.35))?;
    dashboard.handle_click(LatLon(52.60, 13.35))?;
    dashboard.handle_click(LatLon(52.55, 13.50))?;
    dashboard.handle_double_click();

    dashboard.set_playback_speed(PlaybackSpeed::Quadruple);
    dashboard.toggle_playback();
    let mut ticker = PlaybackTicker::new(dashboard.cursor().speed());

    for _ in 0..6 {
        ticker.tick().await;
        dashboard.tick();
        for view in dashboard.region_views() {
            println!(
                "[hour {}] {} | fill {}",
                dashboard.cursor().current_index(),
                view.popup_summary.replace('\n', " | "),
                view.fill_color
            );
        }
    }

    Ok(())
}
