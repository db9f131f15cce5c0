//! The dashboard's single owned state container.
//!
//! One `Dashboard` instance holds the series store, the timeline cursor, the
//! region registry and the drawing session, and is the only writer to each of
//! them. The UI layer talks exclusively through the mutators here, which keep
//! the synchronization contract: an accepted cursor mutation and its
//! statistics recompute happen in one synchronous step, so no renderer can
//! observe one without the other.

use crate::drawing::{DrawEvent, DrawingSession, DrawingState};
use crate::error::MeteomapError;
use crate::geometry::LatLon;
use crate::providers::geocoding::{GeocodingClient, Location};
use crate::providers::open_meteo::ForecastClient;
use crate::regions::colorizer::{region_fill_color, REGION_PALETTE};
use crate::regions::region::{Region, RegionId, RegionUpdate, Threshold};
use crate::regions::registry::{stats_at, RegionRegistry};
use crate::series::store::{SeriesStore, WeatherChannel};
use crate::series::synthetic::{synthetic_series, SYNTHETIC_HOURS};
use crate::timeline::{PlaybackSpeed, TimelineCursor, TimelineMode};
use bon::bon;
use chrono::{NaiveDateTime, Timelike, Utc};
use rand::Rng;

/// Where the currently installed series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fetched from the forecast provider.
    Remote,
    /// Locally synthesized after a fetch failure; an advisory, not an error.
    Synthetic,
}

/// Handle tying an in-flight fetch to the location selection that started it.
/// A ticket from a superseded selection can no longer install its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What one routed click did to the drawing workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No drawing in progress; the click was not consumed.
    Ignored,
    /// Vertex accepted; `count` vertices held.
    PointAdded { count: usize },
    /// A polygon was completed and registered.
    RegionCreated(RegionId),
    /// The completed polygon overlaps an existing region; awaiting
    /// [`Dashboard::resolve_overlap`].
    OverlapConflict,
}

/// Per-region render description handed to the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView {
    pub id: RegionId,
    pub vertices: Vec<LatLon>,
    /// Outline color, fixed at creation.
    pub display_color: String,
    /// Fill color from the threshold colorizer at the current cursor.
    pub fill_color: String,
    pub popup_summary: String,
}

// Neutral mid-scale value for the colorizer when no sample is available at
// all (no series installed yet).
const FALLBACK_TEMPERATURE: f64 = 15.0;

pub struct Dashboard {
    forecast: ForecastClient,
    geocoder: GeocodingClient,
    location: Location,
    origin: Option<DataOrigin>,
    series: Option<SeriesStore>,
    cursor: TimelineCursor,
    regions: RegionRegistry,
    drawing: DrawingSession,
    fetch_seq: u64,
}

#[bon]
impl Dashboard {
    /// Builds a dashboard. All parts are optional: provider clients default to
    /// the public endpoints and the location defaults to Berlin. No fetch
    /// happens until [`Dashboard::load_location`] (or the
    /// [`Dashboard::select_location`] / [`Dashboard::install_series`] pair) is
    /// called.
    #[builder]
    pub fn new(
        forecast: Option<ForecastClient>,
        geocoder: Option<GeocodingClient>,
        location: Option<Location>,
    ) -> Self {
        Self {
            forecast: forecast.unwrap_or_default(),
            geocoder: geocoder.unwrap_or_default(),
            location: location.unwrap_or_default(),
            origin: None,
            series: None,
            cursor: TimelineCursor::new(0),
            regions: RegionRegistry::new(),
            drawing: DrawingSession::new(),
            fetch_seq: 0,
        }
    }
}

impl Dashboard {
    // ---- location & series lifecycle ----

    /// Switches to `location` and invalidates every earlier fetch: the
    /// returned ticket is the only one [`install_series`] will now accept.
    /// The drawing session drops to idle and the previous series is
    /// discarded; drawn regions survive with their last statistics.
    ///
    /// [`install_series`]: Dashboard::install_series
    pub fn select_location(&mut self, location: Location) -> FetchTicket {
        self.fetch_seq += 1;
        self.location = location;
        self.series = None;
        self.origin = None;
        self.cursor = TimelineCursor::new(0);
        self.drawing.reset();
        FetchTicket(self.fetch_seq)
    }

    /// Installs a fetched series, unless a newer location selection has
    /// superseded `ticket`: a late response must not overwrite fresher
    /// state. On install the cursor is rebuilt over the new series length and
    /// all region statistics recompute immediately.
    pub fn install_series(
        &mut self,
        ticket: FetchTicket,
        store: SeriesStore,
        origin: DataOrigin,
    ) -> bool {
        if ticket.0 != self.fetch_seq {
            log::warn!(
                "dropping stale series install (ticket {} superseded by {})",
                ticket.0,
                self.fetch_seq
            );
            return false;
        }
        self.cursor = TimelineCursor::new(store.len());
        self.series = Some(store);
        self.origin = Some(origin);
        self.recompute();
        true
    }

    /// Selects `location` and loads its hourly series, substituting the
    /// synthetic generator when the provider fails. The dashboard is never
    /// left without data after this call; the returned [`DataOrigin`] says
    /// which path was taken.
    pub async fn load_location(&mut self, location: Location) -> Result<DataOrigin, MeteomapError> {
        let ticket = self.select_location(location);
        let origin = match self.forecast.fetch_series(&self.location).await {
            Ok(store) => {
                self.install_series(ticket, store, DataOrigin::Remote);
                DataOrigin::Remote
            }
            Err(err) => {
                log::warn!(
                    "forecast fetch failed for '{}', substituting synthetic data: {err}",
                    self.location.name
                );
                let store = synthetic_series(
                    self.location.latitude,
                    self.location.longitude,
                    current_hour(),
                    SYNTHETIC_HOURS,
                )?;
                self.install_series(ticket, store, DataOrigin::Synthetic);
                DataOrigin::Synthetic
            }
        };
        Ok(origin)
    }

    /// Location candidates for a search-box query.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>, MeteomapError> {
        Ok(self.geocoder.search(query).await?)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn data_origin(&self) -> Option<DataOrigin> {
        self.origin
    }

    pub fn series(&self) -> Option<&SeriesStore> {
        self.series.as_ref()
    }

    // ---- timeline mutators (each accepted change recomputes statistics) ----

    pub fn cursor(&self) -> &TimelineCursor {
        &self.cursor
    }

    pub fn set_current_index(&mut self, index: usize) -> bool {
        let accepted = self.cursor.set_current_index(index);
        if accepted {
            self.recompute();
        }
        accepted
    }

    pub fn set_range(&mut self, start: usize, end: usize) -> bool {
        let accepted = self.cursor.set_range(start, end);
        if accepted {
            self.recompute();
        }
        accepted
    }

    pub fn set_mode(&mut self, mode: TimelineMode) {
        self.cursor.set_mode(mode);
        self.recompute();
    }

    pub fn toggle_playback(&mut self) {
        self.cursor.toggle_playback();
    }

    /// Returns true when the cadence changed, meaning the caller's
    /// [`crate::PlaybackTicker`] must be replaced.
    pub fn set_playback_speed(&mut self, speed: PlaybackSpeed) -> bool {
        self.cursor.set_speed(speed)
    }

    /// One playback step, driven by the UI's ticker while playing.
    pub fn tick(&mut self) -> bool {
        let advanced = self.cursor.tick();
        if advanced {
            self.recompute();
        }
        advanced
    }

    pub fn jump_to_start(&mut self) {
        self.cursor.jump_to_start();
        self.recompute();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor.jump_to_end();
        self.recompute();
    }

    pub fn step_back_day(&mut self) {
        self.cursor.step_back_day();
        self.recompute();
    }

    pub fn step_forward_day(&mut self) {
        self.cursor.step_forward_day();
        self.recompute();
    }

    // ---- drawing workflow ----

    pub fn drawing_state(&self) -> DrawingState {
        self.drawing.state()
    }

    /// Vertices of the in-progress polygon, for the preview layer.
    pub fn drawing_points(&self) -> &[LatLon] {
        self.drawing.points()
    }

    pub fn start_drawing(&mut self) {
        self.drawing.start();
    }

    pub fn cancel_drawing(&mut self) {
        self.drawing.cancel();
    }

    /// Routes a map click into the drawing session.
    pub fn handle_click(&mut self, point: LatLon) -> Result<ClickOutcome, MeteomapError> {
        let event = self.drawing.add_point(point, self.regions.regions())?;
        Ok(self.apply_draw_event(event))
    }

    /// Routes a double-click: manual completion of the in-progress polygon.
    pub fn handle_double_click(&mut self) -> ClickOutcome {
        let event = self.drawing.finish(self.regions.regions());
        self.apply_draw_event(event)
    }

    /// Resolves a pending overlap conflict; `force` registers the region
    /// anyway, `false` discards the held vertices.
    pub fn resolve_overlap(&mut self, force: bool) -> Option<RegionId> {
        let points = self.drawing.confirm(force)?;
        Some(self.create_region(points))
    }

    fn apply_draw_event(&mut self, event: DrawEvent) -> ClickOutcome {
        match event {
            DrawEvent::Ignored => ClickOutcome::Ignored,
            DrawEvent::PointAdded { count } => ClickOutcome::PointAdded { count },
            DrawEvent::OverlapConflict => ClickOutcome::OverlapConflict,
            DrawEvent::Polygon(points) => ClickOutcome::RegionCreated(self.create_region(points)),
        }
    }

    fn create_region(&mut self, vertices: Vec<LatLon>) -> RegionId {
        let id = self.regions.mint_id();
        let color = REGION_PALETTE[rand::rng().random_range(0..REGION_PALETTE.len())];
        let created_temperature = self
            .series
            .as_ref()
            .and_then(|s| s.sample(WeatherChannel::Temperature, self.cursor.current_index()));

        let mut region = Region::new(id, vertices, color, created_temperature);
        if let Some(store) = &self.series {
            region.stats = stats_at(store, region.data_channel, self.cursor.current_index());
        }
        self.regions.add(region);
        id
    }

    // ---- region operations ----

    pub fn regions(&self) -> &[Region] {
        self.regions.regions()
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn remove_region(&mut self, id: RegionId) {
        self.regions.remove(id);
    }

    /// Rebinds a region to another channel and refreshes its statistics so
    /// the snapshot never describes the previous channel.
    pub fn set_region_channel(&mut self, id: RegionId, channel: WeatherChannel) -> bool {
        let touched = self.regions.update(
            id,
            RegionUpdate {
                data_channel: Some(channel),
                ..Default::default()
            },
        );
        if touched {
            if let Some(store) = &self.series {
                self.regions.recompute_one(id, store, &self.cursor);
            }
        }
        touched
    }

    pub fn set_region_thresholds(&mut self, id: RegionId, thresholds: Vec<Threshold>) -> bool {
        self.regions.update(
            id,
            RegionUpdate {
                thresholds: Some(thresholds),
                ..Default::default()
            },
        )
    }

    pub fn add_threshold(&mut self, id: RegionId, threshold: Threshold) -> bool {
        let Some(region) = self.regions.get(id) else {
            return false;
        };
        let mut thresholds = region.thresholds.clone();
        thresholds.push(threshold);
        self.set_region_thresholds(id, thresholds)
    }

    pub fn update_threshold(&mut self, id: RegionId, index: usize, threshold: Threshold) -> bool {
        let Some(region) = self.regions.get(id) else {
            return false;
        };
        if index >= region.thresholds.len() {
            return false;
        }
        let mut thresholds = region.thresholds.clone();
        thresholds[index] = threshold;
        self.set_region_thresholds(id, thresholds)
    }

    pub fn remove_threshold(&mut self, id: RegionId, index: usize) -> bool {
        let Some(region) = self.regions.get(id) else {
            return false;
        };
        if index >= region.thresholds.len() {
            return false;
        }
        let mut thresholds = region.thresholds.clone();
        thresholds.remove(index);
        self.set_region_thresholds(id, thresholds)
    }

    // ---- render surface ----

    /// The sample under the playhead for `channel`.
    pub fn current_sample(&self, channel: WeatherChannel) -> Option<f64> {
        self.series
            .as_ref()
            .and_then(|s| s.sample(channel, self.cursor.current_index()))
    }

    /// Timestamp under the playhead.
    pub fn current_timestamp(&self) -> Option<NaiveDateTime> {
        self.series
            .as_ref()
            .and_then(|s| s.timestamp(self.cursor.current_index()))
    }

    /// Render descriptions for every region at the current cursor.
    pub fn region_views(&self) -> Vec<RegionView> {
        self.regions
            .regions()
            .iter()
            .enumerate()
            .map(|(index, region)| {
                let current = self
                    .current_sample(region.data_channel)
                    .or_else(|| self.current_sample(WeatherChannel::Temperature))
                    .unwrap_or(FALLBACK_TEMPERATURE);
                RegionView {
                    id: region.id,
                    vertices: region.vertices.clone(),
                    display_color: region.display_color.clone(),
                    fill_color: region_fill_color(region, current),
                    popup_summary: popup_summary(index, region),
                }
            })
            .collect()
    }

    fn recompute(&mut self) {
        if let Some(store) = &self.series {
            self.regions.recompute_all(store, &self.cursor);
        }
    }
}

fn popup_summary(index: usize, region: &Region) -> String {
    let channel = region.data_channel;
    match region.stats {
        Some(stats) => format!(
            "Area {}\n{}: {:.1} {} (min {:.1}, max {:.1}, samples {})\nPoints: {}",
            index + 1,
            channel.label(),
            stats.average,
            channel.unit(),
            stats.min,
            stats.max,
            stats.count,
            region.vertices.len(),
        ),
        None => format!(
            "Area {}\n{}: no data yet\nPoints: {}",
            index + 1,
            channel.label(),
            region.vertices.len(),
        ),
    }
}

fn current_hour() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn test_store(temperature: Vec<Option<f64>>) -> SeriesStore {
        let n = temperature.len();
        let base = NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let timestamps = (0..n).map(|i| base + Duration::hours(i as i64)).collect();
        let humidity = (0..n).map(|i| Some(50.0 + i as f64)).collect();
        SeriesStore::new(
            52.5,
            13.4,
            None,
            None,
            timestamps,
            temperature,
            humidity,
            vec![Some(10.0); n],
            vec![Some(180.0); n],
        )
        .unwrap()
    }

    fn loaded_dashboard(temperature: Vec<Option<f64>>) -> Dashboard {
        let mut dashboard = Dashboard::builder().build();
        let ticket = dashboard.select_location(Location::default());
        assert!(dashboard.install_series(ticket, test_store(temperature), DataOrigin::Remote));
        dashboard
    }

    fn draw_triangle(dashboard: &mut Dashboard) -> RegionId {
        dashboard.start_drawing();
        dashboard.handle_click(LatLon(52.0, 13.0)).unwrap();
        dashboard.handle_click(LatLon(53.0, 13.0)).unwrap();
        dashboard.handle_click(LatLon(52.5, 14.0)).unwrap();
        match dashboard.handle_double_click() {
            ClickOutcome::RegionCreated(id) => id,
            other => panic!("expected region, got {other:?}"),
        }
    }

    #[test]
    fn stale_fetch_tickets_cannot_install() {
        let mut dashboard = Dashboard::builder().build();
        let old = dashboard.select_location(Location::new("A", 1.0, 1.0));
        let new = dashboard.select_location(Location::new("B", 2.0, 2.0));

        assert!(!dashboard.install_series(
            old,
            test_store(vec![Some(1.0); 4]),
            DataOrigin::Remote
        ));
        assert!(dashboard.series().is_none());

        assert!(dashboard.install_series(
            new,
            test_store(vec![Some(2.0); 4]),
            DataOrigin::Remote
        ));
        assert_eq!(dashboard.data_origin(), Some(DataOrigin::Remote));
        assert_eq!(dashboard.cursor().len(), 4);
    }

    #[test]
    fn selecting_a_location_resets_drawing_and_cursor() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0); 48]);
        dashboard.set_current_index(30);
        dashboard.start_drawing();
        dashboard.handle_click(LatLon(52.0, 13.0)).unwrap();

        dashboard.select_location(Location::new("Paris", 48.85, 2.35));
        assert_eq!(dashboard.drawing_state(), DrawingState::Idle);
        assert!(dashboard.drawing_points().is_empty());
        assert_eq!(dashboard.cursor().current_index(), 0);
        assert!(dashboard.series().is_none());
    }

    #[test]
    fn drawn_region_gets_defaults_and_initial_statistics() {
        let mut dashboard = loaded_dashboard(vec![Some(17.0), Some(21.0), Some(26.0)]);
        dashboard.set_current_index(1);

        let id = draw_triangle(&mut dashboard);
        let region = dashboard.region(id).unwrap();

        assert_eq!(region.data_channel, WeatherChannel::Temperature);
        assert_eq!(region.thresholds.len(), 4);
        assert!(REGION_PALETTE.contains(&region.display_color.as_str()));
        assert_eq!(region.created_temperature, Some(21.0));

        let stats = region.stats.unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average, 21.0);
    }

    #[test]
    fn cursor_moves_keep_statistics_in_sync() {
        let mut dashboard = loaded_dashboard(vec![Some(17.0), Some(21.0), Some(26.0)]);
        let id = draw_triangle(&mut dashboard);

        assert_eq!(dashboard.region(id).unwrap().stats.unwrap().average, 17.0);

        assert!(dashboard.set_current_index(2));
        assert_eq!(dashboard.region(id).unwrap().stats.unwrap().average, 26.0);

        assert!(!dashboard.set_current_index(99), "out of bounds rejected");
        assert_eq!(dashboard.region(id).unwrap().stats.unwrap().average, 26.0);
    }

    #[test]
    fn range_mode_statistics_cover_the_window() {
        let samples: Vec<Option<f64>> = (0..48).map(|i| Some(i as f64)).collect();
        let mut dashboard = loaded_dashboard(samples);
        let id = draw_triangle(&mut dashboard);

        assert!(dashboard.set_range(10, 20));
        dashboard.set_mode(TimelineMode::Range);

        let stats = dashboard.region(id).unwrap().stats.unwrap();
        assert_eq!(stats.count, 11);
        assert_eq!(stats.average, 15.0);
    }

    #[test]
    fn playback_tick_advances_and_recomputes() {
        let mut dashboard = loaded_dashboard(vec![Some(10.0), Some(20.0), Some(30.0)]);
        let id = draw_triangle(&mut dashboard);

        dashboard.toggle_playback();
        assert!(dashboard.tick());
        assert_eq!(dashboard.cursor().current_index(), 1);
        assert_eq!(dashboard.region(id).unwrap().stats.unwrap().average, 20.0);

        assert!(dashboard.tick());
        assert!(!dashboard.tick(), "end of series stops playback");
        assert!(!dashboard.cursor().is_playing());
    }

    #[test]
    fn overlapping_draw_requires_a_decision() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0); 4]);
        draw_triangle(&mut dashboard);

        // Second polygon with a vertex inside the first.
        dashboard.start_drawing();
        dashboard.handle_click(LatLon(52.5, 13.3)).unwrap();
        dashboard.handle_click(LatLon(55.0, 13.3)).unwrap();
        dashboard.handle_click(LatLon(55.0, 15.0)).unwrap();
        assert_eq!(dashboard.handle_double_click(), ClickOutcome::OverlapConflict);
        assert_eq!(
            dashboard.drawing_state(),
            DrawingState::PendingOverlapDecision
        );
        assert_eq!(dashboard.regions().len(), 1, "no region yet");

        // Discard.
        assert_eq!(dashboard.resolve_overlap(false), None);
        assert_eq!(dashboard.regions().len(), 1);
        assert_eq!(dashboard.drawing_state(), DrawingState::Idle);

        // Redraw and force-create.
        dashboard.start_drawing();
        dashboard.handle_click(LatLon(52.5, 13.3)).unwrap();
        dashboard.handle_click(LatLon(55.0, 13.3)).unwrap();
        dashboard.handle_click(LatLon(55.0, 15.0)).unwrap();
        dashboard.handle_double_click();
        let id = dashboard.resolve_overlap(true).unwrap();
        assert_eq!(dashboard.regions().len(), 2);
        assert!(dashboard.region(id).is_some());
    }

    #[test]
    fn channel_rebind_refreshes_statistics() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0), Some(22.0), Some(24.0)]);
        let id = draw_triangle(&mut dashboard);
        assert_eq!(dashboard.region(id).unwrap().stats.unwrap().average, 20.0);

        assert!(dashboard.set_region_channel(id, WeatherChannel::Humidity));
        let region = dashboard.region(id).unwrap();
        assert_eq!(region.data_channel, WeatherChannel::Humidity);
        assert_eq!(region.stats.unwrap().average, 50.0, "humidity at index 0");

        assert!(!dashboard.set_region_channel(RegionId(999), WeatherChannel::WindSpeed));
    }

    #[test]
    fn threshold_edits_by_index() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0); 4]);
        let id = draw_triangle(&mut dashboard);

        use crate::regions::region::ThresholdOp;
        assert!(dashboard.add_threshold(
            id,
            Threshold::new(ThresholdOp::GreaterEq, 40.0, "#000000")
        ));
        assert_eq!(dashboard.region(id).unwrap().thresholds.len(), 5);

        assert!(dashboard.update_threshold(
            id,
            4,
            Threshold::new(ThresholdOp::GreaterEq, 45.0, "#111111")
        ));
        assert_eq!(dashboard.region(id).unwrap().thresholds[4].value, 45.0);

        assert!(!dashboard.update_threshold(
            id,
            9,
            Threshold::new(ThresholdOp::Less, 0.0, "#222222")
        ));

        assert!(dashboard.remove_threshold(id, 4));
        assert_eq!(dashboard.region(id).unwrap().thresholds.len(), 4);
        assert!(!dashboard.remove_threshold(id, 9));
    }

    #[test]
    fn region_views_expose_fill_colors_and_summaries() {
        let mut dashboard = loaded_dashboard(vec![Some(27.0), Some(12.0)]);
        draw_triangle(&mut dashboard);

        let views = dashboard.region_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].fill_color, "#f59e0b", "27 °C lands in the amber band");
        assert!(views[0].popup_summary.contains("Area 1"));
        assert!(views[0].popup_summary.contains("Temperature"));

        dashboard.set_current_index(1);
        let views = dashboard.region_views();
        assert_eq!(views[0].fill_color, "#3b82f6", "12 °C matches the <18 rule");
    }

    #[test]
    fn clicks_without_drawing_mode_are_ignored() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0); 4]);
        let outcome = dashboard.handle_click(LatLon(52.0, 13.0)).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(dashboard.handle_double_click(), ClickOutcome::Ignored);
    }

    #[test]
    fn non_finite_clicks_surface_a_drawing_error() {
        let mut dashboard = loaded_dashboard(vec![Some(20.0); 4]);
        dashboard.start_drawing();
        let err = dashboard.handle_click(LatLon(f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, MeteomapError::Drawing(_)));
        assert!(dashboard.drawing_points().is_empty());
    }

    #[tokio::test]
    async fn load_location_falls_back_to_synthetic_data() {
        // Unroutable endpoint: the fetch fails fast and the synthetic
        // generator takes over.
        let forecast = ForecastClient::builder()
            .base_url("http://127.0.0.1:0".to_string())
            .build();
        let mut dashboard = Dashboard::builder().forecast(forecast).build();

        let origin = dashboard
            .load_location(Location::default())
            .await
            .unwrap();
        assert_eq!(origin, DataOrigin::Synthetic);
        assert_eq!(dashboard.series().unwrap().len(), SYNTHETIC_HOURS);
        assert_eq!(dashboard.cursor().end_index(), 23);
    }
}
