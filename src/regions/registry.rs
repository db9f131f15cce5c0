//! The set of drawn regions and the timeline-driven statistics recompute.

use crate::regions::region::{Region, RegionId, RegionStats, RegionUpdate};
use crate::series::store::{SeriesStore, WeatherChannel};
use crate::timeline::{TimelineCursor, TimelineMode};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes a statistics snapshot from the samples of `channel` selected by
/// the cursor. Returns `None` when no valid (finite) sample is gathered.
pub(crate) fn stats_for(
    store: &SeriesStore,
    channel: WeatherChannel,
    cursor: &TimelineCursor,
) -> Option<RegionStats> {
    let indices = match cursor.mode() {
        TimelineMode::Single => cursor.current_index()..=cursor.current_index(),
        TimelineMode::Range => cursor.start_index()..=cursor.end_index(),
    };
    stats_over(store, channel, indices)
}

/// Single-sample snapshot at one index, used for a region's initial
/// statistics regardless of the cursor's mode.
pub(crate) fn stats_at(
    store: &SeriesStore,
    channel: WeatherChannel,
    index: usize,
) -> Option<RegionStats> {
    stats_over(store, channel, index..=index)
}

fn stats_over(
    store: &SeriesStore,
    channel: WeatherChannel,
    indices: std::ops::RangeInclusive<usize>,
) -> Option<RegionStats> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    for index in indices {
        let Some(value) = store.sample(channel, index) else {
            continue;
        };
        min = min.min(value);
        max = max.max(value);
        sum += value;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(RegionStats {
        min: round1(min),
        max: round1(max),
        average: round1(sum / count as f64),
        count,
    })
}

/// Owns every drawn region. Mutations happen only through the operations
/// here; overlap policy is the drawing session's concern, so [`add`] is
/// unconditional.
///
/// [`add`]: RegionRegistry::add
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    next_id: u64,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the id for the next region to be created.
    pub fn mint_id(&mut self) -> RegionId {
        self.next_id += 1;
        RegionId(self.next_id)
    }

    /// Appends a region. No overlap check happens here.
    pub fn add(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Removes the region with `id`; absent ids are a no-op.
    pub fn remove(&mut self, id: RegionId) {
        self.regions.retain(|r| r.id != id);
    }

    /// Shallow-merges `update` into the matching region; absent ids are a
    /// no-op. Returns true when a region was touched.
    pub fn update(&mut self, id: RegionId, update: RegionUpdate) -> bool {
        let Some(region) = self.regions.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if let Some(channel) = update.data_channel {
            region.data_channel = channel;
        }
        if let Some(thresholds) = update.thresholds {
            region.thresholds = thresholds;
        }
        true
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Refreshes every region's statistics from the cursor's current position
    /// or window. Regions gathering zero valid samples keep their prior
    /// snapshot untouched.
    pub fn recompute_all(&mut self, store: &SeriesStore, cursor: &TimelineCursor) {
        for region in &mut self.regions {
            if let Some(stats) = stats_for(store, region.data_channel, cursor) {
                region.stats = Some(stats);
            }
        }
        log::debug!(
            "recomputed statistics for {} region(s) at index {}",
            self.regions.len(),
            cursor.current_index()
        );
    }

    /// Refreshes one region, used right after channel or threshold edits so
    /// the snapshot never describes a previously bound channel.
    pub fn recompute_one(&mut self, id: RegionId, store: &SeriesStore, cursor: &TimelineCursor) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            if let Some(stats) = stats_for(store, region.data_channel, cursor) {
                region.stats = Some(stats);
            }
        }
    }
}
