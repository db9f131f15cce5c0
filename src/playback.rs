//! Cadence source for timeline playback.
//!
//! The ticker only supplies timing: the UI loop awaits [`PlaybackTicker::tick`]
//! and then calls [`crate::Dashboard::tick`], which advances the cursor and
//! recomputes statistics in the same synchronous step. At most one interval is
//! ever live: changing speed replaces the interval rather than stacking a
//! second one, and dropping the ticker cancels it.

use crate::timeline::PlaybackSpeed;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

#[derive(Debug)]
pub struct PlaybackTicker {
    speed: PlaybackSpeed,
    interval: Interval,
}

impl PlaybackTicker {
    pub fn new(speed: PlaybackSpeed) -> Self {
        Self {
            speed,
            interval: build_interval(speed),
        }
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Replaces the interval when the cadence changed. The old interval is
    /// dropped before the new one starts, so ticks never stack.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        if self.speed != speed {
            self.speed = speed;
            self.interval = build_interval(speed);
        }
    }

    /// Waits for the next cadence boundary.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

fn build_interval(speed: PlaybackSpeed) -> Interval {
    let mut interval = interval(Duration::from_millis(speed.millis()));
    // A stalled UI loop should not burst-fire queued ticks afterwards.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_tick_fires_immediately() {
        let mut ticker = PlaybackTicker::new(PlaybackSpeed::Quadruple);
        // tokio intervals complete their first tick without waiting a period.
        ticker.tick().await;
    }

    #[tokio::test]
    async fn set_speed_replaces_the_interval() {
        let mut ticker = PlaybackTicker::new(PlaybackSpeed::Normal);
        ticker.set_speed(PlaybackSpeed::Quadruple);
        assert_eq!(ticker.speed(), PlaybackSpeed::Quadruple);

        // Same speed: the interval is kept as-is.
        ticker.set_speed(PlaybackSpeed::Quadruple);
        assert_eq!(ticker.speed(), PlaybackSpeed::Quadruple);
        ticker.tick().await;
    }
}
