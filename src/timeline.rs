//! The shared temporal cursor: one playhead, an optional selection window,
//! and playback parameters.
//!
//! The cursor is the only mutable "current time" in the system. Every mutation
//! happens through the methods here; the owning [`crate::Dashboard`] follows
//! each accepted mutation with a synchronous statistics recompute so renderers
//! never observe a cursor change without its matching statistics.

use serde::{Deserialize, Serialize};

/// Whether region statistics are derived from the playhead alone or from the
/// selection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineMode {
    Single,
    Range,
}

/// The closed set of playback cadences offered by the timeline UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// 0.5x, one step every 2000 ms.
    Half,
    /// 1x, one step every 1000 ms.
    Normal,
    /// 2x, one step every 500 ms.
    Double,
    /// 4x, one step every 250 ms.
    Quadruple,
}

impl PlaybackSpeed {
    pub fn millis(&self) -> u64 {
        match self {
            PlaybackSpeed::Half => 2000,
            PlaybackSpeed::Normal => 1000,
            PlaybackSpeed::Double => 500,
            PlaybackSpeed::Quadruple => 250,
        }
    }
}

/// Timeline state machine over a series of `len` hourly samples.
///
/// Invariants, upheld by every mutator:
/// - `current_index ∈ [0, len-1]`
/// - `0 <= start_index <= end_index <= len-1`
/// - in [`TimelineMode::Range`], mode switches snap `current_index` into
///   `[start_index, end_index]`; a plain `set_current_index` does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineCursor {
    len: usize,
    current_index: usize,
    start_index: usize,
    end_index: usize,
    mode: TimelineMode,
    is_playing: bool,
    speed: PlaybackSpeed,
}

impl TimelineCursor {
    /// Fresh cursor over a series of `len` samples: playhead at 0, a default
    /// 24-hour window, single mode, paused, 1× speed.
    pub fn new(len: usize) -> Self {
        let last = len.saturating_sub(1);
        Self {
            len,
            current_index: 0,
            start_index: 0,
            end_index: last.min(23),
            mode: TimelineMode::Single,
            is_playing: false,
            speed: PlaybackSpeed::Normal,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    pub fn mode(&self) -> TimelineMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Moves the playhead. Out-of-bounds indices are rejected and leave the
    /// cursor unchanged. In range mode the caller is expected to keep the
    /// index within the window; no snap happens here.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Replaces the selection window. Accepted only for `start < end` with
    /// `end` in bounds; otherwise the prior window is retained. On accept in
    /// range mode, a playhead outside the new window snaps to `start`.
    pub fn set_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end >= self.len {
            return false;
        }
        self.start_index = start;
        self.end_index = end;
        if self.mode == TimelineMode::Range && !self.playhead_in_window() {
            self.current_index = self.start_index;
        }
        true
    }

    /// Switches between single and range mode. Entering range mode with the
    /// playhead outside the window snaps it to the window start.
    pub fn set_mode(&mut self, mode: TimelineMode) {
        self.mode = mode;
        if self.mode == TimelineMode::Range && !self.playhead_in_window() {
            self.current_index = self.start_index;
        }
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Returns true when the cadence actually changed, so the caller knows to
    /// replace its ticker.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) -> bool {
        if self.speed == speed {
            return false;
        }
        self.speed = speed;
        true
    }

    /// One playback step. Returns true when the playhead advanced.
    ///
    /// Single mode walks to the end of the series and stops there; range mode
    /// sweeps the window once and halts on reaching `end_index`. Neither wraps
    /// nor slides the window; running out of samples is a normal stop.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing || self.len == 0 {
            return false;
        }
        match self.mode {
            TimelineMode::Single => {
                if self.current_index + 1 >= self.len {
                    self.is_playing = false;
                    false
                } else {
                    self.current_index += 1;
                    true
                }
            }
            TimelineMode::Range => {
                if self.current_index >= self.end_index {
                    self.is_playing = false;
                    false
                } else {
                    self.current_index += 1;
                    if self.current_index == self.end_index {
                        self.is_playing = false;
                    }
                    true
                }
            }
        }
    }

    /// Jump helpers backing the transport buttons. These clamp instead of
    /// rejecting, since the target is derived rather than user-typed.
    pub fn jump_to_start(&mut self) {
        self.current_index = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.current_index = self.len.saturating_sub(1);
    }

    pub fn step_back_day(&mut self) {
        self.current_index = self.current_index.saturating_sub(24);
    }

    pub fn step_forward_day(&mut self) {
        self.current_index = (self.current_index + 24).min(self.len.saturating_sub(1));
    }

    fn playhead_in_window(&self) -> bool {
        (self.start_index..=self.end_index).contains(&self.current_index)
    }
}
