//! Maps a region's representative statistic to a display color.
//!
//! Threshold evaluation is first-match-after-descending-sort: rules are sorted
//! by value descending (stable, so the user's order breaks ties) and the first
//! satisfied rule wins. This is not "apply all matches" and not "closest
//! threshold"; renderers depend on the exact policy.

use crate::regions::region::{Region, Threshold};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Outline palette cycled through at region creation.
pub const REGION_PALETTE: [&str; 7] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff",
];

/// Fixed five-band temperature scale used when no user threshold matches.
pub fn default_band_color(value: f64) -> &'static str {
    if value < 0.0 {
        "#1e40af"
    } else if value < 10.0 {
        "#3b82f6"
    } else if value < 20.0 {
        "#10b981"
    } else if value < 30.0 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

/// Picks the color for `value` from `thresholds`, falling back to the default
/// banding when nothing matches.
///
/// # Examples
///
/// ```
/// use meteomap::{colorize, Threshold, ThresholdOp};
///
/// let thresholds = vec![
///     Threshold::new(ThresholdOp::Less, 18.0, "#3b82f6"),
///     Threshold::new(ThresholdOp::GreaterEq, 18.0, "#10b981"),
///     Threshold::new(ThresholdOp::GreaterEq, 25.0, "#f59e0b"),
///     Threshold::new(ThresholdOp::GreaterEq, 30.0, "#ef4444"),
/// ];
/// // Descending order of evaluation: 30, 25, 18, 18. 27 fails >=30 and
/// // passes >=25.
/// assert_eq!(colorize(27.0, &thresholds), "#f59e0b");
/// ```
pub fn colorize(value: f64, thresholds: &[Threshold]) -> String {
    let mut sorted: Vec<&Threshold> = thresholds.iter().collect();
    sorted.sort_by_key(|t| Reverse(OrderedFloat(t.value)));

    for threshold in sorted {
        if threshold.matches(value) {
            return threshold.color.clone();
        }
    }
    default_band_color(value).to_string()
}

/// Fill color for a region. The representative value is the statistics
/// average when present, else the temperature captured at creation, else
/// `current_value` supplied by the caller.
pub fn region_fill_color(region: &Region, current_value: f64) -> String {
    let representative = region
        .stats
        .map(|s| s.average)
        .or(region.created_temperature)
        .unwrap_or(current_value);
    colorize(representative, &region.thresholds)
}
