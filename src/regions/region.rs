//! User-drawn analysis regions and their derived statistics.

use crate::geometry::LatLon;
use crate::series::store::WeatherChannel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a region, minted by the registry at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region-{}", self.0)
    }
}

/// Comparison operator of one color threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdOp {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEq,
}

impl ThresholdOp {
    pub fn matches(&self, sample: f64, threshold: f64) -> bool {
        match self {
            ThresholdOp::Less => sample < threshold,
            ThresholdOp::LessEq => sample <= threshold,
            ThresholdOp::Greater => sample > threshold,
            ThresholdOp::GreaterEq => sample >= threshold,
        }
    }
}

impl fmt::Display for ThresholdOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ThresholdOp::Less => "<",
            ThresholdOp::LessEq => "<=",
            ThresholdOp::Greater => ">",
            ThresholdOp::GreaterEq => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// One `(operator, value, color)` coloring rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub op: ThresholdOp,
    pub value: f64,
    /// Hex color applied when the rule wins, e.g. `"#10b981"`.
    pub color: String,
}

impl Threshold {
    pub fn new(op: ThresholdOp, value: f64, color: impl Into<String>) -> Self {
        Self {
            op,
            value,
            color: color.into(),
        }
    }

    pub fn matches(&self, sample: f64) -> bool {
        self.op.matches(sample, self.value)
    }
}

/// Default threshold bands attached to every freshly drawn region.
pub fn default_thresholds() -> Vec<Threshold> {
    vec![
        Threshold::new(ThresholdOp::Less, 18.0, "#3b82f6"),
        Threshold::new(ThresholdOp::GreaterEq, 18.0, "#10b981"),
        Threshold::new(ThresholdOp::GreaterEq, 25.0, "#f59e0b"),
        Threshold::new(ThresholdOp::GreaterEq, 30.0, "#ef4444"),
    ]
}

/// Min/max/average snapshot over the samples selected by the timeline cursor,
/// all rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub count: usize,
}

/// A drawn polygon bound to one data channel and a threshold coloring rule.
///
/// `vertices` is a cyclic list of at least 3 points; the closing edge back to
/// the first vertex is implicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub vertices: Vec<LatLon>,
    /// Outline color chosen from the palette at creation; independent of data.
    pub display_color: String,
    pub data_channel: WeatherChannel,
    pub thresholds: Vec<Threshold>,
    /// Temperature sample at creation time; colorizer fallback when no
    /// statistics have been computed yet.
    pub created_temperature: Option<f64>,
    /// `None` until the first recompute touches this region.
    pub stats: Option<RegionStats>,
}

impl Region {
    pub fn new(
        id: RegionId,
        vertices: Vec<LatLon>,
        display_color: impl Into<String>,
        created_temperature: Option<f64>,
    ) -> Self {
        Self {
            id,
            vertices,
            display_color: display_color.into(),
            data_channel: WeatherChannel::Temperature,
            thresholds: default_thresholds(),
            created_temperature,
            stats: None,
        }
    }
}

/// Fields of a region a caller may change after creation; `None` leaves the
/// current value untouched (shallow merge).
#[derive(Debug, Clone, Default)]
pub struct RegionUpdate {
    pub data_channel: Option<WeatherChannel>,
    pub thresholds: Option<Vec<Threshold>>,
}
