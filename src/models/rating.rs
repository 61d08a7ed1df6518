use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default value filled in for any dimension the server omits. The dashboard
/// always renders a complete radar, so missing sub-scores become this neutral
/// midpoint instead of a hole in the chart.
pub const PLACEHOLDER_DIMENSION_SCORE: f64 = 50.0;

/// Per-dimension skill breakdown. The dimension set is fixed; a record either
/// carries all six sub-scores or none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub power: f64,
    pub speed: f64,
    pub precision: f64,
    pub strategy: f64,
    pub control: f64,
    pub consistency: f64,
}

impl DimensionScores {
    /// All-placeholder breakdown, used when a source omits the breakdown
    /// entirely.
    pub fn placeholder() -> Self {
        Self {
            power: PLACEHOLDER_DIMENSION_SCORE,
            speed: PLACEHOLDER_DIMENSION_SCORE,
            precision: PLACEHOLDER_DIMENSION_SCORE,
            strategy: PLACEHOLDER_DIMENSION_SCORE,
            control: PLACEHOLDER_DIMENSION_SCORE,
            consistency: PLACEHOLDER_DIMENSION_SCORE,
        }
    }

    /// Named entries in declaration order. The order is load-bearing: the
    /// dimension ranker breaks ties by first-encountered entry.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("power", self.power),
            ("speed", self.speed),
            ("precision", self.precision),
            ("strategy", self.strategy),
            ("control", self.control),
            ("consistency", self.consistency),
        ]
    }
}

/// A player's raw rating as fetched from a remote source. Immutable once
/// fetched; replaced wholesale on refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    pub player_id: String,
    pub rating: f64,
    pub dimensions: Option<DimensionScores>,
    pub percentile: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}
