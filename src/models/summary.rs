use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DimensionScores;

/// The tier immediately above the player's current one, and how far away it
/// is. Absent for players already in the top tier and for unranked ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTier {
    pub name: String,
    pub points_needed: f64,
}

/// Normalized, display-ready projection of a player's rating data. Wholly
/// recomputed on each fetch; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub player_id: String,
    pub overall_rating: f64,
    pub tier_name: String,
    pub tier_color: String,
    pub dimensions: DimensionScores,
    pub strongest_area: String,
    pub weakest_area: String,
    pub percentile: f64,
    pub next_tier: Option<NextTier>,
    pub generated_at: DateTime<Utc>,
}

/// Which path produced a summary. Fallback summaries are complete but may
/// carry placeholder dimensions; callers can badge them as degraded.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Primary(PerformanceSummary),
    Fallback(PerformanceSummary),
}

impl SummaryOutcome {
    pub fn summary(&self) -> &PerformanceSummary {
        match self {
            SummaryOutcome::Primary(s) | SummaryOutcome::Fallback(s) => s,
        }
    }

    pub fn into_summary(self) -> PerformanceSummary {
        match self {
            SummaryOutcome::Primary(s) | SummaryOutcome::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback(_))
    }
}
