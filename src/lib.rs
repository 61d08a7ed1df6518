pub mod api;
pub mod config;
pub mod models;
pub mod summary;

pub use config::Settings;
pub use models::{
    DimensionScores, PerformanceSummary, RallyScoreError, RatingRecord, Result, SummaryOutcome,
    TierDefinition, TierSet,
};
