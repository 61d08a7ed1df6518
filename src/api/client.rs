use async_trait::async_trait;

use crate::models::{RatingRecord, Result, TierSet};

/// Transport-only interface to the ratings API.
///
/// The primary endpoint returns a rich record (rating plus dimension
/// breakdown and percentile) in one call; the two secondary endpoints carry
/// just enough for the fallback path to compose an equivalent summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingsApi: Send + Sync {
    /// Fetch the rich performance record from the primary endpoint.
    async fn fetch_performance(&self, player_id: &str) -> Result<RatingRecord>;

    /// Fetch the lean rating detail (secondary source, may omit the
    /// dimension breakdown).
    async fn fetch_rating_detail(&self, player_id: &str) -> Result<RatingRecord>;

    /// Fetch the tier table (secondary source).
    async fn fetch_tier_table(&self) -> Result<TierSet>;
}
