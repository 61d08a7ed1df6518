use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::api::RatingsApi;
use crate::config::Settings;
use crate::models::{
    CacheStats, DimensionScores, PerformanceSummary, RallyScoreError, RatingRecord, Result,
    SummaryCache, SummaryOutcome, TierSet,
};
use crate::summary::{dimensions, tiers};

/// Orchestrates the fetch → derive pipeline with one graceful-degradation
/// fallback.
///
/// The primary performance endpoint is tried first; on any failure the
/// service composes an equivalent summary from the rating-detail and
/// tier-list endpoints. Exactly one fallback attempt, no retries, no backoff.
/// Both paths run the same local tier resolution and dimension ranking, so
/// primary and fallback summaries are shape-identical.
pub struct SummaryService {
    api: Arc<dyn RatingsApi>,
    cache: SummaryCache,
    default_tiers: TierSet,
}

impl SummaryService {
    pub fn new(api: Arc<dyn RatingsApi>, settings: &Settings) -> Result<Self> {
        let default_tiers = TierSet::new(settings.tiers.clone())?;
        let cache = SummaryCache::new(
            Duration::from_secs(settings.cache.summary_ttl_seconds),
            Duration::from_secs(settings.cache.rating_ttl_seconds),
            Duration::from_secs(settings.cache.tier_ttl_seconds),
        );

        Ok(Self {
            api,
            cache,
            default_tiers,
        })
    }

    /// Produce a complete summary for one player.
    ///
    /// Only primary summaries are cached; a fallback result is recomputed on
    /// the next call so the primary source gets another chance.
    pub async fn player_summary(&self, player_id: &str) -> Result<SummaryOutcome> {
        // Expired entries already miss; reclaim them so the maps stay small.
        self.cache.cleanup_expired();

        if let Some(cached) = self.cache.get_summary(player_id) {
            info!("Serving cached summary for {}", player_id);
            return Ok(SummaryOutcome::Primary(cached));
        }

        let tier_table = self.tier_table().await;

        match self.api.fetch_performance(player_id).await {
            Ok(record) => {
                let summary = self.derive(&record, &tier_table)?;
                self.cache.set_summary(player_id, summary.clone());
                Ok(SummaryOutcome::Primary(summary))
            }
            Err(primary_err) => {
                warn!(
                    "Primary summary fetch failed for {}: {}; composing from secondary sources",
                    player_id, primary_err
                );

                match self.compose_fallback(player_id, &tier_table).await {
                    Ok(summary) => {
                        info!("Fallback summary composed for {}", player_id);
                        Ok(SummaryOutcome::Fallback(summary))
                    }
                    Err(fallback_err) => Err(RallyScoreError::AllSourcesFailed {
                        primary: Box::new(primary_err),
                        fallback: Box::new(fallback_err),
                    }),
                }
            }
        }
    }

    /// Fetch the lean rating detail, consulting the cache first.
    pub async fn rating_detail(&self, player_id: &str) -> Result<RatingRecord> {
        if let Some(cached) = self.cache.get_rating(player_id) {
            return Ok(cached);
        }

        let record = self.api.fetch_rating_detail(player_id).await?;
        self.cache.set_rating(player_id, record.clone());
        Ok(record)
    }

    /// Current tier table: remote when reachable, configured default
    /// otherwise. An invalid remote table is rejected at deserialization and
    /// lands in the same default path.
    pub async fn tier_table(&self) -> TierSet {
        if let Some(cached) = self.cache.get_tiers() {
            return cached;
        }

        match self.api.fetch_tier_table().await {
            Ok(remote) => {
                self.cache.set_tiers(remote.clone());
                remote
            }
            Err(e) => {
                warn!("Tier table fetch failed ({}); using configured table", e);
                self.default_tiers.clone()
            }
        }
    }

    /// Drop cached data for a player after a rating-affecting mutation.
    pub fn invalidate_player(&self, player_id: &str) {
        self.cache.invalidate_player(player_id);
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.get_stats()
    }

    async fn compose_fallback(
        &self,
        player_id: &str,
        tier_table: &TierSet,
    ) -> Result<PerformanceSummary> {
        let record = self.rating_detail(player_id).await?;
        self.derive(&record, tier_table)
    }

    fn derive(&self, record: &RatingRecord, tier_table: &TierSet) -> Result<PerformanceSummary> {
        let dimensions = record
            .dimensions
            .clone()
            .unwrap_or_else(DimensionScores::placeholder);

        let extremes = dimensions::rank(&dimensions.entries()).ok_or_else(|| {
            RallyScoreError::InvalidPayload {
                endpoint: "dimension breakdown".to_string(),
                message: "empty dimension set".to_string(),
            }
        })?;

        let resolved = tiers::resolve(record.rating, tier_table);

        Ok(PerformanceSummary {
            player_id: record.player_id.clone(),
            overall_rating: record.rating,
            tier_name: resolved.name,
            tier_color: resolved.color,
            dimensions,
            strongest_area: extremes.strongest.to_string(),
            weakest_area: extremes.weakest.to_string(),
            percentile: record.percentile.unwrap_or(0.0),
            next_tier: resolved.next_tier,
            generated_at: Utc::now(),
        })
    }
}
