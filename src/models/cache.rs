use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::models::{PerformanceSummary, RatingRecord, TierSet};

/// Cache entry with TTL
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// In-memory query cache for fetched rating data.
///
/// Keys are derived from the request parameters via [`CacheKey`]. Entries are
/// replaced last-write-wins on refetch; invalidation is explicit, triggered by
/// mutations on the related player (e.g. a match result was recorded).
#[derive(Debug)]
pub struct SummaryCache {
    // CacheKey::summary(player) -> PerformanceSummary
    summary_cache: Arc<RwLock<HashMap<String, CacheEntry<PerformanceSummary>>>>,

    // CacheKey::rating(player) -> RatingRecord
    rating_cache: Arc<RwLock<HashMap<String, CacheEntry<RatingRecord>>>>,

    // Single remote tier table (tiers change much more rarely than ratings)
    tier_cache: Arc<RwLock<Option<CacheEntry<TierSet>>>>,

    summary_ttl: Duration,
    rating_ttl: Duration,
    tier_ttl: Duration,
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(120),  // 2 minutes for derived summaries
            Duration::from_secs(120),  // 2 minutes for raw ratings
            Duration::from_secs(3600), // 1 hour for the tier table
        )
    }
}

impl SummaryCache {
    pub fn new(summary_ttl: Duration, rating_ttl: Duration, tier_ttl: Duration) -> Self {
        Self {
            summary_cache: Arc::new(RwLock::new(HashMap::new())),
            rating_cache: Arc::new(RwLock::new(HashMap::new())),
            tier_cache: Arc::new(RwLock::new(None)),
            summary_ttl,
            rating_ttl,
            tier_ttl,
        }
    }

    pub fn get_summary(&self, player_id: &str) -> Option<PerformanceSummary> {
        let cache = self.summary_cache.read().ok()?;
        let entry = cache.get(&CacheKey::summary(player_id))?;

        if entry.is_expired() {
            return None;
        }

        Some(entry.value.clone())
    }

    pub fn set_summary(&self, player_id: &str, summary: PerformanceSummary) {
        if let Ok(mut cache) = self.summary_cache.write() {
            cache.insert(
                CacheKey::summary(player_id),
                CacheEntry::new(summary, self.summary_ttl),
            );
        }
    }

    pub fn get_rating(&self, player_id: &str) -> Option<RatingRecord> {
        let cache = self.rating_cache.read().ok()?;
        let entry = cache.get(&CacheKey::rating(player_id))?;

        if entry.is_expired() {
            return None;
        }

        Some(entry.value.clone())
    }

    pub fn set_rating(&self, player_id: &str, record: RatingRecord) {
        if let Ok(mut cache) = self.rating_cache.write() {
            cache.insert(
                CacheKey::rating(player_id),
                CacheEntry::new(record, self.rating_ttl),
            );
        }
    }

    pub fn get_tiers(&self) -> Option<TierSet> {
        let cache = self.tier_cache.read().ok()?;
        let entry = cache.as_ref()?;

        if entry.is_expired() {
            return None;
        }

        Some(entry.value.clone())
    }

    pub fn set_tiers(&self, tiers: TierSet) {
        if let Ok(mut cache) = self.tier_cache.write() {
            *cache = Some(CacheEntry::new(tiers, self.tier_ttl));
        }
    }

    /// Drop every entry derived from one player's data. Called after a
    /// mutation that changes their rating (new match result, goal update).
    pub fn invalidate_player(&self, player_id: &str) {
        if let Ok(mut cache) = self.summary_cache.write() {
            cache.remove(&CacheKey::summary(player_id));
        }
        if let Ok(mut cache) = self.rating_cache.write() {
            cache.remove(&CacheKey::rating(player_id));
        }
    }

    /// Clean up expired entries
    pub fn cleanup_expired(&self) {
        if let Ok(mut cache) = self.summary_cache.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
        if let Ok(mut cache) = self.rating_cache.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
        if let Ok(mut cache) = self.tier_cache.write() {
            if cache.as_ref().is_some_and(|entry| entry.is_expired()) {
                *cache = None;
            }
        }
    }

    pub fn get_stats(&self) -> CacheStats {
        let summary_entries = self.summary_cache.read().map(|c| c.len()).unwrap_or(0);
        let rating_entries = self.rating_cache.read().map(|c| c.len()).unwrap_or(0);
        let tier_entries = self
            .tier_cache
            .read()
            .map(|c| usize::from(c.is_some()))
            .unwrap_or(0);

        CacheStats {
            summary_entries,
            rating_entries,
            tier_entries,
            total_entries: summary_entries + rating_entries + tier_entries,
        }
    }

}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub summary_entries: usize,
    pub rating_entries: usize,
    pub tier_entries: usize,
    pub total_entries: usize,
}

/// Cache key builder for consistent key generation
pub struct CacheKey;

impl CacheKey {
    pub fn summary(player_id: &str) -> String {
        format!("summary:{}", player_id.to_lowercase())
    }

    pub fn rating(player_id: &str) -> String {
        format!("rating:{}", player_id.to_lowercase())
    }
}
