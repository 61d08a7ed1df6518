use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::api::RatingsApi;
use crate::config::ApiConfig;
use crate::models::{
    DimensionScores, RallyScoreError, RatingRecord, Result, TierDefinition, TierSet,
    PLACEHOLDER_DIMENSION_SCORE, UNRANKED_COLOR,
};

/// reqwest-backed implementation of [`RatingsApi`].
///
/// Server JSON is loosely typed; every response is deserialized into an
/// explicit DTO here and validated before it crosses into the models. Missing
/// optional fields are legitimate and get defaults at this boundary, never at
/// call sites.
pub struct HttpRatingsApi {
    http_client: reqwest::Client,
    config: ApiConfig,
}

#[derive(Deserialize)]
struct PerformanceDto {
    rating: f64,
    #[serde(default)]
    skills: Option<SkillsDto>,
    #[serde(default)]
    percentile: Option<f64>,
}

#[derive(Deserialize)]
struct RatingDetailDto {
    rating: f64,
    #[serde(default)]
    skills: Option<SkillsDto>,
    #[serde(default)]
    percentile: Option<f64>,
}

// A breakdown may arrive partially populated; each missing sub-score is
// defaulted individually.
#[derive(Deserialize)]
struct SkillsDto {
    #[serde(default)]
    power: Option<f64>,
    #[serde(default)]
    speed: Option<f64>,
    #[serde(default)]
    precision: Option<f64>,
    #[serde(default)]
    strategy: Option<f64>,
    #[serde(default)]
    control: Option<f64>,
    #[serde(default)]
    consistency: Option<f64>,
}

#[derive(Deserialize)]
struct TierListDto {
    tiers: Vec<TierDto>,
}

#[derive(Deserialize)]
struct TierDto {
    name: String,
    #[serde(rename = "minRating")]
    min_rating: f64,
    #[serde(rename = "maxRating")]
    max_rating: f64,
    #[serde(default)]
    color: Option<String>,
}

impl From<SkillsDto> for DimensionScores {
    fn from(dto: SkillsDto) -> Self {
        Self {
            power: dto.power.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
            speed: dto.speed.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
            precision: dto.precision.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
            strategy: dto.strategy.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
            control: dto.control.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
            consistency: dto.consistency.unwrap_or(PLACEHOLDER_DIMENSION_SCORE),
        }
    }
}

impl HttpRatingsApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                RallyScoreError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RallyScoreError::ApiStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RallyScoreError::InvalidPayload {
                endpoint: url.to_string(),
                message: e.to_string(),
            })
    }

    fn validate_rating(url: &str, rating: f64) -> Result<()> {
        if !rating.is_finite() || rating < 0.0 {
            return Err(RallyScoreError::InvalidPayload {
                endpoint: url.to_string(),
                message: format!("rating {} is out of range", rating),
            });
        }
        Ok(())
    }

    // A percentile outside [0, 100] is treated the same as a missing one;
    // the summary falls back to its default rather than rendering garbage.
    fn sanitize_percentile(percentile: Option<f64>) -> Option<f64> {
        percentile.filter(|p| p.is_finite() && (0.0..=100.0).contains(p))
    }
}

#[async_trait]
impl RatingsApi for HttpRatingsApi {
    async fn fetch_performance(&self, player_id: &str) -> Result<RatingRecord> {
        let url = self.config.summary_url(player_id);
        let dto: PerformanceDto = self.get_json(&url).await?;
        Self::validate_rating(&url, dto.rating)?;

        Ok(RatingRecord {
            player_id: player_id.to_string(),
            rating: dto.rating,
            dimensions: dto.skills.map(DimensionScores::from),
            percentile: Self::sanitize_percentile(dto.percentile),
            fetched_at: Utc::now(),
        })
    }

    async fn fetch_rating_detail(&self, player_id: &str) -> Result<RatingRecord> {
        let url = self.config.rating_url(player_id);
        let dto: RatingDetailDto = self.get_json(&url).await?;
        Self::validate_rating(&url, dto.rating)?;

        Ok(RatingRecord {
            player_id: player_id.to_string(),
            rating: dto.rating,
            dimensions: dto.skills.map(DimensionScores::from),
            percentile: Self::sanitize_percentile(dto.percentile),
            fetched_at: Utc::now(),
        })
    }

    async fn fetch_tier_table(&self) -> Result<TierSet> {
        let url = self.config.tiers_url();
        let dto: TierListDto = self.get_json(&url).await?;

        let tiers = dto
            .tiers
            .into_iter()
            .map(|t| TierDefinition {
                name: t.name,
                min_rating: t.min_rating,
                max_rating: t.max_rating,
                color: t.color.unwrap_or_else(|| UNRANKED_COLOR.to_string()),
            })
            .collect();

        TierSet::new(tiers)
    }
}
