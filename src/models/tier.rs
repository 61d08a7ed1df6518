use serde::{Deserialize, Serialize};

use crate::models::{RallyScoreError, Result};

/// Color used for the `Unranked` sentinel and for any tier a source delivers
/// without a color of its own.
pub const UNRANKED_COLOR: &str = "#9e9e9e";
pub const UNRANKED_NAME: &str = "Unranked";

/// One named rating bracket. Bounds are half-open: a rating belongs to the
/// tier when `min_rating <= rating < max_rating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub name: String,
    pub min_rating: f64,
    pub max_rating: f64,
    pub color: String,
}

impl TierDefinition {
    pub fn contains(&self, rating: f64) -> bool {
        rating >= self.min_rating && rating < self.max_rating
    }
}

/// A validated, ascending, contiguous tier table.
///
/// Construction rejects overlap and gaps, so resolution can never match two
/// tiers. Ratings outside the covered range resolve to the `Unranked`
/// sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierDefinition>", into = "Vec<TierDefinition>")]
pub struct TierSet {
    tiers: Vec<TierDefinition>,
}

impl TierSet {
    pub fn new(tiers: Vec<TierDefinition>) -> Result<Self> {
        Self::validate(&tiers)?;
        Ok(Self { tiers })
    }

    fn validate(tiers: &[TierDefinition]) -> Result<()> {
        if tiers.is_empty() {
            return Err(RallyScoreError::InvalidTierTable(
                "tier table must not be empty".to_string(),
            ));
        }

        for tier in tiers {
            if !(tier.min_rating < tier.max_rating) {
                return Err(RallyScoreError::InvalidTierTable(format!(
                    "tier {} has empty range [{}, {})",
                    tier.name, tier.min_rating, tier.max_rating
                )));
            }
        }

        for pair in tiers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if lower.max_rating != upper.min_rating {
                return Err(RallyScoreError::InvalidTierTable(format!(
                    "tiers {} and {} are not contiguous: {} != {}",
                    lower.name, upper.name, lower.max_rating, upper.min_rating
                )));
            }
        }

        Ok(())
    }

    pub fn tiers(&self) -> &[TierDefinition] {
        &self.tiers
    }

    /// Lowest rating covered by any tier.
    pub fn floor(&self) -> f64 {
        self.tiers[0].min_rating
    }

    /// Exclusive upper bound of the highest tier.
    pub fn ceiling(&self) -> f64 {
        self.tiers[self.tiers.len() - 1].max_rating
    }

    /// Index of the tier containing `rating`, if any.
    pub fn position_of(&self, rating: f64) -> Option<usize> {
        self.tiers.iter().position(|t| t.contains(rating))
    }

    /// The sentinel returned for ratings outside every bracket.
    pub fn unranked() -> TierDefinition {
        TierDefinition {
            name: UNRANKED_NAME.to_string(),
            min_rating: 0.0,
            max_rating: 0.0,
            color: UNRANKED_COLOR.to_string(),
        }
    }
}

impl TryFrom<Vec<TierDefinition>> for TierSet {
    type Error = RallyScoreError;

    fn try_from(tiers: Vec<TierDefinition>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<TierSet> for Vec<TierDefinition> {
    fn from(set: TierSet) -> Self {
        set.tiers
    }
}
