use crate::models::{NextTier, TierSet};

/// Outcome of resolving a rating against a tier table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTier {
    pub name: String,
    pub color: String,
    pub next_tier: Option<NextTier>,
}

/// Map a rating to its tier and the distance to the tier above.
///
/// Brackets are half-open: a rating equal to a tier's `min_rating` belongs to
/// that tier, a rating equal to its `max_rating` belongs to the next. Exactly
/// one tier can match because [`TierSet`] construction enforces contiguity.
/// Ratings outside the covered range resolve to the `Unranked` sentinel with
/// no next tier.
pub fn resolve(rating: f64, tiers: &TierSet) -> ResolvedTier {
    let Some(index) = tiers.position_of(rating) else {
        let sentinel = TierSet::unranked();
        return ResolvedTier {
            name: sentinel.name,
            color: sentinel.color,
            next_tier: None,
        };
    };

    let tier = &tiers.tiers()[index];
    let next_tier = tiers.tiers().get(index + 1).map(|next| NextTier {
        name: next.name.clone(),
        points_needed: next.min_rating - rating,
    });

    ResolvedTier {
        name: tier.name.clone(),
        color: tier.color.clone(),
        next_tier,
    }
}
