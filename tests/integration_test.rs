use rally_scorer::{
    config::Settings,
    models::{DimensionScores, TierDefinition, TierSet},
    summary,
};

fn ladder_tiers() -> TierSet {
    TierSet::new(vec![
        TierDefinition {
            name: "Bronze".to_string(),
            min_rating: 0.0,
            max_rating: 1000.0,
            color: "#cd7f32".to_string(),
        },
        TierDefinition {
            name: "Silver".to_string(),
            min_rating: 1000.0,
            max_rating: 2000.0,
            color: "#c0c0c0".to_string(),
        },
        TierDefinition {
            name: "Gold".to_string(),
            min_rating: 2000.0,
            max_rating: 10000.0,
            color: "#ffd700".to_string(),
        },
    ])
    .unwrap()
}

#[test]
fn test_tier_resolution_worked_example() {
    let resolved = summary::resolve(1000.0, &ladder_tiers());

    assert_eq!(resolved.name, "Silver");
    let next = resolved.next_tier.expect("Silver has a tier above it");
    assert_eq!(next.name, "Gold");
    assert_eq!(next.points_needed, 1000.0);
}

#[test]
fn test_dimension_ranking_worked_example() {
    let scores = DimensionScores {
        power: 65.0,
        speed: 70.0,
        precision: 75.0,
        strategy: 60.0,
        control: 80.0,
        consistency: 68.0,
    };

    let extremes = summary::rank(&scores.entries()).unwrap();
    assert_eq!(extremes.strongest, "control");
    assert_eq!(extremes.weakest, "strategy");
}

#[test]
fn test_resolution_is_total_over_covered_range() {
    let tiers = ladder_tiers();
    for rating in [0.0, 999.0, 1000.0, 1999.0, 2000.0, 9999.0] {
        let resolved = summary::resolve(rating, &tiers);
        assert_ne!(resolved.name, "Unranked", "rating {} should be covered", rating);
    }

    assert_eq!(summary::resolve(10000.0, &tiers).name, "Unranked");
    assert_eq!(summary::resolve(-0.5, &tiers).name, "Unranked");
}

#[test]
fn test_default_settings_pass_validation() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());

    // The configured table must itself construct
    assert!(TierSet::new(settings.tiers).is_ok());
}

#[test]
fn test_tier_table_rejects_inclusive_inclusive_definitions() {
    // The ambiguous 0-999 / 1000-1999 style leaves a gap under half-open
    // semantics and must not validate.
    let result = TierSet::new(vec![
        TierDefinition {
            name: "Bronze".to_string(),
            min_rating: 0.0,
            max_rating: 999.0,
            color: "#cd7f32".to_string(),
        },
        TierDefinition {
            name: "Silver".to_string(),
            min_rating: 1000.0,
            max_rating: 1999.0,
            color: "#c0c0c0".to_string(),
        },
    ]);

    assert!(result.is_err());
}
