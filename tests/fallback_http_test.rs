use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use rally_scorer::{
    api::HttpRatingsApi,
    config::Settings,
    models::{DimensionScores, RallyScoreError},
    summary::SummaryService,
};

fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = server.base_url();
    settings
}

fn service_for(server: &MockServer) -> SummaryService {
    let settings = settings_for(server);
    let api = Arc::new(HttpRatingsApi::new(settings.api.clone()).unwrap());
    SummaryService::new(api, &settings).unwrap()
}

fn tier_list_body() -> serde_json::Value {
    json!({
        "tiers": [
            { "name": "Bronze", "minRating": 0.0, "maxRating": 1000.0, "color": "#cd7f32" },
            { "name": "Silver", "minRating": 1000.0, "maxRating": 2000.0, "color": "#c0c0c0" },
            { "name": "Gold", "minRating": 2000.0, "maxRating": 10000.0, "color": "#ffd700" }
        ]
    })
}

#[tokio::test]
async fn primary_endpoint_drives_the_summary() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(tier_list_body());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/performance-summary");
            then.status(200).json_body(json!({
                "rating": 1450.0,
                "percentile": 74.0,
                "skills": {
                    "power": 65.0, "speed": 70.0, "precision": 75.0,
                    "strategy": 60.0, "control": 80.0, "consistency": 68.0
                }
            }));
        })
        .await;

    let outcome = service_for(&server).player_summary("p-7").await.unwrap();
    assert!(!outcome.is_fallback());

    let summary = outcome.into_summary();
    assert_eq!(summary.tier_name, "Silver");
    assert_eq!(summary.tier_color, "#c0c0c0");
    assert_eq!(summary.strongest_area, "control");
    assert_eq!(summary.weakest_area, "strategy");
    assert_eq!(summary.percentile, 74.0);
    assert_eq!(summary.next_tier.unwrap().points_needed, 550.0);
}

#[tokio::test]
async fn primary_503_composes_from_secondary_sources() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(tier_list_body());
        })
        .await;

    let primary = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/performance-summary");
            then.status(503);
        })
        .await;

    // Secondary source has no skills breakdown
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/rating");
            then.status(200).json_body(json!({ "rating": 2100.0 }));
        })
        .await;

    let outcome = service_for(&server).player_summary("p-7").await.unwrap();
    assert!(outcome.is_fallback());
    primary.assert_async().await;

    // Complete summary with placeholder dimensions, no absent fields
    let summary = outcome.into_summary();
    assert_eq!(summary.tier_name, "Gold");
    assert_eq!(summary.dimensions, DimensionScores::placeholder());
    assert_eq!(summary.percentile, 0.0);
    assert!(summary.next_tier.is_none());
}

#[tokio::test]
async fn both_endpoints_down_yields_all_sources_failed() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(tier_list_body());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/performance-summary");
            then.status(503);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/rating");
            then.status(500);
        })
        .await;

    let err = service_for(&server).player_summary("p-7").await.unwrap_err();
    match err {
        RallyScoreError::AllSourcesFailed { primary, fallback } => {
            assert!(
                matches!(*primary, RallyScoreError::ApiStatus { status: 503, .. })
            );
            assert!(
                matches!(*fallback, RallyScoreError::ApiStatus { status: 500, .. })
            );
        }
        other => panic!("expected AllSourcesFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn partial_skills_payload_is_defaulted_per_field() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(tier_list_body());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-9/performance-summary");
            then.status(200).json_body(json!({
                "rating": 800.0,
                "skills": { "power": 90.0, "strategy": 20.0 }
            }));
        })
        .await;

    let summary = service_for(&server)
        .player_summary("p-9")
        .await
        .unwrap()
        .into_summary();

    assert_eq!(summary.dimensions.power, 90.0);
    assert_eq!(summary.dimensions.strategy, 20.0);
    assert_eq!(summary.dimensions.speed, 50.0);
    assert_eq!(summary.strongest_area, "power");
    assert_eq!(summary.weakest_area, "strategy");
}

#[tokio::test]
async fn out_of_range_percentile_is_treated_as_absent() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(tier_list_body());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-3/performance-summary");
            then.status(200).json_body(json!({
                "rating": 1200.0,
                "percentile": 250.0
            }));
        })
        .await;

    let summary = service_for(&server)
        .player_summary("p-3")
        .await
        .unwrap()
        .into_summary();

    assert_eq!(summary.percentile, 0.0);
}

#[tokio::test]
async fn malformed_payload_is_an_invalid_payload_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/players/p-7/rating");
            then.status(200).body("not json");
        })
        .await;

    let settings = settings_for(&server);
    let api = HttpRatingsApi::new(settings.api.clone()).unwrap();

    use rally_scorer::api::RatingsApi;
    let err = api.fetch_rating_detail("p-7").await.unwrap_err();
    assert!(matches!(err, RallyScoreError::InvalidPayload { .. }));
}

#[tokio::test]
async fn invalid_remote_tier_table_falls_back_to_configured_default() {
    let server = MockServer::start_async().await;

    // Gap between the brackets: rejected at the boundary
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tiers");
            then.status(200).json_body(json!({
                "tiers": [
                    { "name": "Low", "minRating": 0.0, "maxRating": 900.0 },
                    { "name": "High", "minRating": 1000.0, "maxRating": 2000.0 }
                ]
            }));
        })
        .await;

    let service = service_for(&server);
    let table = service.tier_table().await;

    let configured = Settings::default().tiers;
    assert_eq!(table.tiers(), configured.as_slice());
}
