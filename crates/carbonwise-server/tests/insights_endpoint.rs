//! Integration tests for the insights endpoint

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use carbonwise_core::models::{ActivityRecord, DailyActivity};
use carbonwise_core::{ActivityProvider, EmissionRates, FixtureActivityProvider};
use carbonwise_server::{create_router, AppState};
use chrono::{Duration, NaiveDate};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn fixture_state() -> AppState {
    let rates = EmissionRates::default();
    let base = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let records: Vec<_> = (0..30)
        .map(|i| {
            let activity = DailyActivity {
                car: 12.0,
                bus: 4.0,
                electricity: 6.0,
                veg_meals: 2,
                non_veg_meals: 1,
                ..Default::default()
            };
            ActivityRecord::new(base + Duration::days(i), activity, &rates)
        })
        .collect();

    AppState::new(rates, Arc::new(FixtureActivityProvider::new(records)), None)
}

fn post_insights(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/insights")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn full_action_returns_complete_payload() {
    let router = create_router(fixture_state());

    let response = router
        .oneshot(post_insights(r#"{"action":"full"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["carbonData"].as_array().unwrap().len(), 30);
    assert!(body["patterns"]["totalEmission"].as_f64().unwrap() > 0.0);
    assert_eq!(body["riskAlerts"]["hasRisk"], false);
    assert_eq!(body["predictions"]["next7Days"].as_array().unwrap().len(), 7);
    assert_eq!(
        body["predictions"]["next30Days"].as_array().unwrap().len(),
        30
    );
    // Fallback text is present even without a configured advisor
    assert!(body["suggestions"].is_array());
    assert!(body["aiSummary"]["summary"].is_string());
}

#[tokio::test]
async fn suggestions_action_omits_summary_field() {
    let router = create_router(fixture_state());

    let response = router
        .oneshot(post_insights(r#"{"action":"suggestions"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["suggestions"].is_array());
    assert!(body.get("aiSummary").is_none());
}

#[tokio::test]
async fn summary_action_omits_suggestions_field() {
    let router = create_router(fixture_state());

    let response = router
        .oneshot(post_insights(r#"{"action":"summary"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body.get("suggestions").is_none());
    assert!(body["aiSummary"]["summary"].is_string());
}

#[tokio::test]
async fn simulate_action_honors_toggles() {
    let router = create_router(fixture_state());

    let body_in = r#"{"action":"simulate","simulationOptions":{"flights":false,"meat":true,"carUsage":false}}"#;
    let response = router.oneshot(post_insights(body_in)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    // 30 days of one non-veg meal at 3.0 kg each
    assert_eq!(body["simulation"]["totalReduction"], 90.0);
    let reductions = body["simulation"]["reductions"].as_array().unwrap();
    assert_eq!(reductions.len(), 1);
    assert_eq!(reductions[0]["category"], "Non-Veg Meals");
    assert!(body.get("suggestions").is_none());
    assert!(body.get("aiSummary").is_none());
}

#[tokio::test]
async fn flat_series_forecast_stays_at_daily_total() {
    let router = create_router(fixture_state());

    let response = router
        .oneshot(post_insights(r#"{"action":"full"}"#))
        .await
        .unwrap();
    let body = json_body(response).await;

    // Constant input: 12*0.21 + 4*0.05 + 6*0.82 + 2*1.5 + 1*3.0 = 13.64/day
    let first = &body["predictions"]["next7Days"][0];
    assert_eq!(first["predicted"], 13.64);
    assert_eq!(body["predictions"]["averagePredicted7"], 13.64);
    assert_eq!(first["date"], "2026-03-31");
}

#[tokio::test]
async fn absent_action_returns_base_payload() {
    let router = create_router(fixture_state());

    let response = router.oneshot(post_insights("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["carbonData"].as_array().unwrap().len(), 30);
    assert_eq!(body["simulation"]["totalReduction"], 0.0);
    assert!(body.get("suggestions").is_none());
    assert!(body.get("aiSummary").is_none());
}

#[tokio::test]
async fn unrecognized_action_returns_base_payload() {
    let router = create_router(fixture_state());

    let response = router
        .oneshot(post_insights(r#"{"action":"unknown"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["patterns"]["totalEmission"].as_f64().unwrap() > 0.0);
    assert!(body.get("suggestions").is_none());
    assert!(body.get("aiSummary").is_none());
}

#[tokio::test]
async fn provider_failure_maps_to_500_with_error_body() {
    struct OfflineProvider;

    impl ActivityProvider for OfflineProvider {
        fn provide(&self, _window: usize) -> anyhow::Result<Vec<ActivityRecord>> {
            anyhow::bail!("activity source offline")
        }
    }

    let state = AppState::new(EmissionRates::default(), Arc::new(OfflineProvider), None);
    let router = create_router(state);

    let response = router
        .oneshot(post_insights(r#"{"action":"full"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to generate insights");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let router = create_router(fixture_state());

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}
