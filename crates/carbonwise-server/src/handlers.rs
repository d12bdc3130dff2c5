//! API request handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use carbonwise_core::advisor::{suggestions_or_fallback, summary_or_fallback};
use carbonwise_core::analytics::{simulate, InsightBundle};

use crate::dto::{
    CarbonDay, InsightAction, InsightsRequest, InsightsResponse, PatternsDto, PredictionsDto,
    RiskReportDto, SimulationDto,
};
use crate::state::AppState;

/// Days of history pulled for every insight request
const WINDOW_DAYS: usize = 30;

/// POST /insights
pub async fn insights_handler(
    State(state): State<AppState>,
    Json(request): Json<InsightsRequest>,
) -> Response {
    match build_insights(&state, &request).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "insight generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to generate insights" })),
            )
                .into_response()
        }
    }
}

/// GET /api/health
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn build_insights(
    state: &AppState,
    request: &InsightsRequest,
) -> anyhow::Result<InsightsResponse> {
    let records = state.provider.provide(WINDOW_DAYS)?;
    let bundle = InsightBundle::compute(&records, &state.rates);

    // A simulate request with explicit toggles replaces the default
    // (all-off) simulation the bundle carries.
    let simulation = match (request.action, request.simulation_options) {
        (InsightAction::Simulate, Some(toggles)) => simulate(&records, toggles, &state.rates),
        _ => bundle.simulation.clone(),
    };

    let advisor = state.advisor.as_deref();

    let suggestions = match request.action {
        InsightAction::Suggestions | InsightAction::Full => {
            Some(suggestions_or_fallback(advisor, &bundle.patterns).await)
        }
        _ => None,
    };

    let ai_summary = match request.action {
        InsightAction::Summary | InsightAction::Full => {
            Some(summary_or_fallback(advisor, &bundle.patterns, &bundle.risk).await)
        }
        _ => None,
    };

    Ok(InsightsResponse {
        carbon_data: records.iter().map(CarbonDay::from).collect(),
        patterns: PatternsDto::from(&bundle.patterns),
        risk_alerts: RiskReportDto::from(&bundle.risk),
        predictions: PredictionsDto::from(&bundle.predictions),
        simulation: SimulationDto::from(&simulation),
        suggestions,
        ai_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonwise_core::analytics::SimulationToggles;
    use carbonwise_core::models::{ActivityRecord, DailyActivity};
    use carbonwise_core::{EmissionRates, FixtureActivityProvider};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn fixture_state(days: usize) -> AppState {
        let rates = EmissionRates::default();
        let base = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let records: Vec<_> = (0..days)
            .map(|i| {
                let activity = DailyActivity {
                    car: 10.0,
                    veg_meals: 2,
                    ..Default::default()
                };
                ActivityRecord::new(base + chrono::Duration::days(i as i64), activity, &rates)
            })
            .collect();

        AppState::new(rates, Arc::new(FixtureActivityProvider::new(records)), None)
    }

    #[tokio::test]
    async fn full_action_carries_both_text_sections() {
        let state = fixture_state(30);
        let request = InsightsRequest {
            action: InsightAction::Full,
            simulation_options: None,
        };

        let response = build_insights(&state, &request).await.unwrap();
        assert!(response.suggestions.is_some());
        assert!(response.ai_summary.is_some());
        assert_eq!(response.carbon_data.len(), 30);
    }

    #[tokio::test]
    async fn suggestions_action_omits_summary() {
        let state = fixture_state(30);
        let request = InsightsRequest {
            action: InsightAction::Suggestions,
            simulation_options: None,
        };

        let response = build_insights(&state, &request).await.unwrap();
        assert!(response.suggestions.is_some());
        assert!(response.ai_summary.is_none());
    }

    #[tokio::test]
    async fn simulate_action_applies_toggles() {
        let state = fixture_state(30);
        let request = InsightsRequest {
            action: InsightAction::Simulate,
            simulation_options: Some(SimulationToggles {
                flights: false,
                meat: false,
                car_usage: true,
            }),
        };

        let response = build_insights(&state, &request).await.unwrap();
        // 30 days of 10 km at 0.21 kg/km, halved by the toggle
        assert_eq!(response.simulation.baseline_total, 153.0);
        assert_eq!(response.simulation.total_reduction, 31.5);
        assert_eq!(response.simulation.reductions.len(), 1);
        assert_eq!(response.simulation.reductions[0].category, "Car Usage (50%)");
    }

    #[tokio::test]
    async fn base_action_skips_advisor_text() {
        let state = fixture_state(30);
        let request = InsightsRequest {
            action: InsightAction::Base,
            simulation_options: None,
        };

        let response = build_insights(&state, &request).await.unwrap();
        assert!(response.suggestions.is_none());
        assert!(response.ai_summary.is_none());
        assert_eq!(response.simulation.total_reduction, 0.0);
        assert_eq!(response.carbon_data.len(), 30);
    }

    #[tokio::test]
    async fn simulate_without_toggles_keeps_default_simulation() {
        let state = fixture_state(30);
        let request = InsightsRequest {
            action: InsightAction::Simulate,
            simulation_options: None,
        };

        let response = build_insights(&state, &request).await.unwrap();
        assert_eq!(response.simulation.total_reduction, 0.0);
        assert!(response.simulation.reductions.is_empty());
    }
}
