//! Carbon analytics pipeline
//!
//! Deterministic numeric transformations over a window of daily activity
//! records: categorized emission totals, week-over-week risk detection,
//! regression-based forecasting and what-if simulation. Everything here is
//! synchronous and pure; the AI text layer lives in `advisor`.

use chrono::{DateTime, Utc};

use crate::models::{ActivityRecord, ForecastPoint, PatternSummary, RiskReport, SimulationResult};
use crate::rates::EmissionRates;

pub mod emissions;
pub mod forecasting;
pub mod risk;
pub mod simulation;


pub use emissions::{category_totals, compute_patterns, group_emissions};
pub use forecasting::{forecast_points, LinearFit};
pub use risk::detect_risk;
pub use simulation::{simulate, SimulationToggles};

/// Forecasts for both standard horizons, from one shared regression
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    pub next_7_days: Vec<ForecastPoint>,
    pub next_30_days: Vec<ForecastPoint>,
    pub average_predicted_7: f64,
    pub average_predicted_30: f64,
}

impl Predictions {
    /// Empty predictions for windows too short to fit a line
    pub fn empty() -> Self {
        Self {
            next_7_days: Vec::new(),
            next_30_days: Vec::new(),
            average_predicted_7: 0.0,
            average_predicted_30: 0.0,
        }
    }
}

/// Complete insight data for one activity window
#[derive(Debug, Clone, PartialEq)]
pub struct InsightBundle {
    /// Aggregated totals and percentages
    pub patterns: PatternSummary,
    /// Week-over-week risk findings
    pub risk: RiskReport,
    /// 7- and 30-day forecasts
    pub predictions: Predictions,
    /// Default (no-toggle) simulation, seeding the caller's UI
    pub simulation: SimulationResult,
    /// Timestamp of computation
    pub computed_at: DateTime<Utc>,
}

impl InsightBundle {
    /// Compute the full bundle from an activity window
    ///
    /// The regression is fitted once over the daily-total series and reused
    /// for both horizons. Degenerate windows (fewer than two days) produce
    /// empty predictions instead of failing.
    pub fn compute(records: &[ActivityRecord], rates: &EmissionRates) -> Self {
        let patterns = compute_patterns(records, rates);
        let risk = detect_risk(records, rates);

        let series: Vec<f64> = records.iter().map(|r| r.total_emission()).collect();
        let predictions = match (LinearFit::fit(&series), records.last()) {
            (Some(fit), Some(last)) => {
                let next_7_days = forecast_points(&fit, last.date, 7);
                let next_30_days = forecast_points(&fit, last.date, 30);
                Predictions {
                    average_predicted_7: average(&next_7_days),
                    average_predicted_30: average(&next_30_days),
                    next_7_days,
                    next_30_days,
                }
            }
            _ => {
                tracing::debug!(days = records.len(), "series too short for forecasting");
                Predictions::empty()
            }
        };

        let simulation = simulate(records, SimulationToggles::default(), rates);

        Self {
            patterns,
            risk,
            predictions,
            simulation,
            computed_at: Utc::now(),
        }
    }
}

fn average(points: &[ForecastPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.predicted).sum::<f64>() / points.len() as f64
}
