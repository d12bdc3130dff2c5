//! Wire types for the insights API
//!
//! The core computes at full precision; this module is the serialization
//! boundary where kg values are rounded to 2 decimals and percentages to
//! 1, so rounding error never compounds across chained computations.

use carbonwise_core::analytics::{Predictions, SimulationToggles};
use carbonwise_core::models::{
    ActivityRecord, ForecastPoint, MonthlySummary, PatternSummary, RiskAlert, RiskReport,
    SimulationResult, Suggestion,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Request
// ============================================================================

/// Which insight sections the caller wants
///
/// Absent or unrecognized actions fall through to `Base`: the numeric
/// payload with the default simulation and no advisor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightAction {
    Suggestions,
    Summary,
    Full,
    Simulate,
    #[default]
    #[serde(other)]
    Base,
}

/// POST /insights request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[serde(default)]
    pub action: InsightAction,
    #[serde(default)]
    pub simulation_options: Option<SimulationToggles>,
}

// ============================================================================
// Response
// ============================================================================

/// One day of the historical emission series
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonDay {
    pub date: NaiveDate,
    pub emission: f64,
}

impl From<&ActivityRecord> for CarbonDay {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            date: record.date,
            emission: round2(record.total_emission()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotalsDto {
    pub car: f64,
    pub bus: f64,
    pub flight: f64,
    pub electricity: f64,
    pub veg_meals: u32,
    pub non_veg_meals: u32,
    pub shopping: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupValuesDto {
    pub transport: f64,
    pub food: f64,
    pub energy: f64,
    pub shopping: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternsDto {
    pub totals: CategoryTotalsDto,
    pub emissions: GroupValuesDto,
    pub total_emission: f64,
    pub percentages: GroupValuesDto,
    pub average_daily: f64,
}

impl From<&PatternSummary> for PatternsDto {
    fn from(patterns: &PatternSummary) -> Self {
        Self {
            totals: CategoryTotalsDto {
                car: round1(patterns.totals.car),
                bus: round1(patterns.totals.bus),
                flight: round1(patterns.totals.flight),
                electricity: round1(patterns.totals.electricity),
                veg_meals: patterns.totals.veg_meals,
                non_veg_meals: patterns.totals.non_veg_meals,
                shopping: patterns.totals.shopping,
            },
            emissions: GroupValuesDto {
                transport: round2(patterns.emissions.transport),
                food: round2(patterns.emissions.food),
                energy: round2(patterns.emissions.energy),
                shopping: round2(patterns.emissions.shopping),
            },
            total_emission: round2(patterns.total_emission),
            percentages: GroupValuesDto {
                transport: round1(patterns.percentages.transport),
                food: round1(patterns.percentages.food),
                energy: round1(patterns.percentages.energy),
                shopping: round1(patterns.percentages.shopping),
            },
            average_daily: round2(patterns.average_daily),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlertDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&RiskAlert> for RiskAlertDto {
    fn from(alert: &RiskAlert) -> Self {
        Self {
            kind: match alert.kind {
                carbonwise_core::models::AlertKind::Warning => "warning".to_string(),
                carbonwise_core::models::AlertKind::Info => "info".to_string(),
            },
            title: alert.title.clone(),
            message: alert.message.clone(),
            percentage_change: alert.percentage_change.map(round1),
            category: alert.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReportDto {
    pub has_risk: bool,
    pub percentage_change: f64,
    pub alerts: Vec<RiskAlertDto>,
}

impl From<&RiskReport> for RiskReportDto {
    fn from(report: &RiskReport) -> Self {
        Self {
            has_risk: report.has_risk,
            percentage_change: round1(report.percentage_change),
            alerts: report.alerts.iter().map(RiskAlertDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPointDto {
    pub date: NaiveDate,
    pub predicted: f64,
}

impl From<&ForecastPoint> for ForecastPointDto {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: point.date,
            predicted: round2(point.predicted),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionsDto {
    pub next_7_days: Vec<ForecastPointDto>,
    pub next_30_days: Vec<ForecastPointDto>,
    pub average_predicted_7: f64,
    pub average_predicted_30: f64,
}

impl From<&Predictions> for PredictionsDto {
    fn from(predictions: &Predictions) -> Self {
        Self {
            next_7_days: predictions.next_7_days.iter().map(Into::into).collect(),
            next_30_days: predictions.next_30_days.iter().map(Into::into).collect(),
            average_predicted_7: round2(predictions.average_predicted_7),
            average_predicted_30: round2(predictions.average_predicted_30),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionDto {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDto {
    pub baseline_total: f64,
    pub simulated_total: f64,
    pub total_reduction: f64,
    pub percentage_reduction: f64,
    pub reductions: Vec<ReductionDto>,
}

impl From<&SimulationResult> for SimulationDto {
    fn from(result: &SimulationResult) -> Self {
        Self {
            baseline_total: round2(result.baseline_total),
            simulated_total: round2(result.simulated_total),
            total_reduction: round2(result.total_reduction),
            percentage_reduction: round1(result.percentage_reduction),
            reductions: result
                .reductions
                .iter()
                .map(|entry| ReductionDto {
                    category: entry.category.clone(),
                    amount: round2(entry.amount),
                    percentage: round1(entry.percentage),
                })
                .collect(),
        }
    }
}

/// POST /insights response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub carbon_data: Vec<CarbonDay>,
    pub patterns: PatternsDto,
    pub risk_alerts: RiskReportDto,
    pub predictions: PredictionsDto,
    pub simulation: SimulationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<MonthlySummary>,
}
