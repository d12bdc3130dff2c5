//! Derived analytics types
//!
//! Everything here is recomputed per request from an activity window.
//! Values are kept at full precision; rounding for display happens at the
//! serialization boundary in the server crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-category cumulative raw quantities over a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub car: f64,
    pub bus: f64,
    pub flight: f64,
    pub electricity: f64,
    pub veg_meals: u32,
    pub non_veg_meals: u32,
    pub shopping: u32,
}

/// Emission subtotals grouped for display (kg CO2)
///
/// transport = car + bus + flight, food = veg + non-veg meals,
/// energy = electricity, shopping stands alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEmissions {
    pub transport: f64,
    pub food: f64,
    pub energy: f64,
    pub shopping: f64,
}

/// Percentage share per group; all zero when the window total is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPercentages {
    pub transport: f64,
    pub food: f64,
    pub energy: f64,
    pub shopping: f64,
}

/// Aggregated behavior over a window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub totals: CategoryTotals,
    pub emissions: GroupEmissions,
    pub total_emission: f64,
    pub percentages: GroupPercentages,
    pub average_daily: f64,
}

/// Alert severity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

/// A transient finding; no lifecycle beyond the single response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Week-over-week risk findings
///
/// `has_risk` reflects only the spike threshold, not the flight alert.
/// Alerts are ordered: spike warning (if any) before the flight info.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub has_risk: bool,
    pub percentage_change: f64,
    pub alerts: Vec<RiskAlert>,
}

impl RiskReport {
    /// Report for windows too short to compare (no risk, no alerts)
    pub fn none() -> Self {
        Self {
            has_risk: false,
            percentage_change: 0.0,
            alerts: Vec::new(),
        }
    }
}

/// One projected daily total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
}

/// One per-category reduction in a what-if result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionEntry {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Counterfactual recomputation under removal toggles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub baseline_total: f64,
    pub simulated_total: f64,
    pub total_reduction: f64,
    pub percentage_reduction: f64,
    pub reductions: Vec<ReductionEntry>,
}

/// Suggestion priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One actionable suggestion (AI-generated or rule-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub category: String,
    pub priority: Priority,
}

/// Monthly summary text (AI-generated or rule-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub summary: String,
    pub highlights: Vec<String>,
    pub encouragement: String,
}
