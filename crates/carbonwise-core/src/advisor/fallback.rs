//! Deterministic fallback text
//!
//! Rule-based substitutes for the AI advisor, evaluated from the same
//! pattern/risk numbers. Triggers fire independently; at most three
//! suggestions are returned, in fixed priority order.

use crate::models::{MonthlySummary, PatternSummary, Priority, RiskReport, Suggestion};

/// National monthly average used for the below/above comparison (kg CO2)
pub const NATIONAL_MONTHLY_AVERAGE_KG: f64 = 240.0;

/// Transport share above this percentage triggers the car-usage suggestion
const TRANSPORT_SHARE_THRESHOLD_PCT: f64 = 40.0;

/// Non-veg meal count above this triggers the meatless suggestion
const NON_VEG_MEALS_THRESHOLD: u32 = 20;

/// Electricity consumption above this (kWh) triggers the energy suggestion
const ELECTRICITY_THRESHOLD_KWH: f64 = 150.0;

/// Maximum suggestions returned
const MAX_SUGGESTIONS: usize = 3;

/// Rule-based suggestions when the advisor is unavailable
pub fn fallback_suggestions(patterns: &PatternSummary) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if patterns.percentages.transport > TRANSPORT_SHARE_THRESHOLD_PCT {
        suggestions.push(Suggestion {
            title: "Reduce Car Usage".to_string(),
            description: "Switch to public transport 2 days per week to cut emissions by approximately 18%.".to_string(),
            impact: "18% reduction in transport emissions".to_string(),
            category: "transport".to_string(),
            priority: Priority::High,
        });
    }

    if patterns.totals.non_veg_meals > NON_VEG_MEALS_THRESHOLD {
        suggestions.push(Suggestion {
            title: "Try Meatless Mondays".to_string(),
            description: "Replacing 4 non-veg meals with plant-based alternatives weekly can save 6kg CO2.".to_string(),
            impact: "6kg CO2 saved weekly".to_string(),
            category: "food".to_string(),
            priority: Priority::Medium,
        });
    }

    if patterns.totals.electricity > ELECTRICITY_THRESHOLD_KWH {
        suggestions.push(Suggestion {
            title: "Energy Efficiency".to_string(),
            description: "Unplug devices when not in use and switch to LED bulbs to reduce electricity consumption by 15%.".to_string(),
            impact: "15% reduction in energy bills".to_string(),
            category: "energy".to_string(),
            priority: Priority::Medium,
        });
    }

    if patterns.totals.flight > 0.0 {
        suggestions.push(Suggestion {
            title: "Consider Carbon Offsetting".to_string(),
            description: "Offset your flight emissions through verified carbon offset programs.".to_string(),
            impact: "Neutralize flight emissions".to_string(),
            category: "travel".to_string(),
            priority: Priority::High,
        });
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Rule-based monthly summary when the advisor is unavailable
pub fn fallback_summary(patterns: &PatternSummary, risk: &RiskReport) -> MonthlySummary {
    let comparison = if patterns.total_emission < NATIONAL_MONTHLY_AVERAGE_KG {
        "below"
    } else {
        "above"
    };
    let status = if risk.has_risk {
        "slightly increased"
    } else {
        "remained stable"
    };

    MonthlySummary {
        summary: format!(
            "This month, your carbon footprint {} at {:.1} kg CO2, which is {} the national average. Your main impact area is transport at {:.1}% of total emissions.",
            status, patterns.total_emission, comparison, patterns.percentages.transport
        ),
        highlights: vec![
            format!("Daily average: {:.1} kg CO2", patterns.average_daily),
            format!(
                "Transport accounts for {:.1}% of your footprint",
                patterns.percentages.transport
            ),
            format!("You're {} the 240kg national monthly average", comparison),
        ],
        encouragement: "Every small action counts toward a sustainable future. Keep tracking and making conscious choices!".to_string(),
    }
}
