//! Week-over-week trend and risk detection
//!
//! Compares the most recent 7 daily totals against the preceding 7 and
//! flags sustained flight usage across the full window.

use crate::models::{ActivityRecord, AlertKind, RiskAlert, RiskReport};
use crate::rates::EmissionRates;

/// Spike threshold: weekly increase above this percentage raises a warning
const SPIKE_THRESHOLD_PCT: f64 = 15.0;

/// Flight days at or above this count raise the offsetting info alert
const FLIGHT_DAYS_THRESHOLD: usize = 2;

/// Minimum window for a week-over-week comparison
const MIN_RECORDS: usize = 14;

/// Display groups eligible as spike contributors, in tie-break order
const CONTRIBUTOR_GROUPS: [&str; 3] = ["transport", "food", "energy"];

/// Detect week-over-week spikes and frequent air travel
///
/// Requires at least 14 records; shorter windows return `RiskReport::none()`
/// rather than comparing against an undefined previous week. The flight
/// alert is independent of the spike threshold and `has_risk` reflects the
/// spike alone.
pub fn detect_risk(records: &[ActivityRecord], rates: &EmissionRates) -> RiskReport {
    if records.len() < MIN_RECORDS {
        tracing::debug!(
            records = records.len(),
            "window too short for trend comparison, reporting no risk"
        );
        return RiskReport::none();
    }

    let last_week = &records[records.len() - 7..];
    let previous_week = &records[records.len() - 14..records.len() - 7];

    let last_total: f64 = last_week.iter().map(|r| r.total_emission()).sum();
    let previous_total: f64 = previous_week.iter().map(|r| r.total_emission()).sum();

    let percentage_change = if previous_total > 0.0 {
        (last_total - previous_total) / previous_total * 100.0
    } else {
        0.0
    };

    let mut alerts = Vec::new();
    let has_risk = percentage_change > SPIKE_THRESHOLD_PCT;

    if has_risk {
        let contributor = main_contributor(last_week, rates);
        alerts.push(RiskAlert {
            kind: AlertKind::Warning,
            title: "Carbon Spike Detected".to_string(),
            message: format!(
                "Your weekly carbon score increased by {:.1}%. Main contributor: {}.",
                percentage_change, contributor
            ),
            percentage_change: Some(percentage_change),
            category: Some(contributor.to_string()),
        });
    }

    let flight_days = records.iter().filter(|r| r.activity.flight > 0.0).count();
    if flight_days >= FLIGHT_DAYS_THRESHOLD {
        alerts.push(RiskAlert {
            kind: AlertKind::Info,
            title: "Frequent Air Travel".to_string(),
            message: format!(
                "You took {} flights this month. Consider carbon offsetting or video calls for meetings.",
                flight_days
            ),
            percentage_change: None,
            category: Some("flight".to_string()),
        });
    }

    RiskReport {
        has_risk,
        percentage_change,
        alerts,
    }
}

/// Group with the largest last-week emission subtotal
///
/// Ties go to the earliest entry in CONTRIBUTOR_GROUPS (transport, food,
/// energy) - the fixed order the product has always displayed.
fn main_contributor(last_week: &[ActivityRecord], rates: &EmissionRates) -> &'static str {
    let transport: f64 = last_week
        .iter()
        .map(|r| {
            r.activity.car * rates.car
                + r.activity.bus * rates.bus
                + r.activity.flight * rates.flight
        })
        .sum();
    let food: f64 = last_week
        .iter()
        .map(|r| {
            f64::from(r.activity.veg_meals) * rates.veg_meal
                + f64::from(r.activity.non_veg_meals) * rates.non_veg_meal
        })
        .sum();
    let energy: f64 = last_week
        .iter()
        .map(|r| r.activity.electricity * rates.electricity)
        .sum();

    let scores = [transport, food, energy];
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    CONTRIBUTOR_GROUPS[best]
}
