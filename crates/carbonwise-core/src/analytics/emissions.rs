//! Emission calculation and window pattern analysis
//!
//! Pure functions over an in-memory activity window. Category subtotals
//! stay independently retrievable so the percentage breakdown partitions
//! the same total it divides by.

use crate::models::{
    ActivityRecord, CategoryTotals, GroupEmissions, GroupPercentages, PatternSummary,
};
use crate::rates::EmissionRates;

/// Sum raw quantities per category over a window
pub fn category_totals(records: &[ActivityRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for record in records {
        totals.car += record.activity.car;
        totals.bus += record.activity.bus;
        totals.flight += record.activity.flight;
        totals.electricity += record.activity.electricity;
        totals.veg_meals += record.activity.veg_meals;
        totals.non_veg_meals += record.activity.non_veg_meals;
        totals.shopping += record.activity.shopping;
    }
    totals
}

/// Group emission subtotals from raw category totals
pub fn group_emissions(totals: &CategoryTotals, rates: &EmissionRates) -> GroupEmissions {
    GroupEmissions {
        transport: totals.car * rates.car + totals.bus * rates.bus + totals.flight * rates.flight,
        food: f64::from(totals.veg_meals) * rates.veg_meal
            + f64::from(totals.non_veg_meals) * rates.non_veg_meal,
        energy: totals.electricity * rates.electricity,
        shopping: f64::from(totals.shopping) * rates.shopping,
    }
}

/// Compute the window pattern summary
///
/// Percentages are derived from unrounded subtotals; a zero overall total
/// reports 0% for every group instead of dividing by zero.
pub fn compute_patterns(records: &[ActivityRecord], rates: &EmissionRates) -> PatternSummary {
    let totals = category_totals(records);
    let emissions = group_emissions(&totals, rates);
    let total = emissions.transport + emissions.food + emissions.energy + emissions.shopping;

    let percentages = if total > 0.0 {
        GroupPercentages {
            transport: emissions.transport / total * 100.0,
            food: emissions.food / total * 100.0,
            energy: emissions.energy / total * 100.0,
            shopping: emissions.shopping / total * 100.0,
        }
    } else {
        GroupPercentages::default()
    };

    let average_daily = if records.is_empty() {
        0.0
    } else {
        total / records.len() as f64
    };

    PatternSummary {
        totals,
        emissions,
        total_emission: total,
        percentages,
        average_daily,
    }
}
