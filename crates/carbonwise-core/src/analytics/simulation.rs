//! What-if simulation under category-removal toggles
//!
//! Each enabled toggle subtracts an independent amount from one running
//! total, so the numeric result never depends on toggle order.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityRecord, ReductionEntry, SimulationResult};
use crate::rates::EmissionRates;

/// Removal toggles for the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationToggles {
    pub flights: bool,
    pub meat: bool,
    pub car_usage: bool,
}

/// Recompute a counterfactual window total
///
/// flights removes all flight emissions, meat removes all non-veg-meal
/// emissions, car_usage removes half of car emissions (a 50% usage cut,
/// not elimination). With no toggles the result equals the baseline and
/// every derived figure is zero - the default seeding case.
pub fn simulate(
    records: &[ActivityRecord],
    toggles: SimulationToggles,
    rates: &EmissionRates,
) -> SimulationResult {
    let baseline_total: f64 = records.iter().map(|r| r.total_emission()).sum();

    let mut simulated_total = baseline_total;
    let mut reductions = Vec::new();

    let percentage_of_baseline = |amount: f64| {
        if baseline_total > 0.0 {
            amount / baseline_total * 100.0
        } else {
            0.0
        }
    };

    if toggles.flights {
        let amount: f64 = records
            .iter()
            .map(|r| r.activity.flight * rates.flight)
            .sum();
        simulated_total -= amount;
        reductions.push(ReductionEntry {
            category: "Flights".to_string(),
            amount,
            percentage: percentage_of_baseline(amount),
        });
    }

    if toggles.meat {
        let amount: f64 = records
            .iter()
            .map(|r| f64::from(r.activity.non_veg_meals) * rates.non_veg_meal)
            .sum();
        simulated_total -= amount;
        reductions.push(ReductionEntry {
            category: "Non-Veg Meals".to_string(),
            amount,
            percentage: percentage_of_baseline(amount),
        });
    }

    if toggles.car_usage {
        let amount: f64 = records
            .iter()
            .map(|r| r.activity.car * rates.car)
            .sum::<f64>()
            * 0.5;
        simulated_total -= amount;
        reductions.push(ReductionEntry {
            category: "Car Usage (50%)".to_string(),
            amount,
            percentage: percentage_of_baseline(amount),
        });
    }

    let total_reduction = baseline_total - simulated_total;
    SimulationResult {
        baseline_total,
        simulated_total,
        total_reduction,
        percentage_reduction: percentage_of_baseline(total_reduction),
        reductions,
    }
}
