//! Emission rate table (kg CO2 per unit)
//!
//! Every component that touches category quantities receives the same
//! `EmissionRates` value, so totals reconcile across the calculator,
//! the risk detector and the simulator. The table is an injected value,
//! not a module-level static: tests substitute alternate tables freely.

use serde::{Deserialize, Serialize};

/// Per-unit emission factors (kg CO2)
///
/// Units per field: car/bus/flight per km, electricity per kWh,
/// veg_meal/non_veg_meal per meal, shopping per trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionRates {
    pub car: f64,
    pub bus: f64,
    pub flight: f64,
    pub electricity: f64,
    pub veg_meal: f64,
    pub non_veg_meal: f64,
    pub shopping: f64,
}

impl Default for EmissionRates {
    /// Canonical rate table used in production
    fn default() -> Self {
        Self {
            car: 0.21,
            bus: 0.05,
            flight: 0.15,
            electricity: 0.82,
            veg_meal: 1.5,
            non_veg_meal: 3.0,
            shopping: 5.0,
        }
    }
}
