//! Daily activity records
//!
//! One record per calendar day: raw category quantities plus the derived
//! total emission. The total is computed at construction from the rate
//! table and is not independently settable, so downstream time series
//! always reflect the current table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::rates::EmissionRates;

/// Raw per-category quantities for one day
///
/// Distances in km, electricity in kWh, meals and shopping as counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub car: f64,
    pub bus: f64,
    pub flight: f64,
    pub electricity: f64,
    pub veg_meals: u32,
    pub non_veg_meals: u32,
    pub shopping: u32,
}

impl DailyActivity {
    /// Total emission for this day (kg CO2)
    ///
    /// Weighted sum of every quantity against its rate. This is the single
    /// closed form shared by the calculator, detector and simulator.
    pub fn emission(&self, rates: &EmissionRates) -> f64 {
        self.car * rates.car
            + self.bus * rates.bus
            + self.flight * rates.flight
            + self.electricity * rates.electricity
            + f64::from(self.veg_meals) * rates.veg_meal
            + f64::from(self.non_veg_meals) * rates.non_veg_meal
            + f64::from(self.shopping) * rates.shopping
    }
}

/// One day's activity with its derived total emission
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub activity: DailyActivity,
    total_emission: f64,
}

impl ActivityRecord {
    /// Build a record, deriving the total from the given rate table
    pub fn new(date: NaiveDate, activity: DailyActivity, rates: &EmissionRates) -> Self {
        Self {
            date,
            activity,
            total_emission: activity.emission(rates),
        }
    }

    /// Derived total emission (kg CO2)
    pub fn total_emission(&self) -> f64 {
        self.total_emission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_is_weighted_sum() {
        let rates = EmissionRates::default();
        let activity = DailyActivity {
            car: 10.0,
            veg_meals: 1,
            ..Default::default()
        };
        // 10 * 0.21 + 1 * 1.5
        assert!((activity.emission(&rates) - 3.6).abs() < 1e-9);
    }

    #[test]
    fn record_total_tracks_rate_table() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let activity = DailyActivity {
            electricity: 10.0,
            ..Default::default()
        };

        let default_record = ActivityRecord::new(date, activity, &EmissionRates::default());
        assert!((default_record.total_emission() - 8.2).abs() < 1e-9);

        let alternate = EmissionRates {
            electricity: 1.0,
            ..EmissionRates::default()
        };
        let alternate_record = ActivityRecord::new(date, activity, &alternate);
        assert!((alternate_record.total_emission() - 10.0).abs() < 1e-9);
    }
}
