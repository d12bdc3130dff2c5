//! Activity data providers
//!
//! The analytics core is provider-agnostic: anything that can produce a
//! window of daily records plugs in behind `ActivityProvider`, so tests
//! run on literal fixtures while the demo deployment uses the synthetic
//! generator below.

use anyhow::Result;
use chrono::{Duration, Local};
use rand::Rng;

use crate::models::{ActivityRecord, DailyActivity};
use crate::rates::EmissionRates;

/// Source of daily activity windows
///
/// Records are returned oldest first, one per calendar day, with dates
/// unique within the window.
pub trait ActivityProvider: Send + Sync {
    /// Produce the trailing `window` days of activity, ending today
    fn provide(&self, window: usize) -> Result<Vec<ActivityRecord>>;
}

/// Synthetic activity generator
///
/// Stand-in for a real activity-log source: plausible commute distances,
/// household electricity, meals, the occasional shopping trip, and a
/// long-distance flight every 15th day.
#[derive(Debug, Clone)]
pub struct RandomActivityProvider {
    rates: EmissionRates,
}

impl RandomActivityProvider {
    pub fn new(rates: EmissionRates) -> Self {
        Self { rates }
    }
}

impl ActivityProvider for RandomActivityProvider {
    fn provide(&self, window: usize) -> Result<Vec<ActivityRecord>> {
        let mut rng = rand::thread_rng();
        let today = Local::now().date_naive();

        let records = (0..window)
            .map(|day| {
                let days_ago = (window - 1 - day) as i64;
                let date = today - Duration::days(days_ago);

                let activity = DailyActivity {
                    car: rng.gen_range(5.0..35.0),
                    bus: rng.gen_range(0.0..10.0),
                    flight: if days_ago % 15 == 0 {
                        rng.gen_range(50.0..250.0)
                    } else {
                        0.0
                    },
                    electricity: rng.gen_range(3.0..11.0),
                    veg_meals: rng.gen_range(1..=3),
                    non_veg_meals: rng.gen_range(0..=1),
                    shopping: if rng.gen_bool(0.3) { 1 } else { 0 },
                };

                ActivityRecord::new(date, activity, &self.rates)
            })
            .collect();

        Ok(records)
    }
}

/// Fixed-window provider for tests and demos
///
/// Replays the same records on every call.
#[derive(Debug, Clone)]
pub struct FixtureActivityProvider {
    records: Vec<ActivityRecord>,
}

impl FixtureActivityProvider {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

impl ActivityProvider for FixtureActivityProvider {
    fn provide(&self, window: usize) -> Result<Vec<ActivityRecord>> {
        let start = self.records.len().saturating_sub(window);
        Ok(self.records[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn random_provider_fills_window_with_unique_ordered_dates() {
        let provider = RandomActivityProvider::new(EmissionRates::default());
        let records = provider.provide(30).unwrap();

        assert_eq!(records.len(), 30);
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date, "dates must ascend");
        }
    }

    #[test]
    fn random_provider_schedules_flights_every_15th_day() {
        let provider = RandomActivityProvider::new(EmissionRates::default());
        let records = provider.provide(30).unwrap();

        let flight_days = records.iter().filter(|r| r.activity.flight > 0.0).count();
        assert_eq!(flight_days, 2, "30-day window has flights on day 0 and 15");
    }

    #[test]
    fn random_provider_quantities_stay_in_range() {
        let provider = RandomActivityProvider::new(EmissionRates::default());
        for record in provider.provide(30).unwrap() {
            let a = record.activity;
            assert!(a.car >= 5.0 && a.car < 35.0);
            assert!(a.bus >= 0.0 && a.bus < 10.0);
            assert!(a.electricity >= 3.0 && a.electricity < 11.0);
            assert!((1..=3).contains(&a.veg_meals));
            assert!(a.non_veg_meals <= 1);
            assert!(a.shopping <= 1);
        }
    }

    #[test]
    fn fixture_provider_returns_trailing_window() {
        let rates = EmissionRates::default();
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let records: Vec<_> = (0..10)
            .map(|i| {
                ActivityRecord::new(
                    base + Duration::days(i),
                    DailyActivity::default(),
                    &rates,
                )
            })
            .collect();

        let provider = FixtureActivityProvider::new(records.clone());
        let window = provider.provide(4).unwrap();
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].date, records[6].date);
    }
}
