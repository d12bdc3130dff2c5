//! Daily-total forecasting with linear regression
//!
//! Fits an ordinary least-squares line over the historical series once;
//! any horizon is then projected from the same coefficients, so 7-day and
//! 30-day requests lie on one fitted line.

use chrono::{Duration, NaiveDate};

use crate::models::ForecastPoint;

/// Fitted regression line `y = slope * x + intercept`
///
/// x is the zero-based day index of the historical series, not a calendar
/// date. The fit is a pure function of the series alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Length of the series the line was fitted over
    n: usize,
}

impl LinearFit {
    /// Fit a least-squares line over `series` (index 0 = oldest)
    ///
    /// Returns `None` when the regression is degenerate: fewer than two
    /// points, or a zero denominator `n * sum_xx - sum_x^2`.
    pub fn fit(series: &[f64]) -> Option<Self> {
        let n = series.len();
        if n < 2 {
            return None;
        }

        let nf = n as f64;
        let sum_x: f64 = (0..n).map(|x| x as f64).sum();
        let sum_y: f64 = series.iter().sum();
        let sum_xx: f64 = (0..n).map(|x| (x as f64) * (x as f64)).sum();
        let sum_xy: f64 = series
            .iter()
            .enumerate()
            .map(|(x, y)| (x as f64) * y)
            .sum();

        let denominator = nf * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return None;
        }

        let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / nf;

        Some(Self {
            slope,
            intercept,
            n,
        })
    }

    /// Project the next `horizon` daily values past the historical window
    ///
    /// Values are `slope * x + intercept` for x = n, n+1, ... and clamped
    /// at zero: emissions cannot be negative, so a downward line flattens
    /// rather than erroring.
    pub fn project(&self, horizon: usize) -> Vec<f64> {
        (0..horizon)
            .map(|i| {
                let x = (self.n + i) as f64;
                (self.slope * x + self.intercept).max(0.0)
            })
            .collect()
    }
}

/// Pair projected values with calendar dates
///
/// Dates start the day after `window_end`, one per projected value. The
/// regression itself is date-agnostic; the assembler owns the calendar.
pub fn forecast_points(fit: &LinearFit, window_end: NaiveDate, horizon: usize) -> Vec<ForecastPoint> {
    fit.project(horizon)
        .into_iter()
        .enumerate()
        .map(|(i, predicted)| ForecastPoint {
            date: window_end + Duration::days(i as i64 + 1),
            predicted,
        })
        .collect()
}
