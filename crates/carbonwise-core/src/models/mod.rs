//! Data model for carbonwise
//!
//! All entities are created fresh per request and never mutated after
//! construction; nothing here persists beyond a response.

pub mod activity;
pub mod report;

pub use activity::{ActivityRecord, DailyActivity};
pub use report::{
    AlertKind, CategoryTotals, ForecastPoint, GroupEmissions, GroupPercentages, MonthlySummary,
    PatternSummary, Priority, ReductionEntry, RiskAlert, RiskReport, SimulationResult, Suggestion,
};
