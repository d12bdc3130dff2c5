//! carbonwise-core - Core library for carbonwise
//!
//! Provides the carbon-footprint analytics pipeline: emission calculation,
//! trend/risk detection, linear-regression forecasting, what-if simulation,
//! and an AI text advisor with a deterministic fallback.

pub mod advisor;
pub mod analytics;
pub mod error;
pub mod generator;
pub mod models;
pub mod rates;

pub use advisor::{LiveTextAdvisor, TextAdvisor};
pub use analytics::InsightBundle;
pub use error::CoreError;
pub use generator::{ActivityProvider, FixtureActivityProvider, RandomActivityProvider};
pub use models::{ActivityRecord, PatternSummary, RiskReport, SimulationResult};
pub use rates::EmissionRates;
