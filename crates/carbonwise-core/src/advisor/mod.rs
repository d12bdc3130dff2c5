//! AI text advisor
//!
//! Natural-language suggestions and the monthly summary come from an
//! external text-generation collaborator. The collaborator is a capability
//! behind the `TextAdvisor` trait; the orchestration helpers below make
//! exactly one attempt per insight type and substitute the deterministic
//! fallback on any failure, so the analytics response never degrades into
//! an error because of it.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::{MonthlySummary, PatternSummary, RiskReport, Suggestion};

pub mod fallback;
pub mod live;
pub mod prompt;

pub use live::{AdvisorConfig, LiveTextAdvisor};

/// External text-generation collaborator
#[async_trait]
pub trait TextAdvisor: Send + Sync {
    /// Generate personalized suggestions from the window's numbers
    async fn suggestions(&self, patterns: &PatternSummary) -> Result<Vec<Suggestion>, CoreError>;

    /// Generate the monthly summary text
    async fn monthly_summary(
        &self,
        patterns: &PatternSummary,
        risk: &RiskReport,
    ) -> Result<MonthlySummary, CoreError>;
}

/// Suggestions from the advisor, or the rule-based fallback
///
/// `None` means no advisor is configured; errors are logged and recovered
/// locally, never surfaced to the caller.
pub async fn suggestions_or_fallback(
    advisor: Option<&dyn TextAdvisor>,
    patterns: &PatternSummary,
) -> Vec<Suggestion> {
    match advisor {
        Some(advisor) => match advisor.suggestions(patterns).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!(error = %err, "advisor suggestions failed, using fallback");
                fallback::fallback_suggestions(patterns)
            }
        },
        None => {
            tracing::debug!("no advisor configured, using fallback suggestions");
            fallback::fallback_suggestions(patterns)
        }
    }
}

/// Monthly summary from the advisor, or the rule-based fallback
pub async fn summary_or_fallback(
    advisor: Option<&dyn TextAdvisor>,
    patterns: &PatternSummary,
    risk: &RiskReport,
) -> MonthlySummary {
    match advisor {
        Some(advisor) => match advisor.monthly_summary(patterns, risk).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(error = %err, "advisor summary failed, using fallback");
                fallback::fallback_summary(patterns, risk)
            }
        },
        None => {
            tracing::debug!("no advisor configured, using fallback summary");
            fallback::fallback_summary(patterns, risk)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryTotals, GroupEmissions, GroupPercentages};

    struct FailingAdvisor;

    #[async_trait]
    impl TextAdvisor for FailingAdvisor {
        async fn suggestions(
            &self,
            _patterns: &PatternSummary,
        ) -> Result<Vec<Suggestion>, CoreError> {
            Err(CoreError::AdvisorTimeout { timeout_secs: 10 })
        }

        async fn monthly_summary(
            &self,
            _patterns: &PatternSummary,
            _risk: &RiskReport,
        ) -> Result<MonthlySummary, CoreError> {
            Err(CoreError::AdvisorTimeout { timeout_secs: 10 })
        }
    }

    fn transport_heavy_patterns() -> PatternSummary {
        PatternSummary {
            totals: CategoryTotals {
                car: 600.0,
                flight: 200.0,
                ..Default::default()
            },
            emissions: GroupEmissions {
                transport: 156.0,
                food: 40.0,
                energy: 30.0,
                shopping: 10.0,
            },
            total_emission: 236.0,
            percentages: GroupPercentages {
                transport: 66.1,
                food: 16.9,
                energy: 12.7,
                shopping: 4.2,
            },
            average_daily: 7.9,
        }
    }

    #[tokio::test]
    async fn failing_advisor_falls_back_to_rules() {
        let patterns = transport_heavy_patterns();
        let advisor = FailingAdvisor;

        let suggestions = suggestions_or_fallback(Some(&advisor), &patterns).await;
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].title, "Reduce Car Usage");

        let summary = summary_or_fallback(Some(&advisor), &patterns, &RiskReport::none()).await;
        assert!(summary.summary.contains("remained stable"));
    }

    #[tokio::test]
    async fn missing_advisor_uses_fallback_directly() {
        let patterns = transport_heavy_patterns();
        let suggestions = suggestions_or_fallback(None, &patterns).await;
        assert!(suggestions.len() <= 3);
    }
}
