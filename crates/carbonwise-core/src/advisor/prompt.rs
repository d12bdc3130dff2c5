//! Prompt construction for the text advisor
//!
//! The contract with the collaborator: supply category percentages,
//! absolute subtotals and raw counts in the prompt; expect back a small
//! structured object matching a fixed schema.

use crate::models::{PatternSummary, RiskReport};

/// System prompt for suggestion generation
pub const SUGGESTIONS_SYSTEM: &str = "You are an AI sustainability advisor. Generate personalized, actionable suggestions to reduce carbon footprint based on user data. Be specific with numbers and percentages. Respond with a JSON object: {\"suggestions\": [{\"title\", \"description\", \"impact\", \"category\", \"priority\": \"high\"|\"medium\"|\"low\"}]}.";

/// System prompt for the monthly summary
pub const SUMMARY_SYSTEM: &str = "You are an encouraging sustainability advisor. Write a brief, positive monthly summary about carbon footprint progress. Be encouraging and sustainability-focused. Respond with a JSON object: {\"summary\", \"highlights\": [string], \"encouragement\"}.";

/// User prompt carrying the month's numbers for suggestion generation
pub fn suggestions_prompt(patterns: &PatternSummary) -> String {
    format!(
        "Based on this carbon footprint data, generate 3 personalized suggestions:\n\
         \n\
         Monthly Analysis:\n\
         - Total Emission: {:.1} kg CO2\n\
         - Transport: {:.1}% ({:.1} kg)\n\
         - Food: {:.1}% ({:.1} kg)\n\
         - Energy: {:.1}% ({:.1} kg)\n\
         - Shopping: {:.1}% ({:.1} kg)\n\
         \n\
         Details:\n\
         - Total car travel: {:.0} km\n\
         - Total flights: {:.0} km\n\
         - Non-veg meals: {} meals\n\
         - Electricity usage: {:.0} kWh\n\
         \n\
         Generate specific, actionable suggestions with exact impact percentages.",
        patterns.total_emission,
        patterns.percentages.transport,
        patterns.emissions.transport,
        patterns.percentages.food,
        patterns.emissions.food,
        patterns.percentages.energy,
        patterns.emissions.energy,
        patterns.percentages.shopping,
        patterns.emissions.shopping,
        patterns.totals.car,
        patterns.totals.flight,
        patterns.totals.non_veg_meals,
        patterns.totals.electricity,
    )
}

/// User prompt for the monthly summary
pub fn summary_prompt(patterns: &PatternSummary, risk: &RiskReport) -> String {
    let risk_status = if risk.has_risk {
        format!("Weekly increase of {:.1}%", risk.percentage_change)
    } else {
        "Stable".to_string()
    };

    format!(
        "Write a monthly carbon footprint summary for a user with:\n\
         \n\
         This Month:\n\
         - Total emissions: {:.1} kg CO2\n\
         - Daily average: {:.1} kg CO2\n\
         - Main contributor: Transport ({:.1}%)\n\
         \n\
         Compared to typical averages:\n\
         - National average: ~240 kg/month\n\
         - Global average: ~400 kg/month\n\
         \n\
         Risk status: {}\n\
         \n\
         Write an encouraging 2-3 sentence summary, list 2-3 highlights, and end with an encouraging message.",
        patterns.total_emission, patterns.average_daily, patterns.percentages.transport, risk_status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryTotals, GroupEmissions, GroupPercentages};

    #[test]
    fn prompts_carry_the_window_numbers() {
        let patterns = PatternSummary {
            totals: CategoryTotals {
                car: 412.0,
                flight: 250.0,
                electricity: 180.0,
                non_veg_meals: 14,
                ..Default::default()
            },
            emissions: GroupEmissions {
                transport: 130.2,
                food: 52.5,
                energy: 147.6,
                shopping: 15.0,
            },
            total_emission: 345.3,
            percentages: GroupPercentages {
                transport: 37.7,
                food: 15.2,
                energy: 42.7,
                shopping: 4.3,
            },
            average_daily: 11.5,
        };

        let prompt = suggestions_prompt(&patterns);
        assert!(prompt.contains("Total Emission: 345.3 kg CO2"));
        assert!(prompt.contains("Total car travel: 412 km"));
        assert!(prompt.contains("Non-veg meals: 14 meals"));

        let summary = summary_prompt(&patterns, &RiskReport::none());
        assert!(summary.contains("Risk status: Stable"));
        assert!(summary.contains("Daily average: 11.5 kg CO2"));
    }
}
