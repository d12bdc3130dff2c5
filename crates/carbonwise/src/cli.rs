//! Terminal report formatting
//!
//! Table rendering for the `report` and `simulate` subcommands.

use carbonwise_core::analytics::Predictions;
use carbonwise_core::models::{PatternSummary, RiskReport, SimulationResult, Suggestion};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

pub fn format_patterns_table(patterns: &PatternSummary) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Group").fg(Color::Cyan),
        Cell::new("Emissions").fg(Color::Cyan),
        Cell::new("Share").fg(Color::Cyan),
    ]);

    let rows = [
        ("Transport", patterns.emissions.transport, patterns.percentages.transport),
        ("Food", patterns.emissions.food, patterns.percentages.food),
        ("Energy", patterns.emissions.energy, patterns.percentages.energy),
        ("Shopping", patterns.emissions.shopping, patterns.percentages.shopping),
    ];

    for (group, kg, pct) in rows {
        table.add_row(Row::from(vec![
            group.to_string(),
            format_kg(kg),
            format!("{:.1}%", pct),
        ]));
    }

    table.add_row(Row::from(vec![
        "Total".to_string(),
        format_kg(patterns.total_emission),
        "100.0%".to_string(),
    ]));

    format!(
        "{}\nAverage daily: {}",
        table,
        format_kg(patterns.average_daily)
    )
}

pub fn format_risk_section(risk: &RiskReport) -> String {
    if risk.alerts.is_empty() {
        return format!(
            "Risk: none (week-over-week change {:+.1}%)",
            risk.percentage_change
        );
    }

    let mut out = format!(
        "Risk: {} (week-over-week change {:+.1}%)",
        if risk.has_risk { "ELEVATED" } else { "info" },
        risk.percentage_change
    );
    for alert in &risk.alerts {
        out.push_str(&format!("\n  [{:?}] {}: {}", alert.kind, alert.title, alert.message));
    }
    out
}

pub fn format_forecast_section(predictions: &Predictions) -> String {
    if predictions.next_7_days.is_empty() {
        return "Forecast: not enough history".to_string();
    }

    format!(
        "Forecast: {} avg/day next 7 days, {} avg/day next 30 days",
        format_kg(predictions.average_predicted_7),
        format_kg(predictions.average_predicted_30)
    )
}

pub fn format_suggestions_table(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return "No suggestions.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Suggestion").fg(Color::Cyan),
        Cell::new("Impact").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
    ]);

    for suggestion in suggestions {
        table.add_row(Row::from(vec![
            suggestion.title.clone(),
            suggestion.impact.clone(),
            format!("{:?}", suggestion.priority).to_lowercase(),
        ]));
    }

    table.to_string()
}

pub fn format_simulation_table(result: &SimulationResult) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Change").fg(Color::Cyan),
        Cell::new("Saved").fg(Color::Cyan),
        Cell::new("Of baseline").fg(Color::Cyan),
    ]);

    for entry in &result.reductions {
        table.add_row(Row::from(vec![
            entry.category.clone(),
            format_kg(entry.amount),
            format!("{:.1}%", entry.percentage),
        ]));
    }

    format!(
        "{}\nBaseline {} -> simulated {} ({} saved, {:.1}%)",
        table,
        format_kg(result.baseline_total),
        format_kg(result.simulated_total),
        format_kg(result.total_reduction),
        result.percentage_reduction
    )
}

fn format_kg(kg: f64) -> String {
    if kg >= 1000.0 {
        format!("{:.2}t CO2", kg / 1000.0)
    } else {
        format!("{:.2}kg CO2", kg)
    }
}
