//! carbonwise - Carbon footprint insights from daily activity

mod cli;

use anyhow::{Context, Result};
use carbonwise_core::analytics::{simulate, SimulationToggles};
use carbonwise_core::{
    ActivityProvider, EmissionRates, InsightBundle, RandomActivityProvider,
};
use carbonwise_server::AppState;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "carbonwise",
    version,
    about = "Carbon footprint insights from daily activity",
    long_about = "Analyzes a window of daily activity (travel, electricity, meals,\n\
                  shopping) into emission patterns, week-over-week risk alerts,\n\
                  regression forecasts and what-if simulations.\n\
                  \n\
                  Examples:\n\
                    carbonwise serve                 # Run the insights API\n\
                    carbonwise serve --port 8080     # Custom port\n\
                    carbonwise report                # Print an insight report\n\
                    carbonwise report --json         # Same, as JSON\n\
                    carbonwise simulate --flights --meat\n\
                  \n\
                  Environment Variables:\n\
                    CARBONWISE_PORT                  # Default API port\n\
                    CARBONWISE_AI_API_KEY            # Enable the AI text advisor\n\
                    CARBONWISE_AI_BASE_URL           # Advisor endpoint override\n\
                    CARBONWISE_AI_MODEL              # Advisor model override"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the insights HTTP API (default)
    Serve {
        /// Port for the API server
        #[arg(long, env = "CARBONWISE_PORT", default_value = "3000")]
        port: u16,
    },
    /// Print an insight report to the terminal and exit
    Report {
        /// Days of history to analyze
        #[arg(long, default_value = "30")]
        days: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a what-if simulation over the activity window
    Simulate {
        /// Remove all flights
        #[arg(long)]
        flights: bool,
        /// Replace non-veg meals with veg meals
        #[arg(long)]
        meat: bool,
        /// Halve car travel
        #[arg(long)]
        car: bool,
        /// Days of history to analyze
        #[arg(long, default_value = "30")]
        days: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carbonwise=info")),
        )
        .init();

    let cli = Cli::parse();

    let default_mode = Mode::Serve {
        port: parse_port(std::env::var("CARBONWISE_PORT").ok()),
    };

    match cli.mode.unwrap_or(default_mode) {
        Mode::Serve { port } => run_serve(port).await?,
        Mode::Report { days, json } => run_report(days, json).await?,
        Mode::Simulate {
            flights,
            meat,
            car,
            days,
            json,
        } => {
            let toggles = SimulationToggles {
                flights,
                meat,
                car_usage: car,
            };
            run_simulate(toggles, days, json)?;
        }
    }

    Ok(())
}

/// Port for a bare invocation: `CARBONWISE_PORT` when set and valid,
/// matching what `serve` resolves through clap
fn parse_port(value: Option<String>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(3000)
}

async fn run_serve(port: u16) -> Result<()> {
    let state = AppState::with_defaults().context("Failed to initialize application state")?;
    carbonwise_server::run(state, port).await
}

async fn run_report(days: usize, json: bool) -> Result<()> {
    let rates = EmissionRates::default();
    let provider = RandomActivityProvider::new(rates);
    let records = provider
        .provide(days)
        .context("Failed to load activity window")?;

    let bundle = InsightBundle::compute(&records, &rates);

    if json {
        let suggestions =
            carbonwise_core::advisor::suggestions_or_fallback(None, &bundle.patterns).await;
        let summary =
            carbonwise_core::advisor::summary_or_fallback(None, &bundle.patterns, &bundle.risk)
                .await;

        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "patterns": bundle.patterns,
                "riskAlerts": bundle.risk,
                "averagePredicted7": bundle.predictions.average_predicted_7,
                "averagePredicted30": bundle.predictions.average_predicted_30,
                "suggestions": suggestions,
                "aiSummary": summary,
            }))?
        );
        return Ok(());
    }

    println!("carbonwise - Carbon Footprint Report");
    println!("====================================");
    println!();
    println!("Window: {} days ending today", records.len());
    println!();
    println!("{}", cli::format_patterns_table(&bundle.patterns));
    println!();
    println!("{}", cli::format_risk_section(&bundle.risk));
    println!();
    println!("{}", cli::format_forecast_section(&bundle.predictions));
    println!();

    let suggestions =
        carbonwise_core::advisor::suggestions_or_fallback(None, &bundle.patterns).await;
    println!("{}", cli::format_suggestions_table(&suggestions));

    Ok(())
}

fn run_simulate(toggles: SimulationToggles, days: usize, json: bool) -> Result<()> {
    let rates = EmissionRates::default();
    let provider = RandomActivityProvider::new(rates);
    let records = provider
        .provide(days)
        .context("Failed to load activity window")?;

    let result = simulate(&records, toggles, &rates);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", cli::format_simulation_table(&result));

    Ok(())
}
