//! Threshold Monitor Runner
//!
//! Wires sensors, console notifiers, and runtime settings together and runs
//! one alert evaluation pass.

pub mod plan;
pub mod transports;

use alerting::{AlertManager, EvaluationSummary, Notifier};
use anyhow::Context;
use clap::Parser;
use sensors::{Sensor, SensorFactory};
use settings::Configuration;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub use plan::MonitorPlan;

/// Threshold monitor CLI
#[derive(Debug, Parser)]
#[command(name = "threshold-monitor")]
#[command(about = "Evaluate sensor readings against thresholds and fan out alerts")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON); runs the built-in demo when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

/// Initialize logging (stderr, so console notifications stay readable)
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Result of one monitor run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: EvaluationSummary,
    pub report: String,
    pub configuration: Configuration,
}

/// Run the monitor from CLI arguments
pub fn run(cli: &Cli) -> anyhow::Result<RunOutcome> {
    let plan = match &cli.config {
        Some(path) => MonitorPlan::load(path)
            .with_context(|| format!("Failed to load plan from {}", path.display()))?,
        None => MonitorPlan::demo(),
    };
    execute(&plan)
}

/// Build sensors from the plan and feed them their readings
pub fn prepare_sensors(plan: &MonitorPlan) -> anyhow::Result<Vec<Sensor>> {
    plan.sensors
        .iter()
        .map(|entry| {
            let mut sensor = SensorFactory::build(&entry.spec)?;
            for &reading in &entry.readings {
                sensor.ingest(reading);
            }
            Ok::<_, anyhow::Error>(sensor)
        })
        .collect()
}

/// Execute one evaluation pass described by `plan`
pub fn execute(plan: &MonitorPlan) -> anyhow::Result<RunOutcome> {
    let mut configuration = Configuration::from(plan.parameters.clone());

    println!("\n--- INITIAL CONFIGURATION ---");
    configuration.show()?;

    let sensors = prepare_sensors(plan)?;
    let notifiers: Vec<Box<dyn Notifier>> = plan.notifiers.iter().map(|n| n.build()).collect();

    println!("\n=== NOTIFICATIONS ===");
    let mut manager = AlertManager::new(&sensors, &notifiers);
    let summary = manager.evaluate_and_notify();
    info!(
        "Evaluation finished: {} alerts, {} deliveries, {} failed",
        summary.alerts, summary.deliveries, summary.failed_deliveries
    );

    let report = manager.generate_report();
    println!("\n=== ALERT REPORT ===");
    println!("{}", report);

    if !plan.updates.is_empty() {
        println!("\n--- UPDATING CONFIGURATION ---");
        for (key, value) in &plan.updates {
            configuration.set(key.clone(), value.clone());
        }
        configuration.show()?;
    }

    Ok(RunOutcome {
        summary,
        report,
        configuration,
    })
}
