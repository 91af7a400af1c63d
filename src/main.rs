// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! Wires CLI arguments and environment variables into a [`RunConfig`],
//! drives the orchestrator, prints surfaced combinations when a rank window
//! is set, and hands the instrumentation series to the console chart sink.
//!
//! ```bash
//! # All combinations containing 1 and 2 (the default), counted only
//! combigen
//!
//! # Pin three numbers, print combinations 100..=109
//! combigen --required "3,7,21" --start 100 --count 10
//!
//! # Same via environment
//! COMBIGEN_REQUIRED="3 7 21" combigen
//! ```

use clap::Parser;
use log::info;

use combigen::chart::{ChartSink, ConsoleChart};
use combigen::config::{RankWindow, RequiredSet, RunConfig};
use combigen::constants::DEFAULT_SAMPLE_INTERVAL;
use combigen::run::Orchestrator;

#[derive(Parser)]
#[command(name = "combigen")]
#[command(about = "Enumerate 15-of-25 combinations containing a required set of numbers")]
#[command(version)]
struct Cli {
    /// Required numbers, delimited by commas, spaces, or semicolons
    /// (default "1,2")
    #[arg(short, long, env = "COMBIGEN_REQUIRED")]
    required: Option<String>,

    /// Steps between instrumentation samples
    #[arg(long, env = "COMBIGEN_STEP_INTERVAL", default_value_t = DEFAULT_SAMPLE_INTERVAL)]
    step_interval: u64,

    /// 1-based rank of the first combination to print
    #[arg(long, requires = "count")]
    start: Option<u64>,

    /// How many combinations to print from --start
    #[arg(long, requires = "start")]
    count: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> combigen::Result<()> {
    let required = RequiredSet::parse(cli.required.as_deref())?;
    let window = match (cli.start, cli.count) {
        (Some(start), Some(count)) => Some(RankWindow::new(start, count)?),
        _ => None,
    };
    let print_combinations = window.is_some();
    let config = RunConfig::new(required, window, cli.step_interval)?;

    info!(
        "generating combinations containing {:?} (expected total {})",
        config.required.as_slice(),
        Orchestrator::new(config.clone()).expected_total()?
    );

    let orchestrator = Orchestrator::new(config.clone());
    let report = orchestrator.run(|position, combination| {
        if print_combinations {
            let rendered: Vec<String> = combination.iter().map(|v| v.to_string()).collect();
            println!("#{position}: {}", rendered.join(" "));
        }
    })?;

    println!(
        "generated {} combinations containing {:?} ({} surfaced, expected {})",
        report.generated,
        config.required.as_slice(),
        report.forwarded,
        report.expected,
    );

    ConsoleChart.render(&report.samples, None);
    Ok(())
}
