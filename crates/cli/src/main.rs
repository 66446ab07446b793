use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use fepsiloneq::Tolerance;
use report::{accumulated_sum, Comparison, EpsilonTable, Precision};

#[derive(Parser)]
#[command(name = "fepsiloneq")]
#[command(about = "Epsilon equality for floating-point numbers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print machine epsilons and n-epsilon thresholds as JSON
    Epsilon {
        #[arg(long, default_value_t = 1)]
        n: u32,
    },
    /// Compare two numbers with `==` and with epsilon equality
    Compare {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
        /// Tolerance in multiples of machine epsilon
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        n: u32,
        #[arg(long, value_enum, default_value_t = Precision::Double)]
        precision: Precision,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sum 0.1 repeatedly and compare against the exact decimal
    Demo {
        #[arg(long, default_value_t = 10)]
        terms: u32,
        #[arg(long, default_value_t = 1)]
        n: u32,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Epsilon { n } => epsilon(n),
        Action::Compare {
            x,
            y,
            n,
            precision,
            out,
        } => compare(&x, &y, n, precision, out),
        Action::Demo { terms, n } => demo(terms, n),
    }
}

fn epsilon(n: u32) -> Result<()> {
    tracing::info!(n, "epsilon");
    println!("{}", serde_json::to_string_pretty(&EpsilonTable::new(n))?);
    Ok(())
}

fn compare(x: &str, y: &str, n: u32, precision: Precision, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(x, y, n, precision = ?precision, "compare");
    let comparison = Comparison::parse(precision, Tolerance::new(n), x, y)?;
    tracing::info!(
        difference = comparison.difference,
        threshold = comparison.threshold,
        epsilon_equal = comparison.epsilon_equal,
        "compared"
    );
    let value = serde_json::to_value(&comparison)?;
    match out {
        Some(path) => {
            provenance::write_json(&path, &value)?;
            let params = json!({ "x": x, "y": y, "n": n, "precision": precision });
            let sidecar = provenance::write_sidecar(&path, params)?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

fn demo(terms: u32, n: u32) -> Result<()> {
    tracing::info!(terms, n, "demo");
    let demo = accumulated_sum(terms, Tolerance::new(n));
    println!("{}", serde_json::to_string_pretty(&demo)?);
    Ok(())
}
