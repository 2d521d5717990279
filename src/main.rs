//! training-summary CLI entry point.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use training_summary::config::{
    DEFAULT_CONFUSIONS_PATH, DEFAULT_EPOCH_TIMES_PATH, DEFAULT_TRAIN_TIMES_PATH,
};
use training_summary::{ReportBuilder, SummaryConfig, ZeroDivisionPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "training-summary",
    version,
    about = "Summarize best-epoch metrics and timings of a training run"
)]
struct Cli {
    /// Per-epoch confusion matrices (JSON array of {fn, fp, tn, tp})
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFUSIONS_PATH)]
    confusions: PathBuf,

    /// Per-epoch timestamps and whole-run timestamps (the latter may be absent)
    #[arg(
        long,
        num_args = 2,
        value_names = ["EPOCHTIMES", "TRAINTIMES"],
        default_values = [DEFAULT_EPOCH_TIMES_PATH, DEFAULT_TRAIN_TIMES_PATH]
    )]
    times: Vec<PathBuf>,

    /// Report zero-denominator metrics as null instead of failing
    #[arg(long)]
    allow_undefined: bool,

    /// Write the report here instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl Cli {
    fn to_config(&self) -> SummaryConfig {
        let policy = if self.allow_undefined {
            ZeroDivisionPolicy::Undefined
        } else {
            ZeroDivisionPolicy::Fail
        };
        let mut builder = SummaryConfig::builder()
            .confusions_path(&self.confusions)
            .zero_division(policy);
        // clap enforces exactly two values
        if let [epoch_times, train_times] = self.times.as_slice() {
            builder = builder
                .epoch_times_path(epoch_times)
                .train_times_path(train_times);
        }
        builder.build()
    }
}

/// `RUST_LOG`-style directives, `warn` when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Summarize and deliver the report; nothing reaches `stdout` on failure.
fn run(cli: &Cli, stdout: &mut impl Write) -> Result<()> {
    let json = ReportBuilder::new(cli.to_config())
        .render()
        .context("failed to summarize training run")?;

    match &cli.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => writeln!(stdout, "{json}").context("failed to write report to stdout")?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}
