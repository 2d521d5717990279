//! Training Summary Example
//!
//! Summarizes a simulated five-epoch run from in-memory records, then
//! shows the same report built from files on disk.
//!
//! Run with: cargo run --example summarize_run

use training_summary::metrics::summarize_metrics;
use training_summary::timing::summarize_times;
use training_summary::{
    ConfusionRecord, EpochTimeRecord, Report, ReportBuilder, SummaryConfig, TrainTimeRecord,
    ZeroDivisionPolicy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Training Run Summary ===\n");

    // -------------------------------------------------------------------------
    // 1. Per-epoch confusion matrices
    // -------------------------------------------------------------------------
    println!("1. Scoring epochs...");

    let confusions = [
        ConfusionRecord::new(60.0, 20.0, 15.0, 5.0),
        ConfusionRecord::new(70.0, 22.0, 5.0, 3.0),
        ConfusionRecord::new(72.0, 23.0, 3.0, 2.0),
        ConfusionRecord::new(71.0, 24.0, 2.0, 3.0),
        ConfusionRecord::new(72.0, 23.0, 3.0, 2.0),
    ];
    let best = summarize_metrics(&confusions, ZeroDivisionPolicy::Fail)?;
    println!("   Best epoch: {}", best.epoch());
    println!("   F1: {:.4}", best.f1().unwrap_or(f64::NAN));

    // -------------------------------------------------------------------------
    // 2. Timestamps
    // -------------------------------------------------------------------------
    println!("\n2. Timing...");

    let epochs: Vec<EpochTimeRecord> = (0..5)
        .map(|i| EpochTimeRecord::new(30 + i * 70, 30 + i * 70 + 60))
        .collect();
    let train = TrainTimeRecord::new(0, 360);
    let times = summarize_times(&epochs, Some(&train))?;
    println!("   Total: {}s", times.total_time);
    if let Some(loading) = times.data_loading_secs {
        println!("   Data loading: {loading}s");
    }

    // -------------------------------------------------------------------------
    // 3. Report
    // -------------------------------------------------------------------------
    println!("\n3. Report:");
    let report = Report {
        metrics: best,
        times,
    };
    println!("{}", report.to_json()?);

    // -------------------------------------------------------------------------
    // 4. Same thing from disk, without a train-times file
    // -------------------------------------------------------------------------
    println!("\n4. From files (no train times)...");
    let dir = std::env::temp_dir().join("training-summary-demo");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("metrics_confusions.json"),
        serde_json::to_string(&confusions)?,
    )?;
    std::fs::write(
        dir.join("metrics_epochtimes.json"),
        serde_json::to_string(&epochs)?,
    )?;
    let _ = std::fs::remove_file(dir.join("metrics_traintimes.json"));

    let config = SummaryConfig::new(
        dir.join("metrics_confusions.json"),
        dir.join("metrics_epochtimes.json"),
        dir.join("metrics_traintimes.json"),
    );
    println!("{}", ReportBuilder::new(config).render()?);

    Ok(())
}
