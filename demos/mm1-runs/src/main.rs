//! mm1-runs: run a set of M/M/1 scenarios and export their results.
//!
//! Without a config file the three reference scenarios are simulated
//! (X = 1.1, 1.5, 2.0 s against a 1 s server for 6000 s).  Each scenario
//! writes `queue_lengths.csv`, `samples.csv` and `summary.csv` under
//! `<out>/<label>/`, ready for box plots and step plots elsewhere.

mod scenario;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;

use mm1_output::{CsvWriter, OutputWriter, SummaryRow, TraceObserver, write_run};
use mm1_sim::{QueueBuilder, RunSummary};

use scenario::Scenario;

/// Simulate M/M/1 queues and write per-customer series to CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with a list of scenarios (defaults to the built-in three).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output directory; one subdirectory per scenario.
    #[arg(long, short, default_value = "output/mm1")]
    out: PathBuf,

    /// Run scenarios one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,

    /// Also write the log to this file.
    #[arg(long)]
    log_output: Option<PathBuf>,

    /// Verbosity: -v info, -vv debug, -vvv trace (per event).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Per-scenario run ──────────────────────────────────────────────────────────

struct Report {
    label:         String,
    utilization:   f64,
    summary:       RunSummary,
    rows:          Vec<SummaryRow>,
    window:        f64,
    window_events: usize,
    window_peak:   u32,
}

fn run_scenario(scenario: &Scenario, out: &Path) -> Result<Report> {
    let dir = out.join(&scenario.label);
    let mut queue = QueueBuilder::from_config(scenario.queue.clone()).build()?;

    let mut obs = TraceObserver::new(CsvWriter::new(&dir)?);
    let summary = queue.simulate_with(scenario.total_time, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).with_context(|| format!("writing trace for `{}`", scenario.label));
    }

    let mut writer = obs.into_writer();
    let rows = write_run(&mut writer, &queue)?;
    writer.finish()?;

    let timeline = queue.get_queue_timeline(scenario.timeline_window);
    info!(
        "{}: {} events written to {}",
        scenario.label,
        summary.events(),
        dir.display(),
    );

    Ok(Report {
        label:         scenario.label.clone(),
        utilization:   scenario.queue.utilization(),
        summary,
        rows,
        window:        scenario.timeline_window,
        window_events: timeline.len(),
        window_peak:   timeline.occupancies.iter().copied().max().unwrap_or(0),
    })
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn set_up_logger(args: &Args) -> Result<(), fern::InitError> {
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(level)
        .chain(std::io::stderr());
    let dispatch = match &args.log_output {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch,
    };
    dispatch.apply()?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    set_up_logger(&args).context("installing logger")?;

    let scenarios = match &args.config {
        Some(path) => scenario::load(path)?,
        None => scenario::builtin(),
    };
    for s in &scenarios {
        if s.queue.utilization() >= 1.0 {
            warn!("{}: rho = {:.3} ≥ 1, the queue is unstable", s.label, s.queue.utilization());
        }
    }

    println!("=== mm1-runs: {} scenario(s) ===", scenarios.len());
    println!("Output: {}", args.out.display());
    println!();

    let t0 = Instant::now();
    let reports: Vec<Report> = if args.sequential {
        scenarios.iter().map(|s| run_scenario(s, &args.out)).collect::<Result<_>>()?
    } else {
        scenarios.par_iter().map(|s| run_scenario(s, &args.out)).collect::<Result<_>>()?
    };
    println!("Simulated in {:.3} s", t0.elapsed().as_secs_f64());
    println!();

    for r in &reports {
        println!(
            "{}  rho={:.3}  arrivals={}  departures={}  left in system={}  dropped waits={}",
            r.label,
            r.utilization,
            r.summary.arrivals,
            r.summary.departures,
            r.summary.in_system,
            r.summary.unresolved_waits,
        );
        println!(
            "  first {} s: {} timeline entries, peak occupancy {}",
            r.window, r.window_events, r.window_peak,
        );
        println!(
            "  {:<20} {:>7} {:>9} {:>9} {:>9} {:>9} {:>9}",
            "metric", "count", "mean", "q1", "median", "q3", "max"
        );
        for row in &r.rows {
            println!(
                "  {:<20} {:>7} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                row.metric, row.count, row.mean, row.q1, row.median, row.q3, row.max
            );
        }
        println!();
    }

    Ok(())
}
