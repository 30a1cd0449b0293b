//! xsdb CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use xsdb_core::{Energy, Era, SampleDatabase, ScanReport, verify};

#[derive(Parser)]
#[command(name = "xsdb")]
#[command(about = "Monte Carlo sample metadata - print the table, verify dataset files")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Dump the full table with computed luminosities
    #[arg(long)]
    print: bool,

    /// Escalate missing dataset-description files to a hard error
    #[arg(long)]
    throw: bool,

    /// Restrict the scan to these eras (default: all)
    #[arg(long)]
    era: Vec<Era>,

    /// Centre-of-mass energy
    #[arg(long, default_value = "13TeV")]
    energy: Energy,

    /// Directory holding the dataset-description files
    #[arg(long, default_value = ".")]
    datasets_dir: PathBuf,

    /// Write the scan report as pretty JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let db = SampleDatabase::new();
    let eras = if cli.era.is_empty() { Era::ALL.to_vec() } else { cli.era.clone() };

    tracing::info!(
        processes = db.len(),
        dir = %cli.datasets_dir.display(),
        "scanning sample table"
    );
    let report = verify::scan(&db, cli.energy, &eras, &cli.datasets_dir);

    if cli.print {
        print_table(&report);
    } else {
        println!(
            "{} processes, {} rows scanned, {} dataset file(s) missing",
            db.len(),
            report.rows.len(),
            report.missing.len()
        );
    }

    for miss in &report.missing {
        tracing::warn!(
            process = %miss.process,
            era = %miss.era,
            path = %miss.path,
            "dataset file missing"
        );
    }

    if let Some(path) = &cli.output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        tracing::info!(path = %path.display(), "scan report written");
    }

    if cli.throw {
        report.ensure_complete()?;
    }
    Ok(())
}

fn print_table(report: &ScanReport) {
    println!(
        "{:<44} {:<12} {:>18} {:>16}  dataset file",
        "process", "era", "n_events", "lumi [pb^-1]"
    );
    for row in &report.rows {
        let n_events = row.n_events.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
        let lumi = row.lumi.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"));
        let file = row.dataset_file.as_deref().unwrap_or("-");
        let mark = if row.found == Some(false) { " [MISSING]" } else { "" };
        println!(
            "{:<44} {:<12} {:>18} {:>16}  {}{}",
            row.process, row.era, n_events, lumi, file, mark
        );
    }
    println!(
        "\n{} rows at {}, {} dataset file(s) missing",
        report.rows.len(),
        report.energy,
        report.missing.len()
    );
}
