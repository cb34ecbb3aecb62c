//! # iftmin-cli
//!
//! Command-line decoder and exporter for IFTMIN manifests.
//!
//! Decoding never fails: every readable input yields a (possibly sparse)
//! result. Unreadable files are reported and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use iftmin_export::{CsvConfig, CsvWriter, shipment_rows, summary_row};

/// Bundled reference interchange (two shipments, six items)
const SAMPLE_IFTMIN: &str = include_str!("../../../testdata/iftmin_sample.edi");

#[derive(Parser)]
#[command(name = "iftmin")]
#[command(about = "EDIFACT IFTMIN manifest decoder")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode IFTMIN files and print one JSON document per file
    Decode {
        /// Input file paths
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Decode IFTMIN files and write flattened CSV exports
    Export {
        /// Input file paths
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory for summary.csv and shipments.csv
        #[arg(short, long)]
        out: PathBuf,

        /// Field delimiter for the CSV output
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },

    /// Print the bundled reference interchange
    Sample,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries decoded output only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { files, compact } => decode_command(&files, compact),
        Commands::Export {
            files,
            out,
            delimiter,
        } => export_command(&files, &out, delimiter),
        Commands::Sample => {
            print!("{SAMPLE_IFTMIN}");
            Ok(())
        }
    }
}

/// Read each input, pairing content with a short source label.
/// Unreadable files are logged and skipped.
fn read_inputs(files: &[PathBuf]) -> Vec<(String, String)> {
    let mut inputs = Vec::new();
    for path in files {
        match fs::read_to_string(path) {
            Ok(content) => {
                let label = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                inputs.push((label, content));
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping unreadable file");
            }
        }
    }
    inputs
}

fn decode_command(files: &[PathBuf], compact: bool) -> anyhow::Result<()> {
    for (label, content) in read_inputs(files) {
        let interchange = iftmin_decoder::decode(&content);
        tracing::info!(
            source = %label,
            shipments = interchange.shipments.len(),
            items = interchange.item_count(),
            "decoded interchange"
        );
        let json = if compact {
            serde_json::to_string(&interchange)?
        } else {
            serde_json::to_string_pretty(&interchange)?
        };
        println!("{json}");
    }
    Ok(())
}

fn export_command(files: &[PathBuf], out: &Path, delimiter: char) -> anyhow::Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    let mut summaries = Vec::new();
    let mut rows = Vec::new();
    for (label, content) in read_inputs(files) {
        let interchange = iftmin_decoder::decode(&content);
        summaries.push(summary_row(&interchange, label.as_str()));
        rows.extend(shipment_rows(&interchange, &label));
    }

    let writer = CsvWriter::new().with_config(CsvConfig::new().delimiter(delimiter));

    let summary_path = out.join("summary.csv");
    writer
        .write_rows(fs::File::create(&summary_path)?, &summaries)
        .with_context(|| format!("writing {}", summary_path.display()))?;

    let shipments_path = out.join("shipments.csv");
    writer
        .write_rows(fs::File::create(&shipments_path)?, &rows)
        .with_context(|| format!("writing {}", shipments_path.display()))?;

    tracing::info!(
        interchanges = summaries.len(),
        rows = rows.len(),
        "wrote CSV exports"
    );
    println!(
        "Wrote {} and {}",
        summary_path.display(),
        shipments_path.display()
    );
    Ok(())
}
