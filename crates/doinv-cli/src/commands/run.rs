//! Run command - process a batch of invoice PDFs into one upload CSV.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use doinv_core::ExtractedInvoice;
use doinv_core::output::writer::{timestamped_filename, write_csv};
use doinv_core::register::JobRegister;
use doinv_core::session::Session;
use doinv_core::DoinvConfig;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Input PDF files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Job register file (CSV or Excel)
    #[arg(short, long)]
    register: Option<PathBuf>,

    /// Output directory (default: the configured subdirectory next to the executable)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    overwrite: bool,
}

/// One skipped input and why.
struct FileFailure {
    path: PathBuf,
    error: String,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} PDFs to process",
        style("ℹ").blue(),
        files.len()
    );

    // A register that fails to load degrades every match to the sentinel
    // rather than aborting the batch.
    let register = match &args.register {
        Some(path) => match JobRegister::load(path, &config.register) {
            Ok(register) => {
                println!(
                    "{} Loaded {} job register entries",
                    style("ℹ").blue(),
                    register.len()
                );
                register
            }
            Err(e) => {
                warn!("Failed to load job register {}: {}", path.display(), e);
                JobRegister::default()
            }
        },
        None => {
            warn!("No job register provided; reference numbers will not resolve");
            JobRegister::default()
        }
    };

    let now = Local::now();
    let session = Session::new(&config, register, now.date_naive());

    // Resolve the output path up front so an overwrite refusal costs no
    // processing time.
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => default_output_dir(&config),
    };
    fs::create_dir_all(&output_dir)?;
    let output_path =
        output_dir.join(timestamped_filename(&config.output.file_prefix, now.naive_local()));
    if output_path.exists() && !args.overwrite {
        anyhow::bail!(
            "Output file {} already exists. Use --overwrite to replace it.",
            output_path.display()
        );
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut invoices: Vec<ExtractedInvoice> = Vec::with_capacity(files.len());
    let mut failures: Vec<FileFailure> = Vec::new();

    for path in &files {
        info!("Processing {}", path.display());

        let result = fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|data| session.process_pdf(&data).map_err(|e| e.to_string()));

        match result {
            Ok(invoice) => {
                debug!("Extracted record from {}", path.display());
                invoices.push(invoice);
            }
            Err(error) => {
                warn!("Skipping {}: {}", path.display(), error);
                failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    if invoices.is_empty() {
        anyhow::bail!("No valid data extracted from PDFs");
    }

    let rows = session.synthesize(&invoices);
    write_csv(&output_path, &rows, args.overwrite)?;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} records written to {}",
        style(rows.len()).green(),
        output_path.display()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for failure in &failures {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}

/// The configured output subdirectory next to the executable, like the
/// desktop tool this replaces; falls back to the working directory.
fn default_output_dir(config: &DoinvConfig) -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(&config.output.output_dir)
}
