//! Batch processing command for multiple prescription files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use rxner_core::{
    MedicationItem, OcrBackend, RuleBasedParser, RxnerConfig, TranscriptEngine, create_engine,
    run_pipeline,
};

use super::config::load_config;
use super::process::{EngineArg, apply_overrides};
use crate::render::{OutputFormat, render};

const SUPPORTED_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "tiff", "tif", "bmp", "webp", "txt"];

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// OCR engine (default: from config)
    #[arg(short, long, value_enum)]
    engine: Option<EngineArg>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    items: Option<Vec<MedicationItem>>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args.engine, args.model_dir.as_deref());

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = RuleBasedParser::from_config(&config.extraction)
        .with_source(config.output.include_source);
    let transcripts = TranscriptEngine::new();
    // Model loading is expensive; the image engine is built on first use
    let mut image_engine: Option<Box<dyn OcrBackend>> = None;

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = backend_for(&path, &transcripts, &mut image_engine, &config)
            .and_then(|backend| Ok(run_pipeline(backend, &parser, &path)?));

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(parsed) => {
                results.push(ProcessResult {
                    path,
                    items: Some(parsed.items),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        items: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Pipeline error: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.items.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(items) = &result.items {
                let output_path = output_path_for(output_dir, &result.path, args.format);
                fs::write(&output_path, render(items, args.format, config.output.pretty_json)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn backend_for<'a>(
    path: &Path,
    transcripts: &'a TranscriptEngine,
    image_engine: &'a mut Option<Box<dyn OcrBackend>>,
    config: &RxnerConfig,
) -> anyhow::Result<&'a dyn OcrBackend> {
    if TranscriptEngine::handles(path) {
        return Ok(transcripts);
    }

    if image_engine.is_none() {
        debug!("Loading {} OCR engine", config.ocr.engine.as_str());
        *image_engine = Some(create_engine(config.ocr.engine, &config.ocr)?);
    }

    match image_engine.as_deref() {
        Some(engine) => Ok(engine),
        None => anyhow::bail!("OCR engine unavailable"),
    }
}

/// `<output_dir>/<file stem>.<format extension>`
fn output_path_for(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("prescription");
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "item_count",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = result.processing_time_ms.to_string();

        match &result.items {
            Some(items) => {
                wtr.write_record([filename, "success", &items.len().to_string(), &time, ""])?;
            }
            None => {
                wtr.write_record([
                    filename,
                    "error",
                    "",
                    &time,
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
