//! Process command - extract medication items from a single prescription.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use rxner_core::{
    OcrBackend, OcrEngineKind, ParseResult, RuleBasedParser, RxnerConfig, TranscriptEngine,
    create_engine, run_pipeline,
};

use super::config::load_config;
use crate::render::{OutputFormat, render};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (image, or .txt transcript)
    #[arg(required = true)]
    input: PathBuf,

    /// OCR engine (default: from config)
    #[arg(short, long, value_enum)]
    engine: Option<EngineArg>,

    /// Print raw OCR text and segmented lines
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "both")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// OCR engine selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum EngineArg {
    /// PaddleOCR models through pure-onnx-ocr
    Onnx,
    /// System Tesseract
    Tesseract,
}

impl From<EngineArg> for OcrEngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Onnx => OcrEngineKind::Onnx,
            EngineArg::Tesseract => OcrEngineKind::Tesseract,
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("file not found -> {}", args.input.display());
    }

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args.engine, args.model_dir.as_deref());

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.set_message("Running OCR...");

    let parser = RuleBasedParser::from_config(&config.extraction)
        .with_source(config.output.include_source);

    let result = select_backend(&args.input, &config)
        .and_then(|backend| {
            pb.set_message(format!("Running {} OCR...", backend.name()));
            Ok(run_pipeline(backend.as_ref(), &parser, &args.input)?)
        })
        .map_err(|e| anyhow::anyhow!("Pipeline error: {}", e));

    pb.finish_and_clear();
    let result = result?;

    let mut output = String::new();
    if args.debug {
        output.push_str(&debug_dump(&result));
    }
    output.push_str(&render(&result.items, args.format, config.output.pretty_json)?);

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "Extracted {} items in {:?}",
        result.items.len(),
        start.elapsed()
    );

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(
    config: &mut RxnerConfig,
    engine: Option<EngineArg>,
    model_dir: Option<&Path>,
) {
    if let Some(engine) = engine {
        config.ocr.engine = engine.into();
    }
    if let Some(dir) = model_dir {
        config.ocr.model_dir = dir.to_path_buf();
    }
}

/// Pick the backend for an input: transcripts are read as-is, images go
/// through the configured OCR engine.
pub(crate) fn select_backend(
    input: &Path,
    config: &RxnerConfig,
) -> anyhow::Result<Box<dyn OcrBackend>> {
    if TranscriptEngine::handles(input) {
        debug!("Reading {} as a transcript", input.display());
        return Ok(Box::new(TranscriptEngine::new()));
    }

    Ok(create_engine(config.ocr.engine, &config.ocr)?)
}

/// Raw OCR text followed by the numbered segmented lines.
fn debug_dump(result: &ParseResult) -> String {
    let mut out = String::from("--- RAW OCR ---\n");
    out.push_str(&result.raw_text);
    out.push_str("\n--- LINES ---\n");
    for (i, line) in result.lines.iter().enumerate() {
        out.push_str(&format!("{:02}: {}\n", i, line));
    }
    out.push('\n');
    out
}
