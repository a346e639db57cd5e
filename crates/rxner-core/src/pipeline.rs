//! End-to-end pipeline: OCR, then prescription parsing.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::ocr::OcrBackend;
use crate::prescription::{ParseResult, PrescriptionParser};

/// Run OCR on `path` and parse the recognized text.
///
/// Only OCR can fail; parsing always produces a (possibly empty) result.
pub fn run_pipeline(
    backend: &dyn OcrBackend,
    parser: &dyn PrescriptionParser,
    path: &Path,
) -> Result<ParseResult> {
    info!("Running {} OCR on {}", backend.name(), path.display());
    let ocr = backend.recognize(path)?;

    let mut result = parser.parse(&ocr.text);
    result.processing_time_ms += ocr.processing_time_ms;
    Ok(result)
}
