//! Plain-text transcripts of already recognized prescriptions.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::error::OcrError;

use super::{OcrBackend, OcrResult, ensure_readable};

/// Reads a UTF-8 text file as if it were OCR output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranscriptEngine;

impl TranscriptEngine {
    pub fn new() -> Self {
        Self
    }

    /// Whether a path looks like a transcript (`.txt`).
    pub fn handles(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
    }
}

impl OcrBackend for TranscriptEngine {
    fn name(&self) -> &'static str {
        "transcript"
    }

    fn recognize(&self, path: &Path) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        ensure_readable(path)?;
        let text = std::fs::read_to_string(path)?;
        debug!("Read {} characters from {}", text.len(), path.display());
        Ok(OcrResult::from_text(text, self.name(), start.elapsed().as_millis() as u64))
    }
}
