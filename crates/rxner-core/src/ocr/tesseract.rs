//! Tesseract OCR backend (system `libtesseract`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{OcrBackend, OcrResult, ensure_readable};

/// OCR engine backed by Tesseract via the `tesseract` crate.
pub struct TesseractEngine {
    tessdata_dir: Option<PathBuf>,
    language: String,
}

impl TesseractEngine {
    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            tessdata_dir: config.tessdata_dir.clone(),
            language: config.language.clone(),
        }
    }
}

impl OcrBackend for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, path: &Path) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        ensure_readable(path)?;
        let bytes = std::fs::read(path)?;

        let tessdata = match &self.tessdata_dir {
            Some(dir) => Some(
                dir.to_str()
                    .ok_or_else(|| OcrError::ModelLoad("invalid tessdata path".to_string()))?,
            ),
            None => None,
        };

        let tess = ::tesseract::Tesseract::new(tessdata, Some(&self.language))
            .map_err(|e| OcrError::ModelLoad(format!("tesseract: {e:?}")))?;

        // Page segmentation: a single uniform block of text
        let tess = tess
            .set_variable("tessedit_pageseg_mode", "6")
            .map_err(|e| OcrError::ModelLoad(format!("tesseract: {e:?}")))?;

        let mut tess = tess
            .set_image_from_mem(&bytes)
            .map_err(|e| OcrError::InvalidImage(format!("{}: {e:?}", path.display())))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(format!("tesseract: {e:?}")))?;

        debug!("Tesseract mean confidence: {}", tess.mean_text_conf());

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!("Tesseract OCR complete in {}ms", processing_time_ms);

        Ok(OcrResult::from_text(text, self.name(), processing_time_ms))
    }
}
