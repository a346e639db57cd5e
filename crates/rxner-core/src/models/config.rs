//! Configuration structures for the prescription pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::RxnerError;

/// Section headers that open non-prescription parts of a document.
pub const DEFAULT_SECTION_HEADERS: [&str; 5] = [
    "Chief Complaints",
    "Clinical Findings",
    "Advice",
    "Follow Up",
    "Diagnosis",
];

/// Maximum number of words kept in a medicine name.
pub const DEFAULT_MAX_MEDICINE_WORDS: usize = 6;

/// Main configuration for the rxner pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RxnerConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Line extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Which OCR backend turns an image into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrEngineKind {
    /// PaddleOCR models through `pure-onnx-ocr`.
    #[default]
    Onnx,
    /// System Tesseract (requires the `tesseract` feature).
    Tesseract,
}

impl OcrEngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OcrEngineKind::Onnx => "onnx",
            OcrEngineKind::Tesseract => "tesseract",
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Default engine.
    pub engine: OcrEngineKind,

    /// Directory containing ONNX model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Tesseract language(s), e.g. "eng".
    pub language: String,

    /// Tesseract data directory (system default when unset).
    pub tessdata_dir: Option<PathBuf>,

    /// Keep `[UNK]` tokens emitted by the recognizer.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: OcrEngineKind::Onnx,
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            language: "eng".to_string(),
            tessdata_dir: None,
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }
}

/// Line extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Headers (case-insensitive substrings) that start a skipped section.
    pub section_headers: Vec<String>,

    /// Medicine names are truncated to this many words.
    pub max_medicine_words: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            section_headers: DEFAULT_SECTION_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            max_medicine_words: DEFAULT_MAX_MEDICINE_WORDS,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Keep the source line on every emitted item.
    pub include_source: bool,

    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_source: true,
            pretty_json: true,
        }
    }
}

impl RxnerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, RxnerError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RxnerError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), RxnerError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| RxnerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RxnerConfig =
            serde_json::from_str(r#"{"extraction": {"max_medicine_words": 3}}"#).unwrap();

        assert_eq!(config.extraction.max_medicine_words, 3);
        assert_eq!(config.extraction.section_headers.len(), 5);
        assert_eq!(config.ocr.engine, OcrEngineKind::Onnx);
        assert!(config.output.include_source);
    }

    #[test]
    fn test_engine_kind_serialization() {
        let json = serde_json::to_string(&OcrEngineKind::Tesseract).unwrap();
        assert_eq!(json, "\"tesseract\"");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = RxnerConfig::default();
        config.ocr.language = "eng+hin".to_string();
        config.save(&path).unwrap();

        let loaded = RxnerConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ocr.language, "eng+hin");
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = RxnerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RxnerError::Config(_)));
    }
}
