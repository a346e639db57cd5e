//! Error types for the rxner-core library.
//!
//! Text processing (normalization, segmentation, extraction) is total and
//! never fails; errors only originate in the collaborators around it.

use thiserror::Error;

/// Main error type for the rxner library.
#[derive(Error, Debug)]
pub enum RxnerError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RxnerError {
    /// Whether this error means the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            RxnerError::Io(e) | RxnerError::Ocr(OcrError::Io(e)) => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The input path could not be read.
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid image format or content.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The requested engine is not compiled into this build.
    #[error("OCR engine not available: {0}")]
    EngineUnavailable(String),
}

/// Result type for the rxner library.
pub type Result<T> = std::result::Result<T, RxnerError>;
