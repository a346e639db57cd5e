//! OCR backends turning a prescription image into raw text.

#[cfg(feature = "native")]
mod pure_engine;
#[cfg(feature = "tesseract")]
mod tesseract;
mod transcript;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;
#[cfg(feature = "tesseract")]
pub use self::tesseract::TesseractEngine;
pub use transcript::TranscriptEngine;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OcrError;
use crate::models::config::{OcrConfig, OcrEngineKind};

/// Something that reads text out of a prescription file.
pub trait OcrBackend {
    /// Short engine name for logs and metadata.
    fn name(&self) -> &'static str;

    /// Recognize the text in the file at `path`.
    ///
    /// Fails with [`OcrError::Io`] if the path cannot be read.
    fn recognize(&self, path: &Path) -> Result<OcrResult, OcrError>;
}

/// A detected text box with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Quadrilateral corners (x1, y1, x2, y2, x3, y3, x4, y4).
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of OCR on one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Detected text boxes (empty for engines without layout output).
    pub boxes: Vec<TextBox>,

    /// Full text.
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Engine that produced the text.
    pub engine: String,
}

impl OcrResult {
    /// A result carrying only text.
    pub fn from_text(text: impl Into<String>, engine: &str, processing_time_ms: u64) -> Self {
        Self {
            boxes: Vec::new(),
            text: text.into(),
            processing_time_ms,
            engine: engine.to_string(),
        }
    }

    /// Build a result from boxes, ordering them top-to-bottom, left-to-right
    /// and joining their text with newlines.
    pub fn from_boxes(mut boxes: Vec<TextBox>, engine: &str, processing_time_ms: u64) -> Self {
        sort_by_reading_order(&mut boxes);
        let text = boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            boxes,
            text,
            processing_time_ms,
            engine: engine.to_string(),
        }
    }
}

/// Sort boxes into rows of 20 px, then by x within a row.
pub fn sort_by_reading_order(boxes: &mut [TextBox]) {
    boxes.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();

        let row_a = (ay / 20.0) as i32;
        let row_b = (by / 20.0) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

/// Fail with a `NotFound` I/O error unless `path` is a readable file.
pub fn ensure_readable(path: &Path) -> Result<(), OcrError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(OcrError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )))
    }
}

/// Open an image, mapping decoder failures to [`OcrError::InvalidImage`].
pub fn open_image(path: &Path) -> Result<image::DynamicImage, OcrError> {
    ensure_readable(path)?;
    image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => OcrError::Io(io),
        other => OcrError::InvalidImage(format!("{}: {}", path.display(), other)),
    })
}

/// Create the OCR backend for an engine kind.
pub fn create_engine(
    kind: OcrEngineKind,
    config: &OcrConfig,
) -> Result<Box<dyn OcrBackend>, OcrError> {
    match kind {
        #[cfg(feature = "native")]
        OcrEngineKind::Onnx => Ok(Box::new(PureOcrEngine::from_config(config)?)),
        #[cfg(not(feature = "native"))]
        OcrEngineKind::Onnx => Err(OcrError::EngineUnavailable(
            "onnx (built without the `native` feature)".to_string(),
        )),
        #[cfg(feature = "tesseract")]
        OcrEngineKind::Tesseract => Ok(Box::new(TesseractEngine::from_config(config))),
        #[cfg(not(feature = "tesseract"))]
        OcrEngineKind::Tesseract => {
            let _ = config;
            Err(OcrError::EngineUnavailable(
                "tesseract (rebuild with `--features tesseract`)".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_box(x: f32, y: f32, text: &str) -> TextBox {
        TextBox {
            bbox: [x, y, x + 50.0, y, x + 50.0, y + 10.0, x, y + 10.0],
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_reading_order() {
        let boxes = vec![
            text_box(200.0, 45.0, "1-0-1"),
            text_box(10.0, 5.0, "R"),
            text_box(10.0, 42.0, "1) Tab. PARACET 650"),
        ];

        let result = OcrResult::from_boxes(boxes, "test", 0);
        assert_eq!(result.text, "R\n1) Tab. PARACET 650\n1-0-1");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = open_image(Path::new("/definitely/not/here.png")).unwrap_err();
        match err {
            OcrError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undecodable_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(matches!(open_image(&path), Err(OcrError::InvalidImage(_))));
    }

    #[cfg(not(feature = "tesseract"))]
    #[test]
    fn test_tesseract_unavailable_without_feature() {
        let result = create_engine(OcrEngineKind::Tesseract, &OcrConfig::default());
        assert!(matches!(result, Err(OcrError::EngineUnavailable(_))));
    }
}
