//! Core library for prescription OCR processing.
//!
//! This crate provides:
//! - OCR backends (PaddleOCR via `pure-onnx-ocr`, optional Tesseract, text transcripts)
//! - OCR text normalization and line segmentation
//! - Rule-based extraction of medicine, dosage, frequency and duration
//! - Merging of instruction-only lines into the preceding medication

pub mod error;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod prescription;

pub use error::{OcrError, Result, RxnerError};
pub use models::config::{OcrEngineKind, RxnerConfig};
pub use models::prescription::{LineExtraction, MedicationItem};
pub use ocr::{OcrBackend, OcrResult, TextBox, TranscriptEngine, create_engine};
pub use pipeline::run_pipeline;
pub use prescription::{ParseResult, PrescriptionParser, RuleBasedParser};
