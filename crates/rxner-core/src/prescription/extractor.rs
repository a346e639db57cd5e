//! Per-line entity extraction.

use tracing::trace;

use crate::models::config::DEFAULT_MAX_MEDICINE_WORDS;
use crate::models::prescription::LineExtraction;

use super::classify::{LineKind, is_instruction_only, is_total_line};
use super::rules::{
    DosageExtractor, DurationExtractor, FieldExtractor, FrequencyExtractor,
    split_medicine_and_tail, split_trailing_strength,
};

/// Extracts medicine, dosage, frequency and duration from one line.
///
/// Extraction depends only on the line itself.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    max_medicine_words: usize,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self {
            max_medicine_words: DEFAULT_MAX_MEDICINE_WORDS,
        }
    }

    /// Set the maximum number of words kept in a medicine name.
    pub fn with_max_medicine_words(mut self, max_words: usize) -> Self {
        self.max_medicine_words = max_words;
        self
    }

    /// Extract all fields from a line.
    pub fn extract(&self, line: &str) -> LineExtraction {
        if is_total_line(line) {
            return LineExtraction::empty(line);
        }

        let split = split_medicine_and_tail(line, self.max_medicine_words);
        let mut medicine = split.medicine;

        let frequency = FrequencyExtractor::new().extract(line).map(|m| {
            trace!(rule = ?m.rule, "frequency rule");
            m.value
        });
        let duration = DurationExtractor::new().extract(line).map(|m| m.value);
        let mut dosage = DosageExtractor::new().extract(line).map(|m| m.value);

        if dosage.is_none() {
            if let Some((name, strength)) = medicine.as_deref().and_then(split_trailing_strength) {
                dosage = Some(strength);
                medicine = (!name.is_empty()).then_some(name);
            }
        }

        if is_instruction_only(line) {
            medicine = None;
        }

        let extraction = LineExtraction {
            medicine,
            dosage,
            frequency,
            duration,
            source: line.to_string(),
        };
        trace!(?extraction, "extracted line");
        extraction
    }

    /// Classify a line and extract it if it is a candidate.
    pub fn extract_candidate(&self, line: &str) -> Option<LineExtraction> {
        LineKind::of(line)
            .is_candidate()
            .then(|| self.extract(line))
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract entities from a line with default settings.
pub fn extract_entities(line: &str) -> LineExtraction {
    LineExtractor::new().extract(line)
}
