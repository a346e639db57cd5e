//! Prescription parser: normalization, segmentation, extraction and merging.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::prescription::{LineExtraction, MedicationItem};

use super::extractor::LineExtractor;
use super::normalize::normalize_text;
use super::segment::{SectionFilter, split_into_lines_with};

/// Result of parsing one prescription.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Extracted medication items.
    pub items: Vec<MedicationItem>,
    /// Text as received from OCR.
    pub raw_text: String,
    /// Text after normalization.
    pub normalized_text: String,
    /// Lines left after segmentation.
    pub lines: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for prescription parsing.
pub trait PrescriptionParser {
    /// Parse a prescription from raw OCR text.
    fn parse(&self, text: &str) -> ParseResult;
}

/// Folds per-line extractions into medication items.
///
/// A line carrying only a frequency ("after food") is appended to the
/// frequency of the last item instead of becoming an item; with no previous
/// item it is dropped. Extractions with no fields are dropped.
#[derive(Debug, Default)]
pub struct ItemCollector {
    items: Vec<MedicationItem>,
}

impl ItemCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the extraction of the next line.
    pub fn push(&mut self, extraction: LineExtraction) {
        if extraction.is_frequency_only() {
            let frequency = extraction.frequency.unwrap_or_default();
            match self.items.last_mut() {
                Some(last) => {
                    debug!(%frequency, "merging instruction into previous item");
                    last.append_frequency(&frequency);
                }
                None => debug!(%frequency, "dropping instruction with no previous item"),
            }
            return;
        }

        if extraction.has_any_field() {
            self.items.push(extraction.into());
        }
    }

    /// Items collected so far.
    pub fn items(&self) -> &[MedicationItem] {
        &self.items
    }

    pub fn finish(self) -> Vec<MedicationItem> {
        self.items
    }
}

/// Extract medication items from segmented lines.
pub fn collect_items<S: AsRef<str>>(lines: &[S], extractor: &LineExtractor) -> Vec<MedicationItem> {
    let mut collector = ItemCollector::new();
    for line in lines {
        if let Some(extraction) = extractor.extract_candidate(line.as_ref()) {
            collector.push(extraction);
        }
    }
    collector.finish()
}

/// Rule-based prescription parser.
pub struct RuleBasedParser {
    section_headers: Vec<String>,
    extractor: LineExtractor,
    include_source: bool,
}

impl RuleBasedParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            section_headers: config.section_headers.clone(),
            extractor: LineExtractor::new().with_max_medicine_words(config.max_medicine_words),
            include_source: true,
        }
    }

    /// Keep or drop the source line on emitted items.
    pub fn with_source(mut self, include_source: bool) -> Self {
        self.include_source = include_source;
        self
    }

    /// Normalize and segment raw text into candidate lines.
    pub fn lines(&self, text: &str) -> Vec<String> {
        let mut filter = SectionFilter::new(&self.section_headers);
        split_into_lines_with(&normalize_text(text), &mut filter)
    }

    /// Extract items from already segmented lines.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> Vec<MedicationItem> {
        let items = collect_items(lines, &self.extractor);
        if self.include_source {
            items
        } else {
            items.into_iter().map(MedicationItem::without_source).collect()
        }
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PrescriptionParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ParseResult {
        let start = Instant::now();

        info!("Parsing prescription from {} characters of text", text.len());

        let normalized_text = normalize_text(text);
        let mut filter = SectionFilter::new(&self.section_headers);
        let lines = split_into_lines_with(&normalized_text, &mut filter);
        debug!("Segmented {} lines", lines.len());

        let items = self.run(&lines);
        info!("Extracted {} medication items", items.len());

        ParseResult {
            items,
            raw_text: text.to_string(),
            normalized_text,
            lines,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
