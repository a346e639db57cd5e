//! Prescription line classification and entity extraction.

mod classify;
mod extractor;
mod normalize;
mod parser;
mod segment;
pub mod rules;

pub use classify::{LineKind, is_candidate_line, is_instruction_only, is_total_line};
pub use extractor::{LineExtractor, extract_entities};
pub use normalize::normalize_text;
pub use parser::{ItemCollector, ParseResult, PrescriptionParser, RuleBasedParser, collect_items};
pub use segment::{SectionFilter, split_into_lines, split_into_lines_with};
