//! Rule-based field extractors for prescription lines.

pub mod dosage;
pub mod duration;
pub mod frequency;
pub mod medicine;
pub mod patterns;

pub use dosage::{DosageExtractor, DosageRule, split_trailing_strength};
pub use duration::DurationExtractor;
pub use frequency::{FrequencyExtractor, FrequencyRule, lookup_abbreviation};
pub use medicine::{MedicineSplit, clean_medicine_text, split_medicine_and_tail};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A value extracted from a line, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T, R = ()> {
    /// Extracted value.
    pub value: T,
    /// Rule that produced the value.
    pub rule: R,
}

impl<T, R> ExtractionMatch<T, R> {
    pub fn new(value: T, rule: R) -> Self {
        Self { value, rule }
    }
}
