//! Treatment duration extraction.

use super::patterns::DURATION;
use super::{ExtractionMatch, FieldExtractor};

/// Duration field extractor: "5 days", "2 Weeks".
pub struct DurationExtractor;

impl DurationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DurationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DurationExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = DURATION.captures(text)?;
        let unit = if caps[2].to_lowercase().starts_with("day") {
            "days"
        } else {
            "weeks"
        };
        Some(ExtractionMatch::new(format!("{} {}", &caps[1], unit), ()))
    }
}
