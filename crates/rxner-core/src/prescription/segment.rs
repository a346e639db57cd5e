//! Line segmentation and section pruning.

use tracing::trace;

use crate::models::config::DEFAULT_SECTION_HEADERS;

use super::rules::patterns::{LINE_BREAK, NUMBERED_ITEM, RX_MARKER};

/// Drops lines belonging to non-prescription sections.
///
/// A section header ("Chief Complaints", "Diagnosis", ...) starts skipping;
/// a bare `R` marker or a numbered item ("1)") resumes. The resuming line
/// itself is kept.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    headers: Vec<String>,
    skip: bool,
}

impl SectionFilter {
    /// Create a filter for the given section headers (case-insensitive).
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_lowercase()).collect(),
            skip: false,
        }
    }

    /// Whether lines are currently being skipped.
    pub fn is_skipping(&self) -> bool {
        self.skip
    }

    /// Feed the next trimmed line; returns true if it should be kept.
    pub fn accept(&mut self, line: &str) -> bool {
        let lower = line.to_lowercase();
        if self.headers.iter().any(|h| lower.contains(h.as_str())) {
            trace!(line, "section header, skipping");
            self.skip = true;
            return false;
        }

        if RX_MARKER.is_match(line) || NUMBERED_ITEM.is_match(line) {
            self.skip = false;
        }

        !self.skip
    }
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self::new(&DEFAULT_SECTION_HEADERS)
    }
}

/// Split normalized text into candidate lines.
pub fn split_into_lines(text: &str) -> Vec<String> {
    split_into_lines_with(text, &mut SectionFilter::default())
}

/// Split normalized text into lines using a configured section filter.
///
/// Every line break counts, including a lone `\r` and form feeds.
pub fn split_into_lines_with(text: &str, filter: &mut SectionFilter) -> Vec<String> {
    LINE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| filter.accept(line))
        .map(str::to_string)
        .collect()
}
