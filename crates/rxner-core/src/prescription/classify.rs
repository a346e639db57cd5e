//! Line classification: which lines are worth extracting from.

use super::rules::patterns::{
    DOSAGE, DURATION, FOOD_INSTRUCTION, FREQ_ENGLISH, FREQ_TRIPLET, LINE_FORM, TOTAL_LINE,
};

/// Kind of a prescription line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Tablet/capsule count summary, never extracted.
    Total,
    /// Dosing instruction only ("(After Food)").
    InstructionOnly,
    /// Carries at least one medication cue.
    Medication,
    /// Nothing of interest.
    Other,
}

impl LineKind {
    /// Classify a line. Totals take precedence over everything else.
    pub fn of(line: &str) -> Self {
        if is_total_line(line) {
            LineKind::Total
        } else if is_instruction_only(line) {
            LineKind::InstructionOnly
        } else if has_medication_cue(line) {
            LineKind::Medication
        } else {
            LineKind::Other
        }
    }

    pub fn is_candidate(self) -> bool {
        matches!(self, LineKind::InstructionOnly | LineKind::Medication)
    }
}

/// Totals line such as "(Tot:10 Tab)".
pub fn is_total_line(line: &str) -> bool {
    TOTAL_LINE.is_match(line) || line.trim().to_lowercase().starts_with("(tot:")
}

/// A food instruction without a form label or unit dosage.
pub fn is_instruction_only(line: &str) -> bool {
    FOOD_INSTRUCTION.is_match(line) && !LINE_FORM.is_match(line) && !DOSAGE.is_match(line)
}

fn has_medication_cue(line: &str) -> bool {
    LINE_FORM.is_match(line)
        || DOSAGE.is_match(line)
        || FREQ_TRIPLET.is_match(line)
        || FREQ_ENGLISH.is_match(line)
        || DURATION.is_match(line)
}

/// Whether a line should go through entity extraction.
pub fn is_candidate_line(line: &str) -> bool {
    LineKind::of(line).is_candidate()
}
