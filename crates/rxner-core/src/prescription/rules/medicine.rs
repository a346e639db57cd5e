//! Medicine name extraction.
//!
//! The medicine name is the text after an optional numbered form label
//! ("1) Tab.") and before the first dosing cue.

use super::patterns::{
    DURATION, FREQ_COMMA_CUE, FREQ_ENGLISH_CUE, FREQ_TRIPLET, LINE_FORM, MULTI_WHITESPACE,
};

/// A line split into its medicine name and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineSplit {
    /// Cleaned medicine name, if any text preceded the first cue.
    pub medicine: Option<String>,
    /// Text from the first cue onwards.
    pub tail: String,
}

/// Split a line into medicine name and remaining tail.
///
/// The name is cut at the earliest of: an English frequency cue
/// ("1 Morning"), a duration ("5 days"), a comma before an English cue, or a
/// digit triplet ("1-0-1"). It is cleaned and limited to `max_words` words.
pub fn split_medicine_and_tail(line: &str, max_words: usize) -> MedicineSplit {
    let tail = match LINE_FORM.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    };

    let cut = [
        FREQ_ENGLISH_CUE.find(tail),
        DURATION.find(tail),
        FREQ_COMMA_CUE.find(tail),
        FREQ_TRIPLET.find(tail),
    ]
    .into_iter()
    .flatten()
    .map(|m| m.start())
    .min()
    .unwrap_or(tail.len());

    let cleaned = clean_medicine_text(&tail[..cut]);
    let medicine = cleaned
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");

    MedicineSplit {
        medicine: (!medicine.is_empty()).then_some(medicine),
        tail: tail[cut..].trim().to_string(),
    }
}

/// Clean form noise such as "10/SR." into "10 SR.".
pub fn clean_medicine_text(text: &str) -> String {
    let text = text.replace('/', " ");
    let text = MULTI_WHITESPACE.replace_all(&text, " ");
    text.trim_matches(|c: char| matches!(c, ' ' | '-' | ':' | ','))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(line: &str) -> MedicineSplit {
        split_medicine_and_tail(line, 6)
    }

    #[test]
    fn test_form_label_is_consumed() {
        let s = split("1) Tab. PARACET 650");
        assert_eq!(s.medicine.as_deref(), Some("PARACET 650"));
        assert_eq!(s.tail, "");

        let s = split("2) CAP, OMEZ 20");
        assert_eq!(s.medicine.as_deref(), Some("OMEZ 20"));
    }

    #[test]
    fn test_cut_at_english_cue() {
        let s = split("3) TAB. DOLO 650 1 Morning, 1 Night");
        assert_eq!(s.medicine.as_deref(), Some("DOLO 650"));
        assert_eq!(s.tail, "1 Morning, 1 Night");
    }

    #[test]
    fn test_cut_at_comma_cue() {
        let s = split("1) Tab. ABC, 1 Night");
        assert_eq!(s.medicine.as_deref(), Some("ABC"));
        assert_eq!(s.tail, ", 1 Night");
    }

    #[test]
    fn test_cut_at_duration() {
        let s = split("1) Syrup CALPOL 5 days");
        assert_eq!(s.medicine.as_deref(), Some("CALPOL"));
        assert_eq!(s.tail, "5 days");
    }

    #[test]
    fn test_cut_at_triplet() {
        let s = split("1) Tab. AUGMENTIN 625 1-0-1 x 5 days");
        assert_eq!(s.medicine.as_deref(), Some("AUGMENTIN 625"));
        assert_eq!(s.tail, "1-0-1 x 5 days");
    }

    #[test]
    fn test_line_that_is_only_a_cue() {
        assert_eq!(split("1-0-1").medicine, None);
        assert_eq!(split("1 Morning").medicine, None);
    }

    #[test]
    fn test_without_form_label() {
        let s = split("  ZOCLAR 500  ");
        assert_eq!(s.medicine.as_deref(), Some("ZOCLAR 500"));
    }

    #[test]
    fn test_word_limit() {
        let s = split("1) Tab. ONE TWO THREE FOUR FIVE SIX SEVEN");
        assert_eq!(s.medicine.as_deref(), Some("ONE TWO THREE FOUR FIVE SIX"));

        let s = split_medicine_and_tail("1) Tab. ONE TWO THREE", 2);
        assert_eq!(s.medicine.as_deref(), Some("ONE TWO"));
    }

    #[test]
    fn test_clean_medicine_text() {
        assert_eq!(clean_medicine_text("NIKORAN 10/SR."), "NIKORAN 10 SR.");
        assert_eq!(clean_medicine_text("- ABC :"), "ABC");
        assert_eq!(clean_medicine_text("A /  B,"), "A B");
        assert_eq!(clean_medicine_text(" , - "), "");
    }
}
