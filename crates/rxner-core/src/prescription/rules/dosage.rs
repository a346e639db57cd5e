//! Dosage (strength) extraction.

use super::patterns::{DOSAGE, TOTAL_LABEL_SUFFIX, TRAILING_STRENGTH};
use super::{ExtractionMatch, FieldExtractor};

/// How a dosage was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosageRule {
    /// Number with a unit: "500mg", "5 ml".
    UnitBearing,
    /// Bare number ending the medicine name: "ZOCLAR 500".
    TrailingStrength,
}

/// Unit-bearing dosage extractor.
///
/// Matches directly preceded by a `Tot:` label are totals, not strengths,
/// and are skipped.
pub struct DosageExtractor;

impl DosageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DosageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DosageExtractor {
    type Output = ExtractionMatch<String, DosageRule>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DOSAGE
            .find_iter(text)
            .find(|m| !TOTAL_LABEL_SUFFIX.is_match(&text[..m.start()]))
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), DosageRule::UnitBearing))
    }
}

/// Split a bare trailing strength off a medicine name.
///
/// Returns the remaining name and the strength, e.g. `"ZOCLAR 500"` gives
/// `("ZOCLAR", "500")`. Only 2 to 5 digit numbers not starting with zero
/// qualify. A stray list index left in the name ("PARACET 12") is taken as a
/// strength as well.
pub fn split_trailing_strength(medicine: &str) -> Option<(String, String)> {
    let caps = TRAILING_STRENGTH.captures(medicine)?;
    let m = caps.get(1)?;
    Some((medicine[..m.start()].trim().to_string(), m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dosage(line: &str) -> Option<String> {
        DosageExtractor::new().extract(line).map(|m| m.value)
    }

    #[test]
    fn test_unit_dosage() {
        assert_eq!(dosage("1) Tab. AUGMENTIN 625mg 1-0-1").as_deref(), Some("625mg"));
        assert_eq!(dosage("Syrup CALPOL 5 ml").as_deref(), Some("5 ml"));
        assert_eq!(dosage("Vit D3 60000 IU weekly").as_deref(), Some("60000 IU"));
    }

    #[test]
    fn test_first_dosage_wins() {
        assert_eq!(dosage("MIX 500mg + 125mg").as_deref(), Some("500mg"));
    }

    #[test]
    fn test_skips_total_label() {
        assert_eq!(dosage("(Tot: 10 g) CREAM 5 g").as_deref(), Some("5 g"));
        assert_eq!(dosage("Tot:30ml"), None);
    }

    #[test]
    fn test_rule_recorded() {
        let m = DosageExtractor::new().extract("DOLO 650mg").unwrap();
        assert_eq!(m.value, "650mg");
        assert_eq!(m.rule, DosageRule::UnitBearing);
    }

    #[test]
    fn test_split_trailing_strength() {
        assert_eq!(
            split_trailing_strength("ZOCLAR 500"),
            Some(("ZOCLAR".to_string(), "500".to_string()))
        );
        assert_eq!(
            split_trailing_strength("PAN 40"),
            Some(("PAN".to_string(), "40".to_string()))
        );
    }

    #[test]
    fn test_trailing_strength_rejects() {
        // Single digit, leading zero, too long, glued to letters.
        assert_eq!(split_trailing_strength("VITAMIN B 6"), None);
        assert_eq!(split_trailing_strength("DRUG 050"), None);
        assert_eq!(split_trailing_strength("DRUG 123456"), None);
        assert_eq!(split_trailing_strength("ZOCLAR500"), None);
        assert_eq!(split_trailing_strength("500 ZOCLAR"), None);
    }

    #[test]
    fn test_trailing_strength_whole_name() {
        assert_eq!(
            split_trailing_strength("650"),
            Some((String::new(), "650".to_string()))
        );
    }
}
