//! Dosing frequency extraction.
//!
//! Frequency is resolved by a fixed list of rules evaluated in priority
//! order; the first rule that matches wins:
//!
//! 1. a morning-noon-night triplet (`1-0-1`, `1/0/1`)
//! 2. English phrases (`1 Morning, 1 Night`)
//! 3. Latin abbreviations (`bid`, `tds`, `prn`, ...)
//! 4. a food instruction (`after food`, `before food`)

use super::patterns::{
    ABBREVIATION_TOKEN, FOOD_INSTRUCTION, FREQ_TRIPLET, ONE_MORNING, ONE_NIGHT, ONE_NOON,
};
use super::{ExtractionMatch, FieldExtractor};

/// A frequency resolution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyRule {
    /// Digit triplet such as "1-0-1".
    Triplet,
    /// "1 morning", "1 noon", "1 night".
    DayParts,
    /// Abbreviation table lookup.
    Abbreviation,
    /// "after food" / "before food".
    FoodInstruction,
}

impl FrequencyRule {
    /// Rules in evaluation order.
    pub const PRIORITY: [FrequencyRule; 4] = [
        FrequencyRule::Triplet,
        FrequencyRule::DayParts,
        FrequencyRule::Abbreviation,
        FrequencyRule::FoodInstruction,
    ];

    /// Apply this rule to a line.
    pub fn apply(self, line: &str) -> Option<ExtractionMatch<String, FrequencyRule>> {
        match self {
            FrequencyRule::Triplet => {
                let m = FREQ_TRIPLET.find(line)?;
                let triplet = m.as_str().replace('/', "-");
                Some(ExtractionMatch::new(map_triplet(&triplet), self))
            }
            FrequencyRule::DayParts => {
                let parts: Vec<&str> = [
                    (&*ONE_MORNING, "morning"),
                    (&*ONE_NOON, "noon"),
                    (&*ONE_NIGHT, "night"),
                ]
                .into_iter()
                .filter(|(pattern, _)| pattern.is_match(line))
                .map(|(_, part)| part)
                .collect();

                if parts.is_empty() {
                    None
                } else {
                    Some(ExtractionMatch::new(parts.join(" and "), self))
                }
            }
            FrequencyRule::Abbreviation => ABBREVIATION_TOKEN.find_iter(line).find_map(|m| {
                lookup_abbreviation(&m.as_str().to_lowercase())
                    .map(|value| ExtractionMatch::new(value.to_string(), self))
            }),
            FrequencyRule::FoodInstruction => {
                let caps = FOOD_INSTRUCTION.captures(line)?;
                Some(ExtractionMatch::new(format!("{} food", caps[1].to_lowercase()), self))
            }
        }
    }
}

/// Map a hyphen-normalized triplet to its reading; unknown triplets pass through.
fn map_triplet(triplet: &str) -> String {
    match triplet {
        "1-1-1" => "three times daily",
        "1-0-1" => "morning and evening",
        "0-1-1" => "noon and evening",
        "1-0-0" => "morning",
        other => other,
    }
    .to_string()
}

/// Look up a lowercase frequency abbreviation.
pub fn lookup_abbreviation(token: &str) -> Option<&'static str> {
    match token {
        "qd" | "od" => Some("once daily"),
        "bid" | "bd" => Some("twice daily"),
        "tid" | "tds" => Some("three times daily"),
        "qid" => Some("four times daily"),
        "qhs" | "hs" => Some("at bedtime"),
        "prn" => Some("as needed"),
        _ => None,
    }
}

/// Frequency field extractor.
pub struct FrequencyExtractor;

impl FrequencyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FrequencyExtractor {
    type Output = ExtractionMatch<String, FrequencyRule>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        FrequencyRule::PRIORITY
            .iter()
            .find_map(|rule| rule.apply(text))
    }
}
