//! Common regex patterns for prescription line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numbered Rx line opening with a dosage-form label: "1) TAB. ...", "3) CAP, ..."
    // Longer labels come first so "Tablet" is not consumed as "Tab".
    pub static ref LINE_FORM: Regex = Regex::new(
        r"(?i)^\s*\d+\)\s*(Tablet|Tab|Capsule|Cap|Syrup|Syp|Susp|Inj|Solution)[.,]?\s*"
    ).unwrap();

    // Totals like "(Tot:8 Tab)"
    pub static ref TOTAL_LINE: Regex = Regex::new(
        r"(?i)^\(?\s*Tot\s*:\s*\d+\s*(Tabs?|Caps?)\)?$"
    ).unwrap();

    // A "Tot:" label directly before a match
    pub static ref TOTAL_LABEL_SUFFIX: Regex = Regex::new(
        r"(?i)Tot\s*:\s*$"
    ).unwrap();

    // Duration: "5 days", "2 weeks"
    pub static ref DURATION: Regex = Regex::new(
        r"(?i)\b(\d+)\s*(days?|weeks?)\b"
    ).unwrap();

    // Morning-noon-night triplet: "1-0-1", "1/0/1"
    pub static ref FREQ_TRIPLET: Regex = Regex::new(
        r"\b\d[-/]\d[-/]\d\b"
    ).unwrap();

    // English dosing phrases: "1 Morning", "2 night"
    pub static ref FREQ_ENGLISH: Regex = Regex::new(
        r"(?i)\b\d+\s*(?:morning|night|noon)\b"
    ).unwrap();

    // Single-digit phrase marking the end of a medicine name
    pub static ref FREQ_ENGLISH_CUE: Regex = Regex::new(
        r"(?i)\b\d\s*(?:morning|night|noon)\b"
    ).unwrap();

    // ", 1 Night"
    pub static ref FREQ_COMMA_CUE: Regex = Regex::new(
        r"(?i),\s*\d\s*(?:morning|noon|night)\b"
    ).unwrap();

    pub static ref ONE_MORNING: Regex = Regex::new(r"(?i)\b1\s*morning\b").unwrap();
    pub static ref ONE_NOON: Regex = Regex::new(r"(?i)\b1\s*noon\b").unwrap();
    pub static ref ONE_NIGHT: Regex = Regex::new(r"(?i)\b1\s*night\b").unwrap();

    // Candidate abbreviation tokens: "bid", "TDS"
    pub static ref ABBREVIATION_TOKEN: Regex = Regex::new(
        r"(?i)\b[a-z]{2,4}\b"
    ).unwrap();

    pub static ref FOOD_INSTRUCTION: Regex = Regex::new(
        r"(?i)\b(after|before)\s*food\b"
    ).unwrap();

    // Dosage with medical units
    pub static ref DOSAGE: Regex = Regex::new(
        r"(?i)\b(\d+(?:\.\d+)?)\s*(mg|mcg|ug|µg|μg|g|ml|IU|units)\b"
    ).unwrap();

    // Bare strength at the end of a medicine name: "ZOCLAR 500"
    pub static ref TRAILING_STRENGTH: Regex = Regex::new(
        r"\b([1-9]\d{1,4})$"
    ).unwrap();

    // Prescription table markers
    pub static ref RX_MARKER: Regex = Regex::new(r"^\s*R\s*$").unwrap();
    pub static ref NUMBERED_ITEM: Regex = Regex::new(r"^\s*\d+\)").unwrap();

    // Any line break: CRLF, LF, lone CR, vertical tab, form feed, file/group/record
    // separators, NEL, line and paragraph separators
    pub static ref LINE_BREAK: Regex = Regex::new(
        r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]"
    ).unwrap();

    // Normalization
    pub static ref BAR_OR_BULLET_RUN: Regex = Regex::new(r"[|•]+").unwrap();
    pub static ref PADDED_NEWLINE: Regex = Regex::new(r"\s+\n\s+").unwrap();
    pub static ref BLANK_RUN: Regex = Regex::new(r"[ \t]+").unwrap();
    pub static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s{2,}").unwrap();
}
