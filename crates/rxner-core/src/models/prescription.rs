//! Prescription data models.

use serde::{Deserialize, Serialize};

/// Fields extracted from a single prescription line.
///
/// `source` always holds the line the fields came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineExtraction {
    pub medicine: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
    pub source: String,
}

impl LineExtraction {
    /// An extraction with no fields, keeping only the source line.
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// True when at least one of the four fields is present.
    pub fn has_any_field(&self) -> bool {
        self.medicine.is_some()
            || self.dosage.is_some()
            || self.frequency.is_some()
            || self.duration.is_some()
    }

    /// A pure dosing annotation: a frequency and nothing else.
    pub fn is_frequency_only(&self) -> bool {
        self.frequency.is_some()
            && self.medicine.is_none()
            && self.dosage.is_none()
            && self.duration.is_none()
    }
}

/// A medication entry of a prescription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationItem {
    /// Medicine name.
    pub medicine: Option<String>,

    /// Strength, e.g. "500mg" or a bare "650".
    pub dosage: Option<String>,

    /// Dosing frequency; instruction lines are appended with "; ".
    pub frequency: Option<String>,

    /// Course length, e.g. "5 days".
    pub duration: Option<String>,

    /// Line the entry was extracted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl MedicationItem {
    /// Append a frequency annotation, joining with "; " when one exists.
    pub fn append_frequency(&mut self, frequency: &str) {
        self.frequency = Some(match self.frequency.take() {
            Some(existing) => format!("{}; {}", existing, frequency),
            None => frequency.to_string(),
        });
    }

    /// Drop the source line.
    pub fn without_source(mut self) -> Self {
        self.source = None;
        self
    }
}

impl From<LineExtraction> for MedicationItem {
    fn from(extraction: LineExtraction) -> Self {
        Self {
            medicine: extraction.medicine,
            dosage: extraction.dosage,
            frequency: extraction.frequency,
            duration: extraction.duration,
            source: Some(extraction.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_frequency() {
        let mut item = MedicationItem::default();
        item.append_frequency("after food");
        assert_eq!(item.frequency.as_deref(), Some("after food"));

        item.append_frequency("twice daily");
        assert_eq!(item.frequency.as_deref(), Some("after food; twice daily"));
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let item = MedicationItem {
            medicine: Some("PARACET".to_string()),
            ..MedicationItem::default()
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "medicine": "PARACET",
                "dosage": null,
                "frequency": null,
                "duration": null,
            })
        );
    }

    #[test]
    fn test_frequency_only() {
        let mut extraction = LineExtraction::empty("(After Food)");
        assert!(!extraction.has_any_field());
        assert!(!extraction.is_frequency_only());

        extraction.frequency = Some("after food".to_string());
        assert!(extraction.is_frequency_only());

        extraction.duration = Some("5 days".to_string());
        assert!(!extraction.is_frequency_only());
    }
}
