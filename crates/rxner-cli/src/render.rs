//! Rendering of extracted medication items.

use clap::ValueEnum;

use rxner_core::MedicationItem;

const HEADERS: [&str; 4] = ["medicine", "dosage", "frequency", "duration"];

/// Column widths; frequency is wider for merged instructions.
const COLUMN_WIDTHS: [usize; 4] = [20, 10, 32, 10];

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table followed by JSON
    Both,
    /// Fixed-width table
    Table,
    /// JSON array
    Json,
    /// CSV
    Csv,
}

impl OutputFormat {
    /// File extension used when writing this format to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Both | OutputFormat::Table => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Render items in the requested format.
pub fn render(items: &[MedicationItem], format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Both => format!(
            "Extracted Items (table):\n{}\n\nJSON:\n{}",
            to_table(items),
            to_json(items, pretty)?
        ),
        OutputFormat::Table => to_table(items),
        OutputFormat::Json => to_json(items, pretty)?,
        OutputFormat::Csv => to_csv(items)?,
    })
}

fn fields(item: &MedicationItem) -> [&str; 4] {
    [
        item.medicine.as_deref().unwrap_or(""),
        item.dosage.as_deref().unwrap_or(""),
        item.frequency.as_deref().unwrap_or(""),
        item.duration.as_deref().unwrap_or(""),
    ]
}

fn table_row(values: [&str; 4]) -> String {
    values
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(value, width)| {
            let truncated: String = value.chars().take(width).collect();
            format!("{:<width$}", truncated, width = width)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Fixed-width table with a header and separator row.
pub fn to_table(items: &[MedicationItem]) -> String {
    let mut rows = vec![
        table_row(HEADERS),
        COLUMN_WIDTHS
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];
    rows.extend(items.iter().map(|item| table_row(fields(item))));
    rows.join("\n")
}

/// JSON array; absent fields are `null`.
pub fn to_json(items: &[MedicationItem], pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    })
}

/// CSV with one row per item; absent fields are empty.
pub fn to_csv(items: &[MedicationItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(HEADERS)?;
    for item in items {
        wtr.write_record(fields(item))?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paracet() -> MedicationItem {
        MedicationItem {
            medicine: Some("PARACET".to_string()),
            dosage: Some("650".to_string()),
            frequency: Some("morning and evening; after food".to_string()),
            duration: None,
            source: None,
        }
    }

    #[test]
    fn test_table_layout() {
        let table = to_table(&[paracet()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!(
                "{:<20} | {:<10} | {:<32} | {:<10}",
                "medicine", "dosage", "frequency", "duration"
            )
        );
        assert_eq!(
            lines[1],
            format!("{}-+-{}-+-{}-+-{}", "-".repeat(20), "-".repeat(10), "-".repeat(32), "-".repeat(10))
        );
        assert_eq!(
            lines[2],
            format!(
                "{:<20} | {:<10} | {:<32} | {:<10}",
                "PARACET", "650", "morning and evening; after food", ""
            )
        );
    }

    #[test]
    fn test_table_truncates() {
        let item = MedicationItem {
            medicine: Some("AMOXYCILLIN CLAVULANATE POTASSIUM".to_string()),
            ..MedicationItem::default()
        };
        let table = to_table(&[item]);
        assert!(table.lines().nth(2).unwrap().starts_with("AMOXYCILLIN CLAVULAN |"));
    }

    #[test]
    fn test_json_nulls() {
        let json = to_json(&[paracet()], false).unwrap();
        assert_eq!(
            json,
            r#"[{"medicine":"PARACET","dosage":"650","frequency":"morning and evening; after food","duration":null}]"#
        );
    }

    #[test]
    fn test_csv() {
        let csv = to_csv(&[paracet()]).unwrap();
        assert_eq!(
            csv,
            "medicine,dosage,frequency,duration\nPARACET,650,morning and evening; after food,\n"
        );
    }

    #[test]
    fn test_both_format() {
        let out = render(&[], OutputFormat::Both, true).unwrap();
        assert!(out.starts_with("Extracted Items (table):\nmedicine"));
        assert!(out.ends_with("JSON:\n[]"));
    }
}
