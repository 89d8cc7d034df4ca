// src/report.rs
// =============================================================================
// Turns creature records into console output.
//
// Two formats:
// - Text: a fixed block of lines per creature, for reading
// - Json: one JSON object per line (JSON Lines), for piping into other tools
//
// Absent fields are printed as "None" in text mode and left out entirely in
// JSON mode.
// =============================================================================

use std::io::Write;

use crate::wiki::CreatureRecord;

const MISSING: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Renders the human-readable block for one record
//
// Example:
//
//   No. 7 | Name: Glorp | Personality: Friendly
//   Likes: ["Blob", "Spike"]
//   Dislikes: ["Spike"]
//   Wiki URL: https://thessum.miraheze.org/wiki/Glorp
//   Image URL: None
//   Image alt: None
//   Attribution: None
pub fn render_text(record: &CreatureRecord) -> String {
    let number = record
        .number
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING.to_string());

    let lines = [
        format!(
            "No. {} | Name: {} | Personality: {}",
            number,
            or_missing(record.name.as_deref()),
            or_missing(record.personality.as_deref()),
        ),
        format!("Likes: {}", list_or_missing(record.likes.as_deref())),
        format!("Dislikes: {}", list_or_missing(record.dislikes.as_deref())),
        format!("Wiki URL: {}", record.wiki_url),
        format!("Image URL: {}", or_missing(record.image_url.as_deref())),
        format!("Image alt: {}", or_missing(record.image_alt.as_deref())),
        format!("Attribution: {}", or_missing(record.attribution.as_deref())),
    ];

    lines.join("\n")
}

pub fn render_json(record: &CreatureRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

// Writes one record to `out` in the requested format.
//
// Text blocks are preceded by an empty line so consecutive creatures stay
// visually apart.
pub fn write_record<W: Write>(
    out: &mut W,
    record: &CreatureRecord,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "{}", render_text(record))?;
        }
        OutputFormat::Json => {
            let line = render_json(record)?;
            writeln!(out, "{line}")?;
        }
    }
    out.flush()
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn list_or_missing(values: Option<&[String]>) -> String {
    match values {
        Some(values) => format!("{values:?}"),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::CreatureNumber;

    fn glorp() -> CreatureRecord {
        CreatureRecord {
            number: Some(CreatureNumber::Number(7)),
            name: Some("Glorp".to_string()),
            personality: Some("Friendly".to_string()),
            likes: Some(vec!["Blob".to_string(), "Spike".to_string()]),
            dislikes: Some(vec!["Spike".to_string()]),
            ..CreatureRecord::new("https://thessum.miraheze.org/wiki/Glorp")
        }
    }

    #[test]
    fn test_render_text_full() {
        let expected = "No. 7 | Name: Glorp | Personality: Friendly\n\
                        Likes: [\"Blob\", \"Spike\"]\n\
                        Dislikes: [\"Spike\"]\n\
                        Wiki URL: https://thessum.miraheze.org/wiki/Glorp\n\
                        Image URL: None\n\
                        Image alt: None\n\
                        Attribution: None";
        assert_eq!(render_text(&glorp()), expected);
    }

    #[test]
    fn test_render_text_missing_vs_empty() {
        let mut record = CreatureRecord::new("u");
        let text = render_text(&record);
        assert!(text.starts_with("No. None | Name: None | Personality: None"));
        assert!(text.contains("Likes: None"));

        record.likes = Some(vec![]);
        assert!(render_text(&record).contains("Likes: []"));
    }

    #[test]
    fn test_write_record_json_line() {
        let mut out = Vec::new();
        write_record(&mut out, &CreatureRecord::new("u"), OutputFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"wiki_url\":\"u\"}\n");
    }

    #[test]
    fn test_write_record_text_starts_with_blank_line() {
        let mut out = Vec::new();
        write_record(&mut out, &glorp(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nNo. 7 | Name: Glorp"));
        assert!(text.ends_with("Attribution: None\n"));
    }
}
