//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for [`CheckReport`]. Terminal
//! colouring belongs to the CLI layer.

use std::io::Write;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  PERSON RECORD CHECK")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;
    writeln!(writer, "  Violations:   {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.violations.is_empty() {
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(writer, "  VIOLATIONS")?;
        writeln!(writer, "{}", "-".repeat(60))?;
        for violation in &report.violations {
            writeln!(writer, "{}", violation.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(60))?;
    if let (true, Some(greeting)) = (report.ok, &report.greeting) {
        writeln!(writer, "\u{2713} Record is valid: {greeting}")?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} violation(s) found",
            report.errors_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(60))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validator::validate;
    use serde_json::json;

    fn render_human(report: &CheckReport) -> String {
        let mut buf = Vec::new();
        write_human(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_output_for_valid_record() {
        let report =
            CheckReport::from_outcome(validate(&json!({"name": "Taras", "surname": "Belov"})));
        let text = render_human(&report);
        assert!(text.contains("Violations:   0"), "got: {text}");
        assert!(text.contains("Record is valid: Taras Belov"), "got: {text}");
        assert!(!text.contains("VIOLATIONS"));
    }

    #[test]
    fn test_human_output_lists_violations() {
        let report = CheckReport::from_outcome(validate(&json!({"name": "Taras"})));
        let text = render_human(&report);
        assert!(text.contains("surname: field required [MissingField]"), "got: {text}");
        assert!(text.contains("1 violation(s) found"), "got: {text}");
    }

    #[test]
    fn test_json_output_shape() {
        let report = CheckReport::from_outcome(validate(&json!({
            "name": "Eduardo",
            "surname": ["Santos", "Tavares"],
            "age": "forever young"
        })));
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], false);
        assert!(value.get("person").is_none());
        assert_eq!(value["violations"][0]["field"], "age");
        assert_eq!(value["violations"][0]["reason"], "TypeMismatch");
    }

    #[test]
    fn test_json_output_includes_person_and_greeting() {
        let report = CheckReport::from_outcome(validate(&json!({
            "name": "Eduardo",
            "surname": ["Santos", "Tavares"],
            "age": 20
        })));
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["person"]["surname"], json!(["Santos", "Tavares"]));
        assert_eq!(value["person"]["is_staff"], false);
        assert_eq!(value["greeting"], "Eduardo Santos Tavares, 20");
        assert_eq!(value["violations"], json!([]));
    }
}
