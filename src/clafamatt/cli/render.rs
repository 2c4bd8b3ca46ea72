use clafamatt::error::Result;
use clafamatt::model::Value;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;

const EXPRESSION_WIDTH: usize = 32;

#[derive(Debug, Serialize)]
pub struct SynopsisLine {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FamilyReport {
    pub attribute: String,
    pub scope: String,
    pub namespace: String,
    pub linearization: String,
    pub ancestors: Vec<String>,
    pub values: Vec<Value>,
    pub properties: BTreeMap<String, Value>,
}

/// `nil` for unset, JSON for everything else.
pub(super) fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        other => other.to_string(),
    }
}

pub(super) fn format_synopsis_line(line: &SynopsisLine) -> String {
    match (&line.result, &line.error) {
        (_, Some(error)) => format!(
            "{:<width$}{} {}",
            line.expression,
            "# !!".dimmed(),
            error.red(),
            width = EXPRESSION_WIDTH
        ),
        (Some(value), None) => format!(
            "{:<width$}{} {}",
            line.expression,
            "# =>".dimmed(),
            format_value(value).green(),
            width = EXPRESSION_WIDTH
        ),
        (None, None) => line.expression.clone(),
    }
}

pub(super) fn print_synopsis(lines: &[SynopsisLine]) {
    let mut previous_was_write = false;
    for line in lines {
        let is_write = line.result.is_none() && line.error.is_none();
        if is_write && !previous_was_write {
            println!();
        }
        previous_was_write = is_write;
        println!("{}", format_synopsis_line(line));
    }
}

pub(super) fn print_family(report: &FamilyReport) {
    println!(
        "{} on {} {}",
        report.attribute.bold(),
        report.scope.bold(),
        format!("(namespace {}, {})", report.namespace, report.linearization).dimmed()
    );
    println!();
    println!("{:<12}{}", "ancestors:", report.ancestors.join(", "));
    let values: Vec<String> = report.values.iter().map(format_value).collect();
    println!("{:<12}{}", "values:", values.join(", "));
    println!("properties:");

    let width = report.ancestors.iter().map(|a| a.len()).max().unwrap_or(0);
    for ancestor in &report.ancestors {
        if let Some(value) = report.properties.get(ancestor) {
            println!(
                "  {:<width$}  {} {}",
                ancestor.yellow(),
                "=>".dimmed(),
                format_value(value),
                width = width
            );
        }
    }
}

pub(super) fn print_json<T: Serialize>(payload: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn null_renders_as_nil_and_strings_are_quoted() {
        assert_eq!(format_value(&Value::Null), "nil");
        assert_eq!(format_value(&Value::from("klaatu")), "\"klaatu\"");
        assert_eq!(format_value(&Value::from(3)), "3");
    }

    #[test]
    fn read_lines_are_aligned() {
        plain();
        let line = SynopsisLine {
            expression: "Shared.foo".to_string(),
            result: Some(Value::Null),
            error: None,
        };
        assert_eq!(
            format_synopsis_line(&line),
            format!("Shared.foo{}# => nil", " ".repeat(22))
        );
    }

    #[test]
    fn write_lines_have_no_result() {
        plain();
        let line = SynopsisLine {
            expression: "Shared.foo = \"klaatu\"".to_string(),
            result: None,
            error: None,
        };
        assert_eq!(format_synopsis_line(&line), "Shared.foo = \"klaatu\"");
    }

    #[test]
    fn errors_are_inline() {
        plain();
        let line = SynopsisLine {
            expression: "Parent.bar".to_string(),
            result: None,
            error: Some("undefined procedure `bar` for Parent".to_string()),
        };
        assert!(format_synopsis_line(&line).ends_with("# !! undefined procedure `bar` for Parent"));
    }

    #[test]
    fn json_skips_missing_fields() {
        let line = SynopsisLine {
            expression: "Shared.foo".to_string(),
            result: Some(Value::Null),
            error: None,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["result"], Value::Null);
        assert!(json.get("error").is_none());
    }
}
