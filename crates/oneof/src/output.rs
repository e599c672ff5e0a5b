//! Output formatting for CLI commands

use crate::error::CliError;
use oneof_core::ValidationFinding;
use serde::Serialize;
use serde_json::Value;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputFormat::Json } else { OutputFormat::Human }
    }
}

/// JSON output for decode and validate commands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    pub success: bool,
    pub union: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<ValidationFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeReport {
    pub fn success(
        union: &str,
        input: &str,
        variant: &str,
        value: Value,
        findings: Vec<ValidationFinding>,
    ) -> Self {
        Self {
            success: findings.is_empty(),
            union: union.to_string(),
            input: input.to_string(),
            variant: Some(variant.to_string()),
            value: Some(value),
            findings,
            error: None,
        }
    }

    pub fn error(union: &str, input: &str, error: &str) -> Self {
        Self {
            success: false,
            union: union.to_string(),
            input: input.to_string(),
            variant: None,
            value: None,
            findings: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Render a JSON value, pretty or compact
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_report_omits_empty_members() {
        let report = DecodeReport::error("FruitReq", "in.json", "boom");
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            json!({"success": false, "union": "FruitReq", "input": "in.json", "error": "boom"})
        );
    }

    #[test]
    fn test_success_with_findings_is_not_successful() {
        let report = DecodeReport::success(
            "FruitReq",
            "in.json",
            "AppleReq",
            json!({"cultivar": "Fuji"}),
            vec![ValidationFinding::new("nope")],
        );
        assert!(!report.success);
    }

    #[test]
    fn test_render_compact() {
        assert_eq!(render_json(&json!({"a": [1]}), false).unwrap(), r#"{"a":[1]}"#);
    }
}
