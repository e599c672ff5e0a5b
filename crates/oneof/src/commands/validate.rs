//! Validate Command
//!
//! Decodes a document and runs the validation hook on the result.

use super::decode::decode_document;
use crate::output::{DecodeReport, OutputFormat, render_json};
use crate::unions::KnownUnion;
use oneof_common::config::OneofConfig;
use starbase::AppResult;
use std::path::Path;
use tracing::warn;

/// Run the validate command
pub fn run_validate(input: &Path, union: KnownUnion, json: bool, config: &OneofConfig) -> AppResult {
    let input_display = input.display().to_string();

    let decoded = match decode_document(input, union, config.output.pretty) {
        Ok(decoded) => decoded,
        Err(err) => {
            match OutputFormat::from_flag(json) {
                OutputFormat::Json => {
                    let report = DecodeReport::error(union.name(), &input_display, &err.to_string());
                    println!("{}", render_json(&report, config.output.pretty)?);
                }
                OutputFormat::Human => eprintln!("Invalid {}: {}", input_display, err),
            }
            return Ok(Some(1));
        }
    };

    for finding in &decoded.findings {
        warn!("{}: {}", input_display, finding);
    }
    let exit_code = if decoded.findings.is_empty() { None } else { Some(1) };

    match OutputFormat::from_flag(json) {
        OutputFormat::Json => {
            let report = DecodeReport::success(
                union.name(),
                &input_display,
                decoded.variant,
                decoded.value,
                decoded.findings,
            );
            println!("{}", render_json(&report, config.output.pretty)?);
        }
        OutputFormat::Human if decoded.findings.is_empty() => {
            println!("{}: valid {}({})", input_display, union.name(), decoded.variant);
        }
        OutputFormat::Human => {
            println!(
                "{}: {} finding(s) for {}({})",
                input_display,
                decoded.findings.len(),
                union.name(),
                decoded.variant
            );
            for finding in &decoded.findings {
                println!("  - {}", finding);
            }
        }
    }

    Ok(exit_code)
}
