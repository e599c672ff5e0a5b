//! Decode Command
//!
//! Decodes a JSON document as a known union and prints the matched variant
//! together with its canonical encoding.

use crate::error::CliError;
use crate::output::{DecodeReport, OutputFormat, render_json};
use crate::unions::{Decoded, KnownUnion};
use oneof_common::config::OneofConfig;
use starbase::AppResult;
use std::path::Path;
use tracing::debug;

/// Load and decode `input`, keeping the decode error for reporting
pub(crate) fn decode_document(
    input: &Path,
    union: KnownUnion,
    pretty: bool,
) -> Result<Decoded, CliError> {
    let decoded = union.load(input, pretty)?;
    debug!("Decoded {:?} as {}::{}", input, union.name(), decoded.variant);
    Ok(decoded)
}

/// Run the decode command
pub fn run_decode(input: &Path, union: KnownUnion, json: bool, config: &OneofConfig) -> AppResult {
    let input_display = input.display().to_string();
    let pretty = config.output.pretty;

    match (decode_document(input, union, pretty), OutputFormat::from_flag(json)) {
        (Ok(decoded), OutputFormat::Json) => {
            let report = DecodeReport::success(
                union.name(),
                &input_display,
                decoded.variant,
                decoded.value,
                Vec::new(),
            );
            println!("{}", render_json(&report, pretty)?);
            Ok(None)
        }
        (Ok(decoded), OutputFormat::Human) => {
            println!("{} -> {}", union.name(), decoded.variant);
            println!("{}", decoded.rendered);
            Ok(None)
        }
        (Err(err), OutputFormat::Json) => {
            let report = DecodeReport::error(union.name(), &input_display, &err.to_string());
            println!("{}", render_json(&report, pretty)?);
            Ok(Some(1))
        }
        (Err(err), OutputFormat::Human) => {
            eprintln!("{}", err);
            Ok(Some(1))
        }
    }
}
