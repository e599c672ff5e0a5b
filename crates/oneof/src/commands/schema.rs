use crate::error::CliError;
use crate::unions::KnownUnion;
use starbase::AppResult;
use std::path::PathBuf;

pub fn run_schema(union: KnownUnion, output: Option<PathBuf>) -> AppResult {
    let schema = union.schema();
    let schema_json = serde_json::to_string_pretty(&schema).map_err(CliError::Render)?;

    if let Some(path) = output {
        std::fs::write(&path, schema_json).map_err(|source| CliError::Write { path, source })?;
    } else {
        println!("{}", schema_json);
    }

    Ok(None)
}
