//! CLI error types

use miette::Diagnostic;
use oneof_core::EncodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("{0:#}")]
    #[diagnostic(code(oneof::load))]
    Load(anyhow::Error),

    #[error(transparent)]
    #[diagnostic(code(oneof::encode))]
    Encode(#[from] EncodeError),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(oneof::render))]
    Render(#[from] serde_json::Error),

    #[error("Failed to write {path:?}: {source}")]
    #[diagnostic(code(oneof::write))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
