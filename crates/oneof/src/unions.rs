//! Unions the CLI knows how to decode.

use clap::ValueEnum;
use oneof_common::loader::load_union;
use oneof_core::models::{FruitReq, FruitReqVariant};
use oneof_core::{UnionCodec, UnionValue, Validate, ValidationFinding, Variants};
use schemars::{Schema, schema_for};
use serde_json::Value;
use std::path::Path;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KnownUnion {
    #[default]
    FruitReq,
}

/// A successfully decoded document.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub variant: &'static str,
    /// Canonical re-encoding of the decoded value
    pub value: Value,
    /// The same encoding as text, pretty or compact per config
    pub rendered: String,
    pub findings: Vec<ValidationFinding>,
}

impl KnownUnion {
    pub fn name(self) -> &'static str {
        match self {
            KnownUnion::FruitReq => FruitReqVariant::UNION,
        }
    }

    /// Read `path` and decode it as this union.
    pub fn load(self, path: &Path, pretty: bool) -> Result<Decoded, CliError> {
        match self {
            KnownUnion::FruitReq => {
                let value = load_union::<FruitReqVariant>(path).map_err(CliError::Load)?;
                describe(&value, pretty)
            }
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            KnownUnion::FruitReq => schema_for!(FruitReq),
        }
    }
}

fn describe<V: Variants + Validate>(value: &UnionValue<V>, pretty: bool) -> Result<Decoded, CliError> {
    let rendered = if pretty {
        UnionCodec::encode_pretty(value)?
    } else {
        UnionCodec::encode(value)?
    };
    Ok(Decoded {
        variant: value.variant_name().unwrap_or_default(),
        value: UnionCodec::encode_to_value(value)?,
        rendered,
        findings: value.validate(),
    })
}
