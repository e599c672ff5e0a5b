use anyhow::{Context, Result};
use oneof_core::{UnionCodec, UnionValue, Variants};
use std::path::Path;
use tracing::debug;

/// Read a JSON document from disk
pub fn load_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read a JSON document and decode it as the union `V`
pub fn load_union<V: Variants>(path: &Path) -> Result<UnionValue<V>> {
    let content = load_document(path)?;
    debug!("Decoding {:?} as {}", path, V::UNION);

    let value = UnionCodec::<V>::decode_str(&content)
        .with_context(|| format!("Failed to decode {} as {}", path.display(), V::UNION))?;
    Ok(value)
}
