//! JSON codec for discriminator-less unions.
//!
//! The wire format carries no type tag, so decoding is a trial: the input
//! is buffered once, then replayed against each declared variant in order
//! and the first one that parses wins. Two variants with overlapping shapes
//! therefore always resolve to the one declared first. Producers and
//! consumers rely on that order, so it must not change.

use serde_json::Value;
use std::io;
use std::marker::PhantomData;
use tracing::{debug, trace};

use crate::cursor::ReplayCursor;
use crate::error::{DecodeError, EncodeError, Result};
use crate::scan::scan_properties;
use crate::union::{UnionValue, Variants};
use crate::validation::Validate;

/// Encoder and trial decoder for the union described by `V`.
pub struct UnionCodec<V>(PhantomData<V>);

impl<V: Variants> UnionCodec<V> {
    /// Decode JSON text.
    pub fn decode_str(input: &str) -> Result<UnionValue<V>> {
        let cursor = ReplayCursor::parse(input).map_err(Self::malformed)?;
        Self::decode_cursor(cursor)
    }

    pub fn decode_slice(input: &[u8]) -> Result<UnionValue<V>> {
        let cursor = ReplayCursor::parse_slice(input).map_err(Self::malformed)?;
        Self::decode_cursor(cursor)
    }

    pub fn decode_reader<R: io::Read>(reader: R) -> Result<UnionValue<V>> {
        let cursor = ReplayCursor::parse_reader(reader).map_err(Self::malformed)?;
        Self::decode_cursor(cursor)
    }

    /// Decode an already parsed JSON value.
    pub fn decode_value(value: Value) -> Result<UnionValue<V>> {
        Self::decode_cursor(ReplayCursor::new(value))
    }

    /// Run the trial decode over a buffered input.
    pub fn decode_cursor(cursor: ReplayCursor) -> Result<UnionValue<V>> {
        let kind = cursor.kind();
        if !kind.is_container() {
            return Err(DecodeError::MalformedInput {
                union: V::UNION,
                found: kind.to_string(),
            });
        }

        scan_properties(&cursor, V::inspect_property);

        let candidates = V::candidates();
        for candidate in candidates {
            match (candidate.decode)(cursor.replay()) {
                Ok(variant) => {
                    trace!(union = V::UNION, variant = candidate.name, "variant matched");
                    return Ok(UnionValue::new(variant));
                }
                Err(err) => {
                    debug!(
                        union = V::UNION,
                        variant = candidate.name,
                        error = %err,
                        "variant rejected input"
                    );
                }
            }
        }

        Err(DecodeError::NoMatchingVariant {
            union: V::UNION,
            tried: candidates.iter().map(|candidate| candidate.name).collect(),
        })
    }

    fn malformed(err: serde_json::Error) -> DecodeError {
        DecodeError::MalformedInput {
            union: V::UNION,
            found: format!("invalid JSON ({err})"),
        }
    }

    /// Encode as compact JSON. An empty union encodes as `{}`.
    pub fn encode(value: &UnionValue<V>) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn encode_pretty(value: &UnionValue<V>) -> Result<String, EncodeError> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    pub fn encode_to_writer<W: io::Write>(writer: W, value: &UnionValue<V>) -> Result<(), EncodeError> {
        Ok(serde_json::to_writer(writer, value)?)
    }

    pub fn encode_to_value(value: &UnionValue<V>) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(value)?)
    }
}

impl<V: Variants + Validate> UnionCodec<V> {
    /// Decode, then run the validation hook on the constructed value.
    pub fn decode_validated(input: &str) -> Result<UnionValue<V>> {
        let value = Self::decode_str(input)?;
        let findings = value.validate();
        if findings.is_empty() {
            Ok(value)
        } else {
            Err(DecodeError::Invalid {
                union: V::UNION,
                findings,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppleReq, BananaReq, FruitReq, FruitReqVariant};

    type FruitCodec = UnionCodec<FruitReqVariant>;

    #[test]
    fn test_decode_apple() {
        let fruit = FruitCodec::decode_str(r#"{"cultivar": "Fuji", "mealy": false}"#).unwrap();
        assert_eq!(fruit, FruitReq::from(AppleReq::new("Fuji").with_mealy(false)));
    }

    #[test]
    fn test_decode_banana() {
        let fruit = FruitCodec::decode_str(r#"{"lengthCm": 17.5}"#).unwrap();
        assert_eq!(fruit.variant_name(), Some("BananaReq"));
        assert_eq!(fruit, FruitReq::from(BananaReq::new(17.5)));
    }

    #[test]
    fn test_bare_string_is_malformed() {
        let err = FruitCodec::decode_str(r#""x""#).unwrap_err();
        match err {
            DecodeError::MalformedInput { union, found } => {
                assert_eq!(union, "FruitReq");
                assert_eq!(found, "a string");
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_text_is_malformed() {
        let err = FruitCodec::decode_str("{\"cultivar\": ").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput { .. }));
    }

    #[test]
    fn test_no_matching_variant_lists_attempts() {
        let err = FruitCodec::decode_str(r#"{"color": "red"}"#).unwrap_err();
        match err {
            DecodeError::NoMatchingVariant { union, tried } => {
                assert_eq!(union, "FruitReq");
                assert_eq!(tried, vec!["AppleReq", "BananaReq"]);
            }
            other => panic!("Expected NoMatchingVariant, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_union_encodes_as_empty_object() {
        assert_eq!(FruitCodec::encode(&FruitReq::empty()).unwrap(), "{}");
    }

    #[test]
    fn test_encode_writes_variant_without_wrapper() {
        let fruit = FruitReq::from(AppleReq::new("Gala"));
        assert_eq!(FruitCodec::encode(&fruit).unwrap(), r#"{"cultivar":"Gala"}"#);
    }

    #[test]
    fn test_encode_pretty_indents_members() {
        let fruit = FruitReq::from(BananaReq::new(12.0).with_sweet(true));
        assert_eq!(
            FruitCodec::encode_pretty(&fruit).unwrap(),
            "{\n  \"lengthCm\": 12.0,\n  \"sweet\": true\n}"
        );
        assert_eq!(FruitCodec::encode_pretty(&FruitReq::empty()).unwrap(), "{}");
    }

    #[test]
    fn test_encode_to_writer_matches_encode() {
        let fruit = FruitReq::from(AppleReq::new("Gala").with_mealy(true));
        let mut buffer = Vec::new();

        FruitCodec::encode_to_writer(&mut buffer, &fruit).unwrap();

        assert_eq!(buffer, br#"{"cultivar":"Gala","mealy":true}"#);
        assert_eq!(String::from_utf8(buffer).unwrap(), FruitCodec::encode(&fruit).unwrap());
    }

    #[test]
    fn test_candidate_list_is_shared_between_decodes() {
        let first = FruitReqVariant::candidates();
        let second = FruitReqVariant::candidates();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_decode_validated_accepts_fruit() {
        let fruit = FruitCodec::decode_validated(r#"{"cultivar": "Fuji"}"#).unwrap();
        assert!(fruit.is_populated());
    }
}
