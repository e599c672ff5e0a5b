//! oneOf union values with a discriminator-less JSON codec.
//!
//! Decoding tries each declared variant in order against the same buffered
//! input and keeps the first that parses. See [`codec`] for the contract.

pub mod codec;
pub mod cursor;
pub mod error;
pub mod models;
pub mod scan;
pub mod union;
pub mod validation;

pub use codec::UnionCodec;
pub use cursor::{ReplayCursor, TokenKind};
pub use error::{DecodeError, EncodeError};
pub use union::{Candidate, DecodeFn, UnionValue, Variants};
pub use validation::{Validate, ValidationFinding};

// Paths used by `one_of!` expansions in downstream crates
#[doc(hidden)]
pub mod __private {
    pub use schemars::{Schema, SchemaGenerator};
    pub use serde::{Deserialize, Serialize, Serializer};
    pub use serde_json::Value;
}
