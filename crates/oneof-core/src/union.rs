//! Union values and the description of their declared variants.
//!
//! A union is described by an enum with one case per declared variant
//! (see [`one_of!`](crate::one_of)). [`UnionValue`] wraps that enum and
//! holds at most one populated variant. Its JSON form is the populated
//! variant's own JSON, with no wrapper and no discriminator.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::codec::UnionCodec;
use crate::validation::{Validate, ValidationFinding};

/// Decoder for one declared variant, applied to the replayed input.
pub type DecodeFn<V> = fn(&Value) -> Result<V, serde_json::Error>;

/// One entry of a union's ordered candidate list.
pub struct Candidate<V> {
    pub name: &'static str,
    pub decode: DecodeFn<V>,
}

impl<V> Candidate<V> {
    pub const fn new(name: &'static str, decode: DecodeFn<V>) -> Self {
        Self { name, decode }
    }
}

impl<V> fmt::Debug for Candidate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

/// The closed set of shapes a union may take.
pub trait Variants: Sized + Serialize + 'static {
    /// Union name used in errors, logs and schema titles.
    const UNION: &'static str;

    /// Declared variants in decode priority order.
    fn candidates() -> &'static [Candidate<Self>];

    /// Name of the declared variant this value holds.
    fn variant_name(&self) -> &'static str;

    /// Schemas of the declared variants, in declared order.
    fn variant_schemas(generator: &mut SchemaGenerator) -> Vec<Schema>;

    /// Called for every top-level property before any variant is tried.
    fn inspect_property(_name: &str, _value: &Value) {}
}

/// A value holding at most one variant of `V`.
///
/// Construction from a variant populates it for good; there is no way to
/// swap the variant of an existing value.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionValue<V> {
    variant: Option<V>,
}

impl<V> UnionValue<V> {
    pub fn new(variant: V) -> Self {
        Self {
            variant: Some(variant),
        }
    }

    /// A value with no variant populated. Encodes as `{}`.
    pub fn empty() -> Self {
        Self { variant: None }
    }

    pub fn variant(&self) -> Option<&V> {
        self.variant.as_ref()
    }

    pub fn into_variant(self) -> Option<V> {
        self.variant
    }

    pub fn is_populated(&self) -> bool {
        self.variant.is_some()
    }
}

impl<V: Variants> UnionValue<V> {
    pub fn variant_name(&self) -> Option<&'static str> {
        self.variant.as_ref().map(Variants::variant_name)
    }
}

impl<V> Default for UnionValue<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Variants> fmt::Display for UnionValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "{}({})", V::UNION, name),
            None => write!(f, "{}(empty)", V::UNION),
        }
    }
}

impl<V: Variants> Serialize for UnionValue<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.variant {
            Some(variant) => variant.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<'de, V: Variants> Deserialize<'de> for UnionValue<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let buffer = Value::deserialize(deserializer)?;
        UnionCodec::<V>::decode_value(buffer).map_err(de::Error::custom)
    }
}

/// Unions carry no cross-field rules; findings come from the variant alone.
impl<V: Validate> Validate for UnionValue<V> {
    fn validate(&self) -> Vec<ValidationFinding> {
        self.variant
            .as_ref()
            .map(Validate::validate)
            .unwrap_or_default()
    }
}

impl<V: Variants> JsonSchema for UnionValue<V> {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed(V::UNION)
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let one_of = V::variant_schemas(generator);
        json_schema!({
            "title": V::UNION,
            "oneOf": one_of,
        })
    }
}

/// Declare a union's variant enum and its ordered candidate list.
///
/// ```ignore
/// one_of! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum FruitReqVariant as "FruitReq" {
///         AppleReq(AppleReq),
///         BananaReq(BananaReq),
///     }
/// }
/// ```
///
/// Variants are tried in the order written. Every variant type must
/// implement `Serialize`, `DeserializeOwned` and `JsonSchema`.
#[macro_export]
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $union:literal {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant($ty)),+
        }

        impl $crate::__private::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::Serializer,
            {
                match self {
                    $($name::$variant(inner) => $crate::__private::Serialize::serialize(inner, serializer)),+
                }
            }
        }

        impl $crate::Variants for $name {
            const UNION: &'static str = $union;

            fn candidates() -> &'static [$crate::Candidate<Self>] {
                const CANDIDATES: &[$crate::Candidate<$name>] = &[
                    $($crate::Candidate::new(
                        stringify!($variant),
                        |value: &$crate::__private::Value| {
                            <$ty as $crate::__private::Deserialize>::deserialize(value).map($name::$variant)
                        },
                    )),+
                ];
                CANDIDATES
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => stringify!($variant)),+
                }
            }

            fn variant_schemas(
                generator: &mut $crate::__private::SchemaGenerator,
            ) -> ::std::vec::Vec<$crate::__private::Schema> {
                ::std::vec![$(generator.subschema_for::<$ty>()),+]
            }
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }

            impl ::core::convert::From<$ty> for $crate::UnionValue<$name> {
                fn from(value: $ty) -> Self {
                    $crate::UnionValue::new($name::$variant(value))
                }
            }
        )+
    };
}
