//! Replayable input cursor.
//!
//! The input is read once into a buffered JSON value. Every candidate
//! decoder then starts from the same position by borrowing the buffer,
//! so a failed attempt leaves nothing behind for the next one.

use serde_json::Value;
use std::fmt;
use std::io;

/// Kind of the first token of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Null,
    Bool,
    Number,
    String,
    ArrayStart,
    ObjectStart,
}

impl TokenKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TokenKind::Null,
            Value::Bool(_) => TokenKind::Bool,
            Value::Number(_) => TokenKind::Number,
            Value::String(_) => TokenKind::String,
            Value::Array(_) => TokenKind::ArrayStart,
            Value::Object(_) => TokenKind::ObjectStart,
        }
    }

    /// Whether a union body may start with this token.
    pub fn is_container(self) -> bool {
        matches!(self, TokenKind::ArrayStart | TokenKind::ObjectStart)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Null => "null",
            TokenKind::Bool => "a boolean",
            TokenKind::Number => "a number",
            TokenKind::String => "a string",
            TokenKind::ArrayStart => "an array",
            TokenKind::ObjectStart => "an object",
        };
        f.write_str(name)
    }
}

/// A buffered JSON value that can be read from the start any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayCursor {
    buffer: Value,
}

impl ReplayCursor {
    pub fn new(buffer: Value) -> Self {
        Self { buffer }
    }

    /// Buffer a single JSON value from text.
    pub fn parse(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input).map(Self::new)
    }

    pub fn parse_slice(input: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(input).map(Self::new)
    }

    pub fn parse_reader<R: io::Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader).map(Self::new)
    }

    /// Kind of the top-level token.
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(&self.buffer)
    }

    /// Rewind to the start and hand out a deserializer over the whole input.
    pub fn replay(&self) -> &Value {
        &self.buffer
    }

    /// Top-level object members in document order; empty for anything else.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.buffer
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(name, value)| (name.as_str(), value)))
    }
}
