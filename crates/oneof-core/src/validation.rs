//! Post-construction validation hook.

use serde::Serialize;
use std::fmt;

/// One problem reported by [`Validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFinding {
    /// Member the finding refers to, if it concerns a single member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    pub message: String,
}

impl ValidationFinding {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            member: None,
            message: message.into(),
        }
    }

    pub fn for_member(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            member: Some(member.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}: {}", member, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Rules checked after a value has been constructed.
///
/// The default reports nothing, which is correct for types without
/// cross-field rules.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationFinding> {
        Vec::new()
    }
}
