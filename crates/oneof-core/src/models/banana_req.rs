use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::Validate;

/// Banana variant of a fruit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BananaReq {
    pub length_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweet: Option<bool>,
}

impl BananaReq {
    pub fn new(length_cm: f64) -> Self {
        Self {
            length_cm,
            sweet: None,
        }
    }

    pub fn with_sweet(mut self, sweet: bool) -> Self {
        self.sweet = Some(sweet);
        self
    }
}

impl Validate for BananaReq {}
