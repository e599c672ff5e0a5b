use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::Validate;

/// Apple variant of a fruit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppleReq {
    pub cultivar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mealy: Option<bool>,
}

impl AppleReq {
    pub fn new(cultivar: impl Into<String>) -> Self {
        Self {
            cultivar: cultivar.into(),
            mealy: None,
        }
    }

    pub fn with_mealy(mut self, mealy: bool) -> Self {
        self.mealy = Some(mealy);
        self
    }
}

impl Validate for AppleReq {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cultivar_is_required() {
        let res: Result<AppleReq, _> = serde_json::from_str(r#"{"mealy": true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_unknown_members_are_rejected() {
        let res: Result<AppleReq, _> = serde_json::from_str(r#"{"cultivar": "Fuji", "lengthCm": 3}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_absent_mealy_is_not_written() {
        let json = serde_json::to_string(&AppleReq::new("Fuji")).unwrap();
        assert_eq!(json, r#"{"cultivar":"Fuji"}"#);
    }
}
