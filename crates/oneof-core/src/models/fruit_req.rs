use super::{AppleReq, BananaReq};
use crate::one_of;
use crate::union::UnionValue;
use crate::validation::{Validate, ValidationFinding};

one_of! {
    /// Declared variants of [`FruitReq`], in decode priority order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum FruitReqVariant as "FruitReq" {
        AppleReq(AppleReq),
        BananaReq(BananaReq),
    }
}

/// Request body that is either an apple or a banana.
pub type FruitReq = UnionValue<FruitReqVariant>;

impl Validate for FruitReqVariant {
    fn validate(&self) -> Vec<ValidationFinding> {
        match self {
            FruitReqVariant::AppleReq(apple) => apple.validate(),
            FruitReqVariant::BananaReq(banana) => banana.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::union::Variants;

    #[test]
    fn test_declared_order() {
        let names: Vec<&str> = FruitReqVariant::candidates()
            .iter()
            .map(|candidate| candidate.name)
            .collect();
        assert_eq!(names, vec!["AppleReq", "BananaReq"]);
    }

    #[test]
    fn test_display_names_populated_variant() {
        assert_eq!(FruitReq::from(BananaReq::new(3.0)).to_string(), "FruitReq(BananaReq)");
        assert_eq!(FruitReq::empty().to_string(), "FruitReq(empty)");
    }

    #[test]
    fn test_fruit_has_no_findings() {
        assert!(FruitReq::from(AppleReq::new("Fuji")).validate().is_empty());
        assert!(FruitReq::empty().validate().is_empty());
    }
}
