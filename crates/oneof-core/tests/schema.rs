//! JSON Schema output for unions

use oneof_core::models::FruitReq;
use schemars::schema_for;

#[test]
fn test_fruit_schema_lists_variants_in_declared_order() {
    let schema = serde_json::to_value(schema_for!(FruitReq)).unwrap();

    assert_eq!(schema["title"], "FruitReq");

    let one_of = schema["oneOf"].as_array().expect("oneOf array");
    assert_eq!(one_of.len(), 2);

    let refs: Vec<&str> = one_of
        .iter()
        .map(|s| s["$ref"].as_str().unwrap_or_default())
        .collect();
    assert!(refs[0].ends_with("AppleReq"), "{refs:?}");
    assert!(refs[1].ends_with("BananaReq"), "{refs:?}");
}

#[test]
fn test_variant_definitions_are_included() {
    let schema = serde_json::to_string(&schema_for!(FruitReq)).unwrap();

    assert!(schema.contains("\"cultivar\""));
    assert!(schema.contains("\"lengthCm\""));
}
