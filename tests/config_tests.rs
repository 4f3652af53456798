#![cfg(feature = "json")]

use vatfeld::{CountryRegistry, RegistryError, RuleDefinition, ValidationOutcome};

const TABLE: &str = r#"[
    {
        "code": "AT",
        "display_name": "Österreich",
        "format_pattern": "U[0-9]{8}",
        "example_value": "U12345678",
        "format_description": "U followed by 8 digits.",
        "message": "Bitte U und 8 Ziffern eingeben."
    },
    {
        "code": "RO",
        "display_name": "Rumänien",
        "format_pattern": "[0-9]{2,10}",
        "example_value": "1234567890",
        "format_description": "2 to 10 digits.",
        "min_len": 4
    }
]"#;

#[test]
fn loads_json_table() {
    let registry = CountryRegistry::from_json(TABLE).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.search("osterreich")[0].code(), "AT");
}

#[test]
fn json_overrides_apply() {
    let registry = CountryRegistry::from_json(TABLE).unwrap();
    assert_eq!(
        registry.validate("AT", "A12345678").unwrap(),
        ValidationOutcome::Invalid("Bitte U und 8 Ziffern eingeben.".into())
    );
    assert_eq!(registry.validate("RO", "123").unwrap(), ValidationOutcome::Incomplete);
    assert_eq!(registry.validate("RO", "1234").unwrap(), ValidationOutcome::Valid);
}

#[test]
fn malformed_json_is_config_error() {
    let err = CountryRegistry::from_json("[{").unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

#[test]
fn missing_field_is_config_error() {
    let err = CountryRegistry::from_json(r#"[{"code": "AT"}]"#).unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

#[test]
fn json_table_is_still_checked() {
    let json = r#"[{
        "code": "PT",
        "display_name": "Portugal",
        "format_pattern": "[0-9]{9}",
        "example_value": "12345",
        "format_description": "9 digits."
    }]"#;
    assert_eq!(
        CountryRegistry::from_json(json).unwrap_err(),
        RegistryError::ExampleMismatch {
            code: "PT".into(),
            example: "12345".into(),
        }
    );
}

#[test]
fn definitions_serialize_without_empty_overrides() {
    let def = RuleDefinition::new("DK", "Dinamarca", "[0-9]{8}", "12345678", "8 digits.");
    let json = serde_json::to_value(&def).unwrap();
    assert!(json.get("min_len").is_none());
    assert!(json.get("message").is_none());

    let back: RuleDefinition = serde_json::from_value(json).unwrap();
    assert_eq!(back, def);
}

#[test]
fn reference_table_survives_json() {
    let json = serde_json::to_string(&vatfeld::registry::reference_definitions()).unwrap();
    let registry = CountryRegistry::from_json(&json).unwrap();
    assert_eq!(registry.len(), 27);
    assert!(registry.validate("NL", "123456789B01").unwrap().is_valid());
}
