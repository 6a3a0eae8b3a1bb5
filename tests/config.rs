//! Keyboard configuration loading tests

use std::io::Write;

use keybridge::config::{KeyboardConfiguration, KeyboardType, ReturnKeyType};
use keybridge::validation::{CharacterValidation, ConfigError, LineType};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_file() {
    let file = write_temp(
        ".yaml",
        r#"
keyboardType: decimal_pad
characterValidation: decimal
lineType: single_line
returnKeyType: go
characterLimit: 6
"#,
    );

    let config = KeyboardConfiguration::load(file.path()).unwrap();
    assert_eq!(config.keyboard_type, KeyboardType::DecimalPad);
    assert_eq!(config.character_validation, CharacterValidation::Decimal);
    assert_eq!(config.return_key_type, ReturnKeyType::Go);

    let (validator, diagnostics) = config.text_validator();
    assert!(diagnostics.is_empty());
    assert_eq!(validator.validate("", "1,2.34567", 0, 0).text, "1,2345");
}

#[test]
fn test_load_json_file_with_custom_rules() {
    let file = write_temp(
        ".json",
        r#"{
            "characterValidation": 8,
            "lineType": 2,
            "characterValidator": {
                "rules": [
                    {
                        "conditions": [
                            {"operator": 5, "intValue1": 97, "intValue2": 122}
                        ],
                        "action": 2
                    },
                    {
                        "conditions": [{"operator": 99}],
                        "action": 0
                    }
                ],
                "otherCharacterAction": 1
            }
        }"#,
    );

    let config = KeyboardConfiguration::load(file.path()).unwrap();
    let (validator, diagnostics) = config.text_validator();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule_index, Some(1));
    assert_eq!(validator.line_type, LineType::MultiLineNewline);
    assert_eq!(validator.validate("", "ab1C", 0, 0).text, "AB");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = KeyboardConfiguration::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let file = write_temp(".json", "{ not json");
    let err = KeyboardConfiguration::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Parse error"));
}

#[test]
fn test_unknown_default_action_fails_closed() {
    let config = KeyboardConfiguration::from_json_str(
        r#"{
            "characterValidation": "custom",
            "characterValidator": {"rules": [], "otherCharacterAction": 42}
        }"#,
    )
    .unwrap();

    let (validator, diagnostics) = config.text_validator();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule_index, None);
    assert_eq!(validator.validate("", "abc", 0, 0).text, "");
}
