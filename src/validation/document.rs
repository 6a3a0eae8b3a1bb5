//! Configuration documents for character validators.
//!
//! Documents arrive already decoded (JSON from the host application, YAML on
//! disk) and are compiled into strongly-typed rules. Compilation never aborts on
//! a bad rule: the rule is skipped and a [`ConfigDiagnostic`] is recorded, so one
//! malformed entry cannot disable the rest of the validator. A skipped rule can
//! never match, which keeps the runtime fail-closed for that entry.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::condition::{CharacterCondition, ConditionOperator};
use super::rule::{CharacterAction, CharacterRule};
use super::validator::CharacterValidator;

/// An enum value as written in a document: either its ordinal or its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Ordinal(i64),
    Name(String),
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Ordinal(i) => write!(f, "{}", i),
            EnumValue::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// Closed enums that can be referenced from a document by ordinal or name.
pub trait DocumentEnum: Copy + Sized + 'static {
    /// Every variant, in ordinal order
    const VARIANTS: &'static [Self];

    /// Canonical snake_case name
    fn document_name(&self) -> &'static str;

    /// Look up a variant by name (case-insensitive)
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.document_name().eq_ignore_ascii_case(name))
    }

    /// Resolve a document value into a variant
    fn from_value(value: &EnumValue) -> Option<Self> {
        match value {
            EnumValue::Ordinal(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| Self::VARIANTS.get(i).copied()),
            EnumValue::Name(name) => Self::from_name(name),
        }
    }

    fn to_value(self) -> EnumValue {
        EnumValue::Name(self.document_name().to_string())
    }
}

impl DocumentEnum for ConditionOperator {
    const VARIANTS: &'static [Self] = &ConditionOperator::ALL;

    fn document_name(&self) -> &'static str {
        self.name()
    }
}

impl DocumentEnum for CharacterAction {
    const VARIANTS: &'static [Self] = &CharacterAction::ALL;

    fn document_name(&self) -> &'static str {
        self.name()
    }

    fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// Implement serde conversion through [`EnumValue`] for [`DocumentEnum`] types,
/// for use with `#[serde(try_from = "EnumValue", into = "EnumValue")]`.
macro_rules! document_enum_serde {
    ($($ty:ty),+ $(,)?) => {$(
        impl TryFrom<$crate::validation::EnumValue> for $ty {
            type Error = String;

            fn try_from(value: $crate::validation::EnumValue) -> Result<Self, Self::Error> {
                <$ty as $crate::validation::DocumentEnum>::from_value(&value)
                    .ok_or_else(|| format!("unknown {} {}", stringify!($ty), value))
            }
        }

        impl From<$ty> for $crate::validation::EnumValue {
            fn from(value: $ty) -> Self {
                $crate::validation::DocumentEnum::to_value(value)
            }
        }
    )+};
}
pub(crate) use document_enum_serde;

/// One list entry of a document.
///
/// An entry that does not fit its typed shape (wrong value types, missing
/// fields) is kept as raw JSON so that only that entry is rejected when the
/// document is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentEntry<T> {
    Typed(T),
    Raw(serde_json::Value),
}

impl<T: Clone + DeserializeOwned> DocumentEntry<T> {
    /// The typed entry, or the deserialization error of the raw one
    fn resolve(&self) -> Result<T, String> {
        match self {
            DocumentEntry::Typed(entry) => Ok(entry.clone()),
            DocumentEntry::Raw(raw) => {
                serde_json::from_value(raw.clone()).map_err(|e| format!("{} in {}", e, raw))
            }
        }
    }
}

impl<T> From<T> for DocumentEntry<T> {
    fn from(entry: T) -> Self {
        DocumentEntry::Typed(entry)
    }
}

/// `{operator, intValue1, intValue2, stringValue}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionDocument {
    #[serde(alias = "conditionOperator")]
    pub operator: EnumValue,
    #[serde(default, alias = "conditionIntValue1")]
    pub int_value1: i32,
    #[serde(default, alias = "conditionIntValue2")]
    pub int_value2: i32,
    #[serde(default, alias = "conditionStringValue")]
    pub string_value: String,
}

/// `{conditions, action, actionValue}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDocument {
    #[serde(default)]
    pub conditions: Vec<DocumentEntry<ConditionDocument>>,
    pub action: EnumValue,
    #[serde(default, alias = "actionIntValue")]
    pub action_value: i32,
}

/// `{rules, otherCharacterAction, otherCharacterActionValue}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterValidatorDocument {
    #[serde(default)]
    pub rules: Vec<DocumentEntry<RuleDocument>>,
    #[serde(default = "default_other_action")]
    pub other_character_action: DocumentEntry<EnumValue>,
    #[serde(default, alias = "otherCharacterActionIntValue")]
    pub other_character_action_value: i32,
}

fn default_other_action() -> DocumentEntry<EnumValue> {
    CharacterAction::Allow.to_value().into()
}

impl Default for CharacterValidatorDocument {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            other_character_action: default_other_action(),
            other_character_action_value: 0,
        }
    }
}

/// A problem found while compiling a validator document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Index of the offending rule (`None` for the default action)
    pub rule_index: Option<usize>,
    /// Index of the offending condition within the rule, if any
    pub condition_index: Option<usize>,
    pub message: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rule_index, self.condition_index) {
            (Some(r), Some(c)) => write!(f, "rule {} condition {}: {}", r, c, self.message),
            (Some(r), None) => write!(f, "rule {}: {}", r, self.message),
            _ => write!(f, "default action: {}", self.message),
        }
    }
}

/// A compiled validator together with the diagnostics produced while building it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledValidator {
    pub validator: CharacterValidator,
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl CompiledValidator {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl CharacterValidatorDocument {
    /// Compile into a typed validator, skipping malformed rules.
    ///
    /// An unknown or wrongly typed default action falls back to
    /// [`CharacterAction::Block`].
    pub fn compile(&self) -> CompiledValidator {
        let mut diagnostics = Vec::new();
        let mut rules = Vec::with_capacity(self.rules.len());

        for (rule_index, rule) in self.rules.iter().enumerate() {
            match rule.resolve().map_err(|e| (None, e)).and_then(|rule| compile_rule(&rule)) {
                Ok(compiled) => rules.push(compiled),
                Err((condition_index, message)) => diagnostics.push(ConfigDiagnostic {
                    rule_index: Some(rule_index),
                    condition_index,
                    message,
                }),
            }
        }

        let other_character_action = match self.other_character_action.resolve().and_then(|value| {
            CharacterAction::from_value(&value).ok_or_else(|| format!("unknown action {}", value))
        }) {
            Ok(action) => action,
            Err(message) => {
                diagnostics.push(ConfigDiagnostic {
                    rule_index: None,
                    condition_index: None,
                    message,
                });
                CharacterAction::Block
            }
        };

        for diagnostic in &diagnostics {
            tracing::warn!("Skipping malformed validator entry: {}", diagnostic);
        }

        CompiledValidator {
            validator: CharacterValidator {
                rules,
                other_character_action,
                other_character_action_value: self.other_character_action_value,
            },
            diagnostics,
        }
    }
}

fn compile_rule(rule: &RuleDocument) -> Result<CharacterRule, (Option<usize>, String)> {
    let mut conditions = Vec::with_capacity(rule.conditions.len());
    for (index, condition) in rule.conditions.iter().enumerate() {
        let condition = condition.resolve().map_err(|e| (Some(index), e))?;
        let operator = ConditionOperator::from_value(&condition.operator).ok_or_else(|| {
            (
                Some(index),
                format!("unknown operator {}", condition.operator),
            )
        })?;
        conditions.push(CharacterCondition {
            operator,
            int_value1: condition.int_value1,
            int_value2: condition.int_value2,
            string_value: condition.string_value.clone(),
        });
    }

    let action = CharacterAction::from_value(&rule.action)
        .ok_or_else(|| (None, format!("unknown action {}", rule.action)))?;

    Ok(CharacterRule {
        conditions,
        action,
        action_value: rule.action_value,
    })
}

impl From<&CharacterValidator> for CharacterValidatorDocument {
    fn from(validator: &CharacterValidator) -> Self {
        Self {
            rules: validator
                .rules
                .iter()
                .map(|rule| RuleDocument {
                    conditions: rule
                        .conditions
                        .iter()
                        .map(|c| {
                            DocumentEntry::Typed(ConditionDocument {
                                operator: c.operator.to_value(),
                                int_value1: c.int_value1,
                                int_value2: c.int_value2,
                                string_value: c.string_value.clone(),
                            })
                        })
                        .collect(),
                    action: rule.action.to_value(),
                    action_value: rule.action_value,
                })
                .map(DocumentEntry::Typed)
                .collect(),
            other_character_action: validator.other_character_action.to_value().into(),
            other_character_action_value: validator.other_character_action_value,
        }
    }
}

impl CharacterValidator {
    /// Parse and compile a JSON validator document
    pub fn from_json_str(json: &str) -> Result<CompiledValidator, ConfigError> {
        let document: CharacterValidatorDocument =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(document.compile())
    }

    /// Parse and compile a YAML validator document
    pub fn from_yaml_str(yaml: &str) -> Result<CompiledValidator, ConfigError> {
        let document: CharacterValidatorDocument =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(document.compile())
    }
}

/// Errors that make a whole document unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, e: std::io::Error) -> Self {
        ConfigError::Io(format!("{}: {}", path.display(), e))
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
