//! Keyboard configuration documents
//!
//! The host application describes each input field with one document sent when
//! the keyboard is shown. Documents are JSON on the wire; the CLI also reads
//! them from `~/.config/keybridge/keyboard.yaml`.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::{
    document_enum_serde, CharacterValidation, CharacterValidatorDocument, ConfigDiagnostic,
    ConfigError, DocumentEnum, EnumValue, LineType, TextValidator,
};

/// Declare a closed document enum with its snake_case names, in ordinal order
macro_rules! keyboard_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $doc_name:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "EnumValue", into = "EnumValue")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl DocumentEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn document_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $doc_name),+
                }
            }
        }

        document_enum_serde!($name);
    };
}

keyboard_enum! {
    /// Layout of the on-screen keyboard
    pub enum KeyboardType {
        Default => "default",
        AsciiCapable => "ascii_capable",
        DecimalPad => "decimal_pad",
        Url => "url",
        NumberPad => "number_pad",
        PhonePad => "phone_pad",
        EmailAddress => "email_address",
        NumbersAndPunctuation => "numbers_and_punctuation",
    }
}

keyboard_enum! {
    pub enum AutocapitalizationType {
        None => "none",
        Characters => "characters",
        Words => "words",
        Sentences => "sentences",
    }
}

keyboard_enum! {
    /// Kind of content the platform may offer to autofill
    pub enum AutofillType {
        None => "none",
        Username => "username",
        Password => "password",
        NewPassword => "new_password",
        OneTimeCode => "one_time_code",
        Name => "name",
        GivenName => "given_name",
        MiddleName => "middle_name",
        FamilyName => "family_name",
        Location => "location",
        FullStreetAddress => "full_street_address",
        StreetAddressLine1 => "street_address_line1",
        StreetAddressLine2 => "street_address_line2",
        AddressCity => "address_city",
        AddressState => "address_state",
        AddressCityAndState => "address_city_and_state",
        CountryName => "country_name",
        PostalCode => "postal_code",
        TelephoneNumber => "telephone_number",
    }
}

keyboard_enum! {
    pub enum ReturnKeyType {
        Default => "default",
        Go => "go",
        Send => "send",
        Search => "search",
    }
}

/// Everything the host sends when it asks for the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardConfiguration {
    pub keyboard_type: KeyboardType,
    #[serde(alias = "validationMode")]
    pub character_validation: CharacterValidation,
    pub line_type: LineType,
    pub autocapitalization_type: AutocapitalizationType,
    pub autofill_type: AutofillType,
    pub return_key_type: ReturnKeyType,
    pub autocorrection: bool,
    pub secure: bool,
    pub rich_text_editing: bool,
    pub emojis_allowed: bool,
    pub has_next: bool,
    /// Maximum text length in chars, `0` for unlimited
    pub character_limit: usize,
    /// Rules for [`CharacterValidation::Custom`], inline or as an encoded JSON string
    #[serde(
        alias = "characterValidatorJSON",
        deserialize_with = "deserialize_validator",
        skip_serializing_if = "Option::is_none"
    )]
    pub character_validator: Option<CharacterValidatorDocument>,
}

impl Default for KeyboardConfiguration {
    fn default() -> Self {
        Self {
            keyboard_type: KeyboardType::default(),
            character_validation: CharacterValidation::default(),
            line_type: LineType::default(),
            autocapitalization_type: AutocapitalizationType::default(),
            autofill_type: AutofillType::default(),
            return_key_type: ReturnKeyType::default(),
            autocorrection: false,
            secure: false,
            rich_text_editing: false,
            emojis_allowed: true,
            has_next: false,
            character_limit: 0,
            character_validator: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValidatorField {
    Inline(CharacterValidatorDocument),
    Encoded(String),
}

fn deserialize_validator<'de, D>(
    deserializer: D,
) -> Result<Option<CharacterValidatorDocument>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<ValidatorField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(ValidatorField::Inline(document)) => Ok(Some(document)),
        Some(ValidatorField::Encoded(json)) if json.trim().is_empty() => Ok(None),
        Some(ValidatorField::Encoded(json)) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("characterValidatorJSON: {}", e))),
    }
}

impl KeyboardConfiguration {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration file, picking the format from its extension
    /// (`.json`, anything else is read as YAML)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::info!("Loaded keyboard configuration from {}", path.display());
        Ok(config)
    }

    /// Build the edit transaction for this field.
    ///
    /// Diagnostics from compiling the custom validator are returned alongside;
    /// the malformed entries are already left out of the validator.
    pub fn text_validator(&self) -> (TextValidator, Vec<ConfigDiagnostic>) {
        let (validator, diagnostics) = match &self.character_validator {
            Some(document) => {
                let compiled = document.compile();
                (Some(compiled.validator), compiled.diagnostics)
            }
            None => (None, Vec::new()),
        };

        if validator.is_some() && self.character_validation != CharacterValidation::Custom {
            tracing::debug!(
                "characterValidator ignored for validation mode {}",
                self.character_validation.name()
            );
        }

        let text_validator = TextValidator {
            validator,
            emojis_allowed: self.emojis_allowed,
            ..TextValidator::new(self.character_validation, self.line_type)
        }
        .with_character_limit(self.character_limit);

        (text_validator, diagnostics)
    }
}
