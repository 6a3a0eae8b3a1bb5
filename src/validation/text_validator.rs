//! Text edit transaction: applies a validation mode across a whole insertion.

use serde::{Deserialize, Serialize};

use super::context::CharContext;
use super::document::{document_enum_serde, DocumentEnum, EnumValue};
use super::presets::{self, DecimalSeparator};
use super::rule::CharOutcome;
use super::validator::CharacterValidator;

/// Built-in validation modes.
///
/// Variant order matches the ordinals used by configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "EnumValue", into = "EnumValue")]
pub enum CharacterValidation {
    #[default]
    None,
    Integer,
    Decimal,
    Alphanumeric,
    Name,
    EmailAddress,
    IpAddress,
    Sentence,
    Custom,
    DecimalForcePoint,
}

impl CharacterValidation {
    pub const ALL: [CharacterValidation; 10] = [
        CharacterValidation::None,
        CharacterValidation::Integer,
        CharacterValidation::Decimal,
        CharacterValidation::Alphanumeric,
        CharacterValidation::Name,
        CharacterValidation::EmailAddress,
        CharacterValidation::IpAddress,
        CharacterValidation::Sentence,
        CharacterValidation::Custom,
        CharacterValidation::DecimalForcePoint,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterValidation::None => "none",
            CharacterValidation::Integer => "integer",
            CharacterValidation::Decimal => "decimal",
            CharacterValidation::Alphanumeric => "alphanumeric",
            CharacterValidation::Name => "name",
            CharacterValidation::EmailAddress => "email_address",
            CharacterValidation::IpAddress => "ip_address",
            CharacterValidation::Sentence => "sentence",
            CharacterValidation::Custom => "custom",
            CharacterValidation::DecimalForcePoint => "decimal_force_point",
        }
    }
}

impl DocumentEnum for CharacterValidation {
    const VARIANTS: &'static [Self] = &CharacterValidation::ALL;

    fn document_name(&self) -> &'static str {
        self.name()
    }
}

/// How newline characters in the inserted text are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "EnumValue", into = "EnumValue")]
pub enum LineType {
    /// Newlines are dropped
    #[default]
    SingleLine,
    /// A newline requests submission and ends the operation
    MultiLineSubmit,
    /// Newlines are inserted like any other character
    MultiLineNewline,
}

impl LineType {
    pub const ALL: [LineType; 3] = [
        LineType::SingleLine,
        LineType::MultiLineSubmit,
        LineType::MultiLineNewline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LineType::SingleLine => "single_line",
            LineType::MultiLineSubmit => "multi_line_submit",
            LineType::MultiLineNewline => "multi_line_newline",
        }
    }
}

impl DocumentEnum for LineType {
    const VARIANTS: &'static [Self] = &LineType::ALL;

    fn document_name(&self) -> &'static str {
        self.name()
    }
}

document_enum_serde!(CharacterValidation, LineType);

fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Pictographs, dingbats, regional indicators and the joiners that glue them
fn is_emoji(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x1F000..=0x1FAFF | 0xFE00..=0xFE0F | 0x200D
    )
}

/// Outcome of one edit transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Committed text
    pub text: String,
    /// Caret after the last accepted character
    pub caret_position: usize,
    /// Number of characters inserted
    pub accepted: usize,
    /// A submit newline was typed (multi-line-submit only)
    pub submit_requested: bool,
}

/// Validation mode, line type and character limit of one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValidator {
    pub validation: CharacterValidation,
    pub line_type: LineType,
    /// Maximum length in chars; `None` means unlimited
    pub character_limit: Option<usize>,
    /// Rules used by [`CharacterValidation::Custom`]
    pub validator: Option<CharacterValidator>,
    /// When false, emoji are dropped before mode resolution
    pub emojis_allowed: bool,
}

impl Default for TextValidator {
    fn default() -> Self {
        Self::new(CharacterValidation::None, LineType::SingleLine)
    }
}

impl TextValidator {
    pub fn new(validation: CharacterValidation, line_type: LineType) -> Self {
        Self {
            validation,
            line_type,
            character_limit: None,
            validator: None,
            emojis_allowed: true,
        }
    }

    /// Custom mode driven by `validator`
    pub fn custom(validator: CharacterValidator, line_type: LineType) -> Self {
        Self {
            validator: Some(validator),
            ..Self::new(CharacterValidation::Custom, line_type)
        }
    }

    /// Set the character limit; `0` removes it
    pub fn with_character_limit(mut self, limit: usize) -> Self {
        self.character_limit = (limit > 0).then_some(limit);
        self
    }

    /// Resolve one candidate under the line type and validation mode
    pub fn resolve_char(&self, ch: char, ctx: &CharContext<'_>) -> CharOutcome {
        if is_newline(ch) && self.line_type != LineType::MultiLineNewline {
            return CharOutcome::Reject;
        }
        if !self.emojis_allowed && is_emoji(ch) {
            return CharOutcome::Reject;
        }

        match self.validation {
            CharacterValidation::None => CharOutcome::Accept(ch),
            CharacterValidation::Custom => match &self.validator {
                Some(validator) => validator.resolve(ch, ctx),
                None => CharOutcome::Accept(ch),
            },
            CharacterValidation::Integer => presets::number(ch, ctx, DecimalSeparator::None),
            CharacterValidation::Decimal => {
                presets::number(ch, ctx, DecimalSeparator::PointOrComma)
            }
            CharacterValidation::DecimalForcePoint => {
                presets::number(ch, ctx, DecimalSeparator::ForcePoint)
            }
            CharacterValidation::Alphanumeric => presets::alphanumeric(ch),
            CharacterValidation::Name => presets::name(ch, ctx),
            CharacterValidation::EmailAddress => presets::email_address(ch, ctx),
            CharacterValidation::IpAddress => presets::ip_address(ch, ctx),
            CharacterValidation::Sentence => presets::sentence(ch, ctx),
        }
    }

    /// Insert `text_to_insert` into `current_text`, replacing the span between
    /// `selection_start` and `caret_position` when it is non-empty.
    ///
    /// Every character is resolved against the working buffer as it stands at
    /// that moment, so characters accepted earlier in the same call are visible
    /// to later ones. Rejected characters are dropped and never fail the edit.
    pub fn validate(
        &self,
        current_text: &str,
        text_to_insert: &str,
        caret_position: usize,
        selection_start: usize,
    ) -> ValidationResult {
        let chars: Vec<char> = current_text.chars().collect();
        let caret = caret_position.min(chars.len());
        let selection_start = selection_start.min(chars.len());
        let insertion_point = if selection_start < caret {
            selection_start
        } else {
            caret
        };

        let mut before: Vec<char> = chars[..insertion_point].to_vec();
        let after = &chars[caret..];
        let mut accepted = 0;
        let mut submit_requested = false;

        for (index, ch) in text_to_insert.chars().enumerate() {
            if self.line_type == LineType::MultiLineSubmit && is_newline(ch) {
                // Rest of the operation is discarded
                submit_requested = true;
                break;
            }

            if let Some(limit) = self.character_limit {
                if before.len() + after.len() >= limit {
                    tracing::trace!("character limit {} reached, dropping {:?}", limit, ch);
                    continue;
                }
            }

            let ctx = CharContext {
                before: &before,
                after,
                index_in_operation: index,
                caret_position: caret,
                selection_start,
            };
            if let CharOutcome::Accept(resolved) = self.resolve_char(ch, &ctx) {
                before.push(resolved);
                accepted += 1;
            }
        }

        let caret_position = before.len();
        let text: String = before.iter().chain(after.iter()).collect();

        tracing::debug!(
            "validated edit: {} of {} chars accepted, caret {}, submit {}",
            accepted,
            text_to_insert.chars().count(),
            caret_position,
            submit_requested
        );

        ValidationResult {
            text,
            caret_position,
            accepted,
            submit_requested,
        }
    }
}
