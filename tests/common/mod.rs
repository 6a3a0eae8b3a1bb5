//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use keybridge::config::KeyboardConfiguration;
use keybridge::editable::Selection;
use keybridge::keyboard::KeyboardCallback;
use keybridge::validation::{
    CharacterAction, CharacterRule, CharacterValidation, CharacterValidator, LineType,
    TextValidator,
};

/// No validation, no limit, newlines kept
pub fn identity_validator() -> TextValidator {
    TextValidator::new(CharacterValidation::None, LineType::MultiLineNewline)
}

/// Custom-mode validator over `rules` with `default` for unmatched chars
pub fn custom_validator(rules: Vec<CharacterRule>, default: CharacterAction) -> TextValidator {
    TextValidator::custom(
        CharacterValidator::new(rules, default),
        LineType::MultiLineNewline,
    )
}

/// One dispatched notification, as seen by the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    Edit(String, Selection),
    Shown(String, Selection),
    Hidden,
}

/// Callback recording every dispatch in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub received: Vec<Received>,
}

impl KeyboardCallback for Recorder {
    fn on_text_edit_update(&mut self, text: &str, selection: Selection) {
        self.received.push(Received::Edit(text.to_string(), selection));
    }

    fn on_surface_shown(
        &mut self,
        text: &str,
        selection: Selection,
        _configuration: &KeyboardConfiguration,
    ) {
        self.received.push(Received::Shown(text.to_string(), selection));
    }

    fn on_surface_hidden(&mut self) {
        self.received.push(Received::Hidden);
    }
}
