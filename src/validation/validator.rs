//! Character validator: first-match-wins resolution over an ordered rule list.

use super::context::CharContext;
use super::rule::{CharOutcome, CharacterAction, CharacterRule};

/// Ordered rules plus the action applied to characters no rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterValidator {
    pub rules: Vec<CharacterRule>,
    pub other_character_action: CharacterAction,
    pub other_character_action_value: i32,
}

impl CharacterValidator {
    pub fn new(rules: Vec<CharacterRule>, other_character_action: CharacterAction) -> Self {
        Self {
            rules,
            other_character_action,
            other_character_action_value: 0,
        }
    }

    /// Resolve `ch` with the first matching rule, or the default action
    pub fn resolve(&self, ch: char, ctx: &CharContext<'_>) -> CharOutcome {
        match self.rules.iter().position(|rule| rule.matches(ch, ctx)) {
            Some(index) => {
                let outcome = self.rules[index].apply(ch);
                tracing::trace!("rule #{} matched {:?} -> {:?}", index, ch, outcome);
                outcome
            }
            None => self
                .other_character_action
                .apply(ch, self.other_character_action_value),
        }
    }

    /// Resolve a character as if it were typed at the end of `text`
    pub fn resolve_standalone(&self, ch: char, text: &str) -> CharOutcome {
        let buffer: Vec<char> = text.chars().collect();
        self.resolve(ch, &CharContext::at_end_of(&buffer))
    }
}
