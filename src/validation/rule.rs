//! Character rules: a conjunction of conditions plus an action.

use std::str::FromStr;

use super::condition::CharacterCondition;
use super::context::CharContext;

/// Result of resolving one candidate character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOutcome {
    /// Character is accepted, possibly transformed
    Accept(char),
    /// Character is dropped
    Reject,
}

/// What happens to a character once a rule (or the default) applies.
///
/// Variant order matches the ordinals used by configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterAction {
    #[default]
    Allow,
    Block,
    ToUppercase,
    ToLowercase,
    Replace,
}

impl CharacterAction {
    pub const ALL: [CharacterAction; 5] = [
        CharacterAction::Allow,
        CharacterAction::Block,
        CharacterAction::ToUppercase,
        CharacterAction::ToLowercase,
        CharacterAction::Replace,
    ];

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterAction::Allow => "allow",
            CharacterAction::Block => "block",
            CharacterAction::ToUppercase => "to_uppercase",
            CharacterAction::ToLowercase => "to_lowercase",
            CharacterAction::Replace => "replace",
        }
    }

    /// Execute the action on `ch`.
    ///
    /// `value` is only read by [`CharacterAction::Replace`]; a value that is not a
    /// valid non-NUL scalar rejects the character.
    pub fn apply(&self, ch: char, value: i32) -> CharOutcome {
        match self {
            CharacterAction::Allow => CharOutcome::Accept(ch),
            CharacterAction::Block => CharOutcome::Reject,
            CharacterAction::ToUppercase => CharOutcome::Accept(to_upper(ch)),
            CharacterAction::ToLowercase => CharOutcome::Accept(to_lower(ch)),
            CharacterAction::Replace => match u32::try_from(value).ok().and_then(char::from_u32) {
                Some(replacement) if replacement != '\0' => CharOutcome::Accept(replacement),
                _ => CharOutcome::Reject,
            },
        }
    }
}

impl FromStr for CharacterAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "allow" => Ok(CharacterAction::Allow),
            "block" => Ok(CharacterAction::Block),
            "to_uppercase" | "uppercase" => Ok(CharacterAction::ToUppercase),
            "to_lowercase" | "lowercase" => Ok(CharacterAction::ToLowercase),
            "replace" => Ok(CharacterAction::Replace),
            _ => Err(()),
        }
    }
}

/// Upper-case `ch` when the mapping is a single character, otherwise keep it
pub(crate) fn to_upper(ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

/// Lower-case `ch` when the mapping is a single character, otherwise keep it
pub(crate) fn to_lower(ch: char) -> char {
    let mut mapped = ch.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

/// An ordered conjunction of conditions and the action taken when all hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRule {
    pub conditions: Vec<CharacterCondition>,
    pub action: CharacterAction,
    pub action_value: i32,
}

impl CharacterRule {
    pub fn new(conditions: Vec<CharacterCondition>, action: CharacterAction) -> Self {
        Self {
            conditions,
            action,
            action_value: 0,
        }
    }

    /// Rule replacing matching characters with `replacement`
    pub fn replace(conditions: Vec<CharacterCondition>, replacement: char) -> Self {
        Self {
            conditions,
            action: CharacterAction::Replace,
            action_value: replacement as i32,
        }
    }

    /// True when every condition holds. An empty rule matches everything.
    pub fn matches(&self, ch: char, ctx: &CharContext<'_>) -> bool {
        self.conditions.iter().all(|c| c.is_met(ch, ctx))
    }

    pub fn apply(&self, ch: char) -> CharOutcome {
        self.action.apply(ch, self.action_value)
    }
}
