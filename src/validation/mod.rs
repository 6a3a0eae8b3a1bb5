//! Rule-based character validation.
//!
//! Every character of a typed or pasted edit is resolved through a pipeline of
//! increasingly coarse pieces:
//!
//! - [`CharacterCondition`]: an atomic predicate over the candidate and its [`CharContext`]
//! - [`CharacterRule`]: a conjunction of conditions plus a [`CharacterAction`]
//! - [`CharacterValidator`]: ordered rules, first match wins, plus a default action
//! - [`TextValidator`]: applies a validation mode across a whole edit, tracking the
//!   working buffer, caret, selection and character limit
//!
//! Validators are usually built from a [`CharacterValidatorDocument`] received
//! from the host application; see [`document`].
//!
//! # Example
//!
//! ```
//! use keybridge::validation::{CharacterValidation, LineType, TextValidator};
//!
//! let validator = TextValidator::new(CharacterValidation::Decimal, LineType::SingleLine);
//! let result = validator.validate("12", ".5.6", 2, 2);
//!
//! assert_eq!(result.text, "12.56");
//! assert_eq!(result.caret_position, 5);
//! ```

mod condition;
mod context;
pub mod document;
pub mod presets;
mod rule;
mod text_validator;
mod validator;

pub(crate) use document::document_enum_serde;

pub use condition::{CharacterCondition, ConditionOperator};
pub use context::CharContext;
pub use document::{
    CharacterValidatorDocument, CompiledValidator, ConditionDocument, ConfigDiagnostic,
    ConfigError, DocumentEntry, DocumentEnum, EnumValue, RuleDocument,
};
pub use rule::{CharOutcome, CharacterAction, CharacterRule};
pub use text_validator::{CharacterValidation, LineType, TextValidator, ValidationResult};
pub use validator::CharacterValidator;
