//! Editable state of a single input field.
//!
//! - [`Selection`]: anchor/head pair in char offsets
//! - [`EditSession`]: text, selection and [`TextValidator`](crate::validation::TextValidator)
//!   between edits; every insertion goes through the validator
//!
//! # Example
//!
//! ```
//! use keybridge::editable::EditSession;
//! use keybridge::validation::{CharacterValidation, LineType, TextValidator};
//!
//! let mut session = EditSession::new(
//!     "",
//!     TextValidator::new(CharacterValidation::Name, LineType::SingleLine),
//! );
//! session.insert("john smith");
//!
//! assert_eq!(session.text(), "John Smith");
//! ```

mod selection;
mod session;

pub use selection::Selection;
pub use session::EditSession;
