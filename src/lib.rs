//! keybridge - text input validation and event delivery for native keyboards
//!
//! This crate provides the rule-based character validation engine that filters
//! every typed or pasted character of an input field, and the thread-safe
//! channel that carries edit and visibility notifications from the input
//! surface to a consumer polling once per tick.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keyboard;
pub mod tracing;
pub mod validation;

// Re-export commonly used types
pub use config::KeyboardConfiguration;
pub use editable::{EditSession, Selection};
pub use keyboard::{Event, KeyboardBridge, KeyboardCallback, KeyboardProducer, ThreadsafeQueue};
pub use validation::{CharacterValidator, TextValidator, ValidationResult};
