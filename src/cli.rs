//! Command-line argument parsing for the keybridge driver
//!
//! Supports:
//! - Loading a keyboard configuration (JSON or YAML)
//! - Overriding validation mode, line type and character limit
//! - Seeding the field with initial text

use clap::Parser;
use std::path::PathBuf;

use crate::config::KeyboardConfiguration;
use crate::validation::{CharacterValidation, DocumentEnum, LineType};

/// Feed stdin through a validated input field and print the notifications
#[derive(Parser, Debug)]
#[command(
    name = "keybridge",
    version,
    about = "Validate typed text and print keyboard notifications"
)]
pub struct CliArgs {
    /// Keyboard configuration file (.json or .yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validation mode (e.g. integer, decimal, email_address, custom)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Line type (single_line, multi_line_submit, multi_line_newline)
    #[arg(short, long, value_name = "TYPE")]
    pub line_type: Option<String>,

    /// Maximum text length in chars (0 for unlimited)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Initial text of the field
    #[arg(short, long, default_value = "")]
    pub text: String,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Field configuration after overrides
    pub configuration: KeyboardConfiguration,
    /// Where the configuration came from, if a file was read
    pub config_path: Option<PathBuf>,
    pub initial_text: String,
}

fn parse_enum<T: DocumentEnum>(what: &str, value: &str) -> Result<T, String> {
    T::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = T::VARIANTS.iter().map(|v| v.document_name()).collect();
        format!("Unknown {} '{}' (expected one of: {})", what, value, names.join(", "))
    })
}

impl CliArgs {
    /// Load the configuration file and apply command-line overrides.
    ///
    /// Without `--config`, `~/.config/keybridge/keyboard.yaml` is used when it exists.
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let config_path = match self.config {
            Some(path) => Some(path),
            None => crate::config_paths::keyboard_config_file().filter(|path| path.exists()),
        };

        let mut configuration = match &config_path {
            Some(path) => KeyboardConfiguration::load(path).map_err(|e| e.to_string())?,
            None => KeyboardConfiguration::default(),
        };

        if let Some(mode) = &self.mode {
            configuration.character_validation =
                parse_enum::<CharacterValidation>("validation mode", mode)?;
        }
        if let Some(line_type) = &self.line_type {
            configuration.line_type = parse_enum::<LineType>("line type", line_type)?;
        }
        if let Some(limit) = self.limit {
            configuration.character_limit = limit;
        }

        Ok(StartupConfig {
            configuration,
            config_path,
            initial_text: self.text,
        })
    }
}
