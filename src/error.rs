//! Error types shared by the generator core and its front-ends.

use std::fmt;

use thiserror::Error;

/// Why an alphabet came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortfall {
    /// No character class is enabled.
    NoClassSelected,
    /// Classes are enabled but filtering left nothing to draw from.
    FilteredOut,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::NoClassSelected => write!(f, "Select at least one character type"),
            Shortfall::FilteredOut => write!(
                f,
                "No characters left after filtering, reduce filtering or enable another type"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{0}")]
    EmptyAlphabet(Shortfall),
    #[error("Password length {length} is outside {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("No template at index {0}")]
    UnknownIndex(usize),
    #[error("No template named '{0}'")]
    UnknownName(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Clipboard error: {0}")]
pub struct ClipboardError(pub String);
