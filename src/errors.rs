use std::error;
use std::fmt;

/// Errors raised while loading or unloading a model.
///
/// Only unrecoverable resource-acquisition failures are reported this way;
/// all recoverable runtime conditions use boolean returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The shared random source is already owned by another loaded model.
    RngUnavailable,
    /// The engine context exposes no species modules.
    NoSpecies,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RngUnavailable => {
                write!(f, "Random source unavailable: already acquired by a loaded model")
            }
            Self::NoSpecies => write!(f, "Engine context provides no species modules"),
        }
    }
}

impl error::Error for ModelError {}

/// Errors that can occur when parsing configuration option values.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionError {
    /// The value could not be parsed as a number
    InvalidNumber { option: &'static str, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { option, value } => {
                write!(f, "Invalid value for --{option}: '{value}'")
            }
        }
    }
}

impl error::Error for OptionError {}
