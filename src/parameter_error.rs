//! Error handling for configuration loading and validation.

use std::io;

/// Unified error to report failures while loading or validating platform configurations.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    /// A configuration with non-physical values (rod length <= 0, inverted servo
    /// travel limits, ...). Rejected at load time, never at solve time.
    InvalidConfiguration(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::InvalidConfiguration(ref msg) =>
                write!(f, "Invalid Configuration: {}", msg),
        }
    }
}

impl std::error::Error for ParameterError {}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
