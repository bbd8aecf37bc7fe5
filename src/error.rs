//! Resolver error types

use thiserror::Error;

/// Why an input could not be resolved to a subnet.
///
/// All variants are ordinary user-input failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid mask: {0}")]
    InvalidMask(String),
}

impl ParseError {
    /// Short stable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MalformedInput(_) => "MalformedInput",
            ParseError::InvalidAddress(_) => "InvalidAddress",
            ParseError::InvalidMask(_) => "InvalidMask",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ParseError::MalformedInput(reason)
            | ParseError::InvalidAddress(reason)
            | ParseError::InvalidMask(reason) => reason,
        }
    }
}
