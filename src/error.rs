//! Error types for extraction and graph interchange.

use thiserror::Error;

/// The input bytes are not a well-formed XML document.
///
/// This is the only condition under which extraction itself fails; every
/// other defect in the input degrades to a smaller graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("XML parse error at position {position}: {message}")]
pub struct ParseError {
    /// Byte offset into the input where the problem was detected.
    pub position: u64,
    /// Human-readable description.
    pub message: String,
}

impl ParseError {
    pub fn new(position: u64, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// Errors that can occur while extracting or serializing a component graph.
#[derive(Debug, Error)]
pub enum ArxmlError {
    /// Malformed XML input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Unsupported operation or format variant.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl ArxmlError {
    /// Create a parse error at the given byte offset.
    pub fn parse(position: u64, message: impl Into<String>) -> Self {
        Self::Parse(ParseError::new(position, message))
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// True if the input could not be parsed as XML at all.
    ///
    /// Callers use this to tell "parse failed" apart from every other failure;
    /// an empty or partial graph is never an error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
