//! Common trait for component graph formats.

use crate::error::ArxmlError;
use crate::model::ArxmlGraph;

/// Capabilities supported by a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Can produce a graph from input bytes.
    pub read: bool,
    /// Can serialize a graph.
    pub write: bool,
}

impl FormatCapability {
    /// Read and write.
    pub const FULL: Self = Self {
        read: true,
        write: true,
    };

    /// Read-only capability.
    pub const READ_ONLY: Self = Self {
        read: true,
        write: false,
    };
}

/// A file format a component graph can be read from or written to.
///
/// ARXML is a source format only: reading it runs the extraction passes.
/// The graph document formats (JSON, YAML) read and write the serialized
/// graph itself.
pub trait GraphFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    fn capabilities(&self) -> FormatCapability;

    /// Read a graph from bytes.
    fn read(&self, input: &[u8]) -> Result<ArxmlGraph, ArxmlError>;

    /// Write a graph to bytes.
    fn write(&self, graph: &ArxmlGraph) -> Result<Vec<u8>, ArxmlError>;

    /// Quick check that the input looks like this format, without a full read.
    fn validate(&self, input: &[u8]) -> Result<(), ArxmlError> {
        let _ = input;
        Ok(())
    }
}
