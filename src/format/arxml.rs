//! ARXML source format.

use super::{FormatCapability, GraphFormat};
use crate::error::ArxmlError;
use crate::extract::{ExtractOptions, Extractor};
use crate::model::ArxmlGraph;

/// ARXML handler. Reading extracts the component graph; writing is not supported.
#[derive(Debug, Clone, Default)]
pub struct Arxml {
    extractor: Extractor,
}

impl Arxml {
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            extractor: Extractor::with_options(options),
        }
    }
}

impl GraphFormat for Arxml {
    fn name(&self) -> &'static str {
        "ARXML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["arxml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::READ_ONLY
    }

    fn read(&self, input: &[u8]) -> Result<ArxmlGraph, ArxmlError> {
        self.extractor.extract(input)
    }

    fn write(&self, graph: &ArxmlGraph) -> Result<Vec<u8>, ArxmlError> {
        let _ = graph;
        Err(ArxmlError::unsupported(
            "ARXML is an input format; write the graph as JSON or YAML",
        ))
    }

    fn validate(&self, input: &[u8]) -> Result<(), ArxmlError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| ArxmlError::parse(e.valid_up_to() as u64, format!("Invalid UTF-8: {e}")))?;

        if !content.contains("AUTOSAR") {
            return Err(ArxmlError::parse(0, "Missing AUTOSAR root element"));
        }

        Ok(())
    }
}
