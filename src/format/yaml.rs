//! YAML graph document format.
//!
//! Same structure as the JSON document, in YAML syntax.

use super::{FormatCapability, GraphFormat};
use crate::error::ArxmlError;
use crate::model::ArxmlGraph;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl GraphFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::FULL
    }

    fn read(&self, input: &[u8]) -> Result<ArxmlGraph, ArxmlError> {
        serde_yaml::from_slice(input).map_err(|e| ArxmlError::yaml(e.to_string()))
    }

    fn write(&self, graph: &ArxmlGraph) -> Result<Vec<u8>, ArxmlError> {
        serde_yaml::to_string(graph)
            .map(String::into_bytes)
            .map_err(|e| ArxmlError::yaml(e.to_string()))
    }

    fn validate(&self, input: &[u8]) -> Result<(), ArxmlError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| ArxmlError::yaml(format!("Invalid UTF-8: {e}")))?;
        serde_yaml::from_str::<serde_yaml::Value>(content)
            .map(|_| ())
            .map_err(|e| ArxmlError::yaml(e.to_string()))
    }
}
