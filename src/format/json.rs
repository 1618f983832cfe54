//! JSON graph document format.
//!
//! ```json
//! {
//!   "composition": {
//!     "name": "Top",
//!     "swcs": {
//!       "Sender": {
//!         "type": "T1",
//!         "ports": {
//!           "Out": {
//!             "direction": "provided",
//!             "interfaceKind": "Sender-Receiver",
//!             "dataElements": ["Speed"],
//!             "connections": ["Receiver.In"]
//!           }
//!         },
//!         "delegations": []
//!       }
//!     }
//!   }
//! }
//! ```

use super::{FormatCapability, GraphFormat};
use crate::error::ArxmlError;
use crate::model::ArxmlGraph;

/// JSON format handler. Output is pretty-printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl GraphFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::FULL
    }

    fn read(&self, input: &[u8]) -> Result<ArxmlGraph, ArxmlError> {
        serde_json::from_slice(input).map_err(|e| ArxmlError::json(e.to_string()))
    }

    fn write(&self, graph: &ArxmlGraph) -> Result<Vec<u8>, ArxmlError> {
        serde_json::to_vec_pretty(graph).map_err(|e| ArxmlError::json(e.to_string()))
    }

    fn validate(&self, input: &[u8]) -> Result<(), ArxmlError> {
        serde_json::from_slice::<serde_json::Value>(input)
            .map(|_| ())
            .map_err(|e| ArxmlError::json(e.to_string()))
    }
}
