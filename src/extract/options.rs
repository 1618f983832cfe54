//! Extraction options

use crate::base::constants::{AUTOSAR_NAMESPACE, NVM_PORT_MARKER};

/// Options controlling ARXML extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Namespace URI every element query is matched against
    pub namespace: String,
    /// Ports whose name contains this substring are NvM service ports
    /// (an empty marker disables the classification)
    pub nvm_port_marker: String,
    /// Look for a port's declaration inside its component's own type before
    /// falling back to a document-wide search by name
    pub scope_port_lookup_to_component_type: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            namespace: AUTOSAR_NAMESPACE.to_string(),
            nvm_port_marker: NVM_PORT_MARKER.to_string(),
            scope_port_lookup_to_component_type: true,
        }
    }
}

impl ExtractOptions {
    /// True if `port_name` carries the NvM marker
    pub fn is_nvm_port(&self, port_name: &str) -> bool {
        !self.nvm_port_marker.is_empty() && port_name.contains(self.nvm_port_marker.as_str())
    }
}
