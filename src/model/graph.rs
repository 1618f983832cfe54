//! The extracted component graph.
//!
//! ```text
//! ArxmlGraph
//! └── Composition (name)
//!     └── swcs: IndexMap<name, Component>
//!         ├── ports: IndexMap<name, Port>
//!         │   └── connections: Vec<Connection>   ("Peer.port" relations)
//!         └── delegations: Vec<Delegation>
//! ```
//!
//! Connections and delegations are name-based relations, never references,
//! so the structure is a plain ownership tree. The serde representation is the
//! wire shape handed to consumers; maps keep document order.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::interface::InterfaceContract;
use crate::base::constants::UNKNOWN_COMPOSITION;

// ============================================================================
// ROOT
// ============================================================================

/// Result of extracting one ARXML document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxmlGraph {
    pub composition: Composition,
}

impl ArxmlGraph {
    pub fn new(composition: Composition) -> Self {
        Self { composition }
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.composition.swcs.get(name)
    }
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// The top-level container of components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub name: String,
    pub swcs: IndexMap<String, Component>,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new(UNKNOWN_COMPOSITION)
    }
}

impl Composition {
    /// Create an empty composition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            swcs: IndexMap::new(),
        }
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.swcs.get(name)
    }

    /// Look up a port by owning component and port name.
    pub fn port(&self, component: &str, port: &str) -> Option<&Port> {
        self.swcs.get(component)?.ports.get(port)
    }

    /// Every connector edge once, seen from its provided side.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.swcs.iter().flat_map(|(component, swc)| {
            swc.ports
                .iter()
                .filter(|(_, port)| port.direction == PortDirection::Provided)
                .flat_map(move |(port_name, port)| {
                    port.connections.iter().map(move |peer| Edge {
                        provider_component: component,
                        provider_port: port_name,
                        requester_component: &peer.component,
                        requester_port: &peer.port,
                    })
                })
        })
    }

    /// Count the graph's contents.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            components: self.swcs.len(),
            ..GraphStats::default()
        };
        for swc in self.swcs.values() {
            stats.ports += swc.ports.len();
            stats.delegations += swc.delegations.len();
            stats.connections += swc.ports.values().map(|p| p.connections.len()).sum::<usize>();
        }
        stats
    }
}

/// A resolved connector seen from the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    pub provider_component: &'a str,
    pub provider_port: &'a str,
    pub requester_component: &'a str,
    pub requester_port: &'a str,
}

/// Summary counts over a composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub components: usize,
    pub ports: usize,
    /// Connection records (two per resolved connector).
    pub connections: usize,
    pub delegations: usize,
}

// ============================================================================
// COMPONENT
// ============================================================================

/// A software component prototype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Short name of the component type, or `UNKNOWN`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub ports: IndexMap<String, Port>,
    pub delegations: Vec<Delegation>,
}

impl Component {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ports: IndexMap::new(),
            delegations: Vec::new(),
        }
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.get(name)
    }

    /// Get a port, creating a placeholder with `direction` if it is not known yet.
    ///
    /// An existing port keeps its direction.
    pub fn ensure_port(&mut self, name: &str, direction: PortDirection) -> &mut Port {
        self.ports
            .entry(name.to_string())
            .or_insert_with(|| Port::new(direction))
    }
}

// ============================================================================
// PORT
// ============================================================================

/// P-Port / R-Port distinction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Provided,
    Required,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Provided => "provided",
            PortDirection::Required => "required",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The interface a port implements, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "interfaceKind")]
pub enum PortInterface {
    #[serde(rename = "Sender-Receiver")]
    SenderReceiver {
        #[serde(rename = "dataElements")]
        data_elements: Vec<String>,
    },
    #[serde(rename = "Client-Server")]
    ClientServer { operations: Vec<String> },
    /// NvM service port, classified by name only.
    #[serde(rename = "NvM")]
    NvmService,
    Unknown,
}

impl PortInterface {
    /// The serialized `interfaceKind` string.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PortInterface::SenderReceiver { .. } => "Sender-Receiver",
            PortInterface::ClientServer { .. } => "Client-Server",
            PortInterface::NvmService => "NvM",
            PortInterface::Unknown => "Unknown",
        }
    }

    pub fn data_elements(&self) -> &[String] {
        match self {
            PortInterface::SenderReceiver { data_elements } => data_elements,
            _ => &[],
        }
    }

    pub fn operations(&self) -> &[String] {
        match self {
            PortInterface::ClientServer { operations } => operations,
            _ => &[],
        }
    }
}

impl From<InterfaceContract> for PortInterface {
    fn from(contract: InterfaceContract) -> Self {
        match contract {
            InterfaceContract::SenderReceiver { data_elements } => {
                PortInterface::SenderReceiver { data_elements }
            }
            InterfaceContract::ClientServer { operations } => {
                PortInterface::ClientServer { operations }
            }
        }
    }
}

/// A named interaction point on a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub direction: PortDirection,
    #[serde(flatten)]
    pub interface: PortInterface,
    pub connections: Vec<Connection>,
}

impl Port {
    /// A port with no resolved interface and no connections.
    pub fn new(direction: PortDirection) -> Self {
        Self {
            direction,
            interface: PortInterface::Unknown,
            connections: Vec::new(),
        }
    }
}

// ============================================================================
// RELATIONS
// ============================================================================

/// The other endpoint of a resolved connector, relative to the owning port.
///
/// Serialized as `"<peerComponent>.<peerPort>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
    pub component: String,
    pub port: String,
}

impl Connection {
    pub fn new(component: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.port)
    }
}

impl FromStr for Connection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((component, port)) if !component.is_empty() && !port.is_empty() => {
                Ok(Connection::new(component, port))
            }
            _ => Err(format!("expected \"<component>.<port>\", got {s:?}")),
        }
    }
}

impl Serialize for Connection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Connection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An inner component port exposed as a port of the enclosing composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub inner_port: String,
    pub outer_port: String,
    pub direction: PortDirection,
}
