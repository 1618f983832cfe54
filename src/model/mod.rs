//! Extraction result types.
//!
//! [`ArxmlGraph`] is the only structure consumers see: renderers and service
//! wrappers read its fields (or its serialized form) and nothing else.
//! [`InterfaceCatalog`] is an intermediate product of extraction.

mod graph;
mod interface;

pub use graph::{
    ArxmlGraph, Component, Composition, Connection, Delegation, Edge, GraphStats, Port,
    PortDirection, PortInterface,
};
pub use interface::{Interface, InterfaceCatalog, InterfaceContract};
