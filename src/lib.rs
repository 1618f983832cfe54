//! # arxml-graph
//!
//! Extraction of AUTOSAR software component compositions from ARXML into a
//! normalized component graph.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! format    → ARXML / JSON / YAML readers and writers
//!   ↓
//! extract   → Extractor, extraction passes, report
//!   ↓
//! model     → ArxmlGraph, Composition, Component, Port, interface catalog
//!   ↓
//! xml       → Namespace-aware element tree over quick-xml
//!   ↓
//! base      → Tag names, sentinels, reference path resolution
//! ```
//!
//! ## Quick Start
//!
//! ```
//! let input = br#"<AUTOSAR xmlns="http://autosar.org/schema/r4.0">
//!   <COMPOSITION-SW-COMPONENT-TYPE>
//!     <SHORT-NAME>Top</SHORT-NAME>
//!     <COMPONENTS>
//!       <SW-COMPONENT-PROTOTYPE>
//!         <SHORT-NAME>Sender</SHORT-NAME>
//!         <TYPE-TREF>/Types/SenderType</TYPE-TREF>
//!       </SW-COMPONENT-PROTOTYPE>
//!     </COMPONENTS>
//!   </COMPOSITION-SW-COMPONENT-TYPE>
//! </AUTOSAR>"#;
//!
//! let graph = arxml::parse_arxml(input)?;
//! assert_eq!(graph.composition.name, "Top");
//! assert_eq!(graph.component("Sender").unwrap().type_name, "SenderType");
//! # Ok::<(), arxml::ArxmlError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → model → extract → format)
// ============================================================================

/// Foundation: tag names, sentinels, reference paths
pub mod base;

/// Error types
pub mod error;

/// XML element tree
pub mod xml;

/// The component graph and interface catalog
pub mod model;

/// Extraction passes and the Extractor entry point
pub mod extract;

/// Graph formats: ARXML input, JSON and YAML documents
pub mod format;

// Re-export the extraction entry points
pub use extract::{ExtractOptions, ExtractionReport, Extractor, parse_arxml};

// Re-export error types
pub use error::{ArxmlError, ParseError};

// Re-export the graph model
pub use model::{
    ArxmlGraph, Component, Composition, Connection, Delegation, Port, PortDirection, PortInterface,
};
