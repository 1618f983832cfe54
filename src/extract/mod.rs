//! ARXML composition extraction.
//!
//! [`Extractor`] turns one ARXML document into an [`ArxmlGraph`]. The work is
//! a fixed sequence of passes over a parsed [`XmlDocument`]:
//!
//! ```text
//! components ─► interface catalog ─► declared ports ─► connectors
//!                                                          │
//!                        assemble ◄─ delegations ◄─ interface binding
//! ```
//!
//! Connectors run before interface binding so that ports created from a
//! connector endpoint are bound as well. Records the passes cannot resolve
//! are dropped and listed in the [`ExtractionReport`]; only malformed XML
//! fails the extraction.
//!
//! ## Example
//!
//! ```
//! use arxml::Extractor;
//!
//! let input = br#"<AUTOSAR xmlns="http://autosar.org/schema/r4.0">
//!   <COMPOSITION-SW-COMPONENT-TYPE><SHORT-NAME>Top</SHORT-NAME></COMPOSITION-SW-COMPONENT-TYPE>
//! </AUTOSAR>"#;
//! let graph = Extractor::new().extract(input).unwrap();
//! assert_eq!(graph.composition.name, "Top");
//! ```

mod assemble;
mod components;
mod connectors;
mod delegations;
mod index;
mod interfaces;
mod options;
mod ports;
mod report;

pub use options::ExtractOptions;
pub use report::{ExtractionReport, Pass, SkipReason, SkippedRecord};

use std::path::Path;

use rayon::prelude::*;

use crate::error::ArxmlError;
use crate::model::ArxmlGraph;
use crate::xml::{XmlDocument, parse_document};

use self::index::DeclarationIndex;
use self::ports::PortBinder;

/// Extract the component graph from an ARXML document with default options.
pub fn parse_arxml(input: &[u8]) -> Result<ArxmlGraph, ArxmlError> {
    Extractor::new().extract(input)
}

/// Runs the extraction passes.
///
/// The extractor holds only its options; every call builds its own document
/// and graph, so one extractor can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parse `input` and extract its component graph.
    pub fn extract(&self, input: &[u8]) -> Result<ArxmlGraph, ArxmlError> {
        self.extract_with_report(input).map(|(graph, _)| graph)
    }

    /// Like [`Extractor::extract`], also returning what each pass skipped.
    pub fn extract_with_report(
        &self,
        input: &[u8],
    ) -> Result<(ArxmlGraph, ExtractionReport), ArxmlError> {
        let doc = parse_document(input, &self.options.namespace).map_err(|err| {
            tracing::warn!(position = err.position, "failed to parse ARXML: {}", err.message);
            err
        })?;
        Ok(self.extract_document(&doc))
    }

    /// Run the passes over an already parsed document.
    pub fn extract_document(&self, doc: &XmlDocument) -> (ArxmlGraph, ExtractionReport) {
        let mut report = ExtractionReport::new();

        let composition = components::find_composition(doc);
        let mut swcs = components::extract_components(composition, &mut report);

        let catalog = interfaces::build_catalog(doc, &mut report);
        let index = DeclarationIndex::build(doc);
        ports::discover_declared_ports(&index, &mut swcs, &mut report);

        if let Some(composition) = composition {
            connectors::resolve_connectors(composition, &mut swcs, &mut report);
        }

        PortBinder::new(catalog, &self.options).bind(&index, &mut swcs, &mut report);

        if let Some(composition) = composition {
            delegations::resolve_delegations(composition, &mut swcs, &mut report);
        }

        let graph = assemble::assemble(composition.and_then(|c| c.short_name()), swcs);

        tracing::debug!(
            composition = %graph.composition.name,
            components = report.components,
            interfaces = report.interfaces,
            connectors = report.connectors,
            delegations = report.delegations,
            skipped = report.skipped.len(),
            "extracted component graph"
        );

        (graph, report)
    }

    /// Read and extract a file.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<ArxmlGraph, ArxmlError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading ARXML file");
        let input = std::fs::read(path)?;
        self.extract(&input)
    }

    /// Extract many documents in parallel. Results keep the input order.
    pub fn extract_batch<I>(&self, inputs: &[I]) -> Vec<Result<ArxmlGraph, ArxmlError>>
    where
        I: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.extract(input.as_ref()))
            .collect()
    }
}
