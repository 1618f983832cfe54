use indexmap::IndexMap;

use crate::base::constants::UNKNOWN_COMPOSITION;
use crate::model::{ArxmlGraph, Component, Composition};

/// Build the output graph.
///
/// The shape is the same whatever sections the document had: a composition
/// name (the sentinel when there was no composition) and a possibly empty
/// component map.
pub(crate) fn assemble(name: Option<&str>, swcs: IndexMap<String, Component>) -> ArxmlGraph {
    ArxmlGraph::new(Composition {
        name: name.unwrap_or(UNKNOWN_COMPOSITION).to_string(),
        swcs,
    })
}
