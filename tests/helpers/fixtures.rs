//! ARXML fixtures shared by the integration tests.

use arxml::{ArxmlGraph, ExtractionReport, Extractor};
use once_cell::sync::Lazy;

pub const TWO_COMPONENTS: &[u8] = include_bytes!("../fixtures/two_components.arxml");
pub const BODY_CONTROL: &[u8] = include_bytes!("../fixtures/body_control.arxml");
pub const NO_COMPOSITION: &[u8] = include_bytes!("../fixtures/no_composition.arxml");

/// The body control fixture, extracted once.
pub static BODY_CONTROL_GRAPH: Lazy<(ArxmlGraph, ExtractionReport)> = Lazy::new(|| {
    Extractor::new()
        .extract_with_report(BODY_CONTROL)
        .expect("body control fixture parses")
});

/// Wrap `body` in an AUTOSAR root in the r4.0 namespace.
pub fn autosar(body: &str) -> Vec<u8> {
    format!(r#"<AUTOSAR xmlns="http://autosar.org/schema/r4.0">{body}</AUTOSAR>"#).into_bytes()
}

/// A composition with the given component names (no types) and no connectors.
pub fn composition_of(name: &str, components: &[&str]) -> Vec<u8> {
    let prototypes: String = components
        .iter()
        .map(|c| format!("<SW-COMPONENT-PROTOTYPE><SHORT-NAME>{c}</SHORT-NAME></SW-COMPONENT-PROTOTYPE>"))
        .collect();
    autosar(&format!(
        "<COMPOSITION-SW-COMPONENT-TYPE><SHORT-NAME>{name}</SHORT-NAME><COMPONENTS>{prototypes}</COMPONENTS></COMPOSITION-SW-COMPONENT-TYPE>"
    ))
}
