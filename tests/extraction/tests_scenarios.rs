//! End-to-end extraction scenarios.

use arxml::{ArxmlGraph, PortDirection, PortInterface, parse_arxml};

use crate::helpers::fixtures::{NO_COMPOSITION, TWO_COMPONENTS, autosar, composition_of};

#[test]
fn test_minimal_two_component_wiring() {
    let graph = parse_arxml(TWO_COMPONENTS).expect("parses");

    assert_eq!(graph.composition.name, "Top");
    let sender = graph.component("Sender").expect("Sender");
    let receiver = graph.component("Receiver").expect("Receiver");
    assert_eq!(sender.type_name, "T1");
    assert_eq!(receiver.type_name, "T2");

    let out = &sender.ports["Out"];
    let input = &receiver.ports["In"];
    assert_eq!(out.connections.iter().map(ToString::to_string).collect::<Vec<_>>(), ["Receiver.In"]);
    assert_eq!(input.connections.iter().map(ToString::to_string).collect::<Vec<_>>(), ["Sender.Out"]);
    assert_eq!(out.direction, PortDirection::Provided);
    assert_eq!(input.direction, PortDirection::Required);
}

#[test]
fn test_missing_composition_yields_sentinel() {
    let graph = parse_arxml(NO_COMPOSITION).expect("parses");
    assert_eq!(graph.composition.name, "UNKNOWN_COMPOSITION");
    assert!(graph.composition.swcs.is_empty());
    assert_eq!(graph, ArxmlGraph::default());
}

#[test]
fn test_interface_less_port_is_unknown_but_connected() {
    // No component types or interfaces are declared: ports come only from the connector.
    let graph = parse_arxml(TWO_COMPONENTS).expect("parses");
    let out = graph.composition.port("Sender", "Out").expect("Out");

    assert_eq!(out.interface, PortInterface::Unknown);
    assert_eq!(out.interface.kind_name(), "Unknown");
    assert!(out.interface.data_elements().is_empty());
    assert!(out.interface.operations().is_empty());
    assert_eq!(out.connections.len(), 1);

    let json = serde_json::to_value(out).expect("serialize");
    assert_eq!(json["interfaceKind"], "Unknown");
    assert!(json.get("dataElements").is_none());
}

#[test]
fn test_composition_without_connectors_degrades_gracefully() {
    let graph = parse_arxml(&composition_of("Top", &["A", "B", "C"])).expect("parses");

    let names: Vec<_> = graph.composition.swcs.keys().map(String::as_str).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(graph.composition.swcs.values().all(|c| c.ports.is_empty()));
    assert!(graph.composition.swcs.values().all(|c| c.type_name == "UNKNOWN"));
}

#[test]
fn test_composition_without_short_name_uses_sentinel_name() {
    let input = autosar(
        "<COMPOSITION-SW-COMPONENT-TYPE><COMPONENTS>\
         <SW-COMPONENT-PROTOTYPE><SHORT-NAME>A</SHORT-NAME></SW-COMPONENT-PROTOTYPE>\
         </COMPONENTS></COMPOSITION-SW-COMPONENT-TYPE>",
    );
    let graph = parse_arxml(&input).expect("parses");
    assert_eq!(graph.composition.name, "UNKNOWN_COMPOSITION");
    assert!(graph.component("A").is_some());
}

#[test]
fn test_only_first_composition_is_extracted() {
    let input = autosar(
        "<COMPOSITION-SW-COMPONENT-TYPE><SHORT-NAME>First</SHORT-NAME><COMPONENTS>\
         <SW-COMPONENT-PROTOTYPE><SHORT-NAME>A</SHORT-NAME></SW-COMPONENT-PROTOTYPE>\
         </COMPONENTS></COMPOSITION-SW-COMPONENT-TYPE>\
         <COMPOSITION-SW-COMPONENT-TYPE><SHORT-NAME>Second</SHORT-NAME><COMPONENTS>\
         <SW-COMPONENT-PROTOTYPE><SHORT-NAME>B</SHORT-NAME></SW-COMPONENT-PROTOTYPE>\
         </COMPONENTS></COMPOSITION-SW-COMPONENT-TYPE>",
    );
    let graph = parse_arxml(&input).expect("parses");
    assert_eq!(graph.composition.name, "First");
    assert_eq!(graph.composition.swcs.len(), 1);
}

#[test]
fn test_malformed_input_is_distinguishable() {
    let inputs: [&[u8]; 4] = [b"", b"not xml", b"<AUTOSAR><A></B></AUTOSAR>", b"<AUTOSAR>"];
    for input in inputs {
        let err = parse_arxml(input).expect_err("malformed");
        assert!(err.is_parse_error(), "{err}");
    }
}

#[test]
fn test_foreign_namespace_yields_empty_graph() {
    let input = br#"<AUTOSAR xmlns="http://autosar.org/schema/r3.0">
        <COMPOSITION-SW-COMPONENT-TYPE><SHORT-NAME>Top</SHORT-NAME></COMPOSITION-SW-COMPONENT-TYPE>
    </AUTOSAR>"#;
    let graph = parse_arxml(input).expect("well formed");
    assert_eq!(graph, ArxmlGraph::default());
}
