//! Properties that hold for every extracted graph.

use std::collections::HashSet;

use arxml::{Connection, Extractor, PortDirection, parse_arxml};

use crate::helpers::fixtures::{BODY_CONTROL, BODY_CONTROL_GRAPH, TWO_COMPONENTS};

#[test]
fn test_extraction_is_deterministic() {
    for input in [TWO_COMPONENTS, BODY_CONTROL] {
        let first = serde_json::to_vec(&parse_arxml(input).expect("parses")).expect("serialize");
        let second = serde_json::to_vec(&parse_arxml(input).expect("parses")).expect("serialize");
        assert_eq!(first, second);
    }
}

#[test]
fn test_connections_are_symmetric() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;

    for (name, swc) in &composition.swcs {
        for (port_name, port) in &swc.ports {
            for peer in &port.connections {
                let back = composition
                    .port(&peer.component, &peer.port)
                    .unwrap_or_else(|| panic!("{peer} does not exist"));
                assert!(
                    back.connections.contains(&Connection::new(name.as_str(), port_name.as_str())),
                    "{peer} does not point back at {name}.{port_name}"
                );
            }
        }
    }
}

#[test]
fn test_connections_run_between_opposite_directions() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;
    for edge in composition.edges() {
        let requester = composition
            .port(edge.requester_component, edge.requester_port)
            .expect("requester port");
        assert_eq!(requester.direction, PortDirection::Required);
    }
}

#[test]
fn test_component_names_are_unique() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;
    let unique: HashSet<_> = composition.swcs.keys().collect();
    assert_eq!(unique.len(), composition.swcs.len());
}

#[test]
fn test_batch_matches_sequential_extraction() {
    let inputs = [TWO_COMPONENTS, BODY_CONTROL, TWO_COMPONENTS];
    let extractor = Extractor::new();

    let batch = extractor.extract_batch(&inputs);
    for (input, result) in inputs.iter().zip(batch) {
        assert_eq!(result.expect("parses"), extractor.extract(input).expect("parses"));
    }
}
