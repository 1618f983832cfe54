//! A fuller composition: declared ports, both interface kinds, NvM ports,
//! placeholder ports, delegations and records that cannot be resolved.

use arxml::extract::{Pass, SkipReason};
use arxml::model::GraphStats;
use arxml::{Delegation, PortDirection, PortInterface};

use crate::helpers::fixtures::BODY_CONTROL_GRAPH;

fn peers(component: &str, port: &str) -> Vec<String> {
    BODY_CONTROL_GRAPH
        .0
        .composition
        .port(component, port)
        .unwrap_or_else(|| panic!("{component}.{port} missing"))
        .connections
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_components_and_types() {
    let graph = &BODY_CONTROL_GRAPH.0;
    assert_eq!(graph.composition.name, "BodyControl");

    let types: Vec<_> = graph
        .composition
        .swcs
        .iter()
        .map(|(name, swc)| (name.as_str(), swc.type_name.as_str()))
        .collect();
    assert_eq!(
        types,
        [
            ("Sender", "SenderType"),
            ("Receiver", "ReceiverType"),
            ("Logger", "UNKNOWN")
        ]
    );
}

#[test]
fn test_declared_ports_come_first_in_declaration_order() {
    let sender = BODY_CONTROL_GRAPH.0.component("Sender").expect("Sender");
    let ports: Vec<_> = sender.ports.keys().map(String::as_str).collect();
    assert_eq!(ports, ["Out", "Diag", "PS_NvM_Store"]);
}

#[test]
fn test_sender_receiver_payload_includes_com_spec_elements() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;
    assert_eq!(
        composition.port("Sender", "Out").map(|p| &p.interface),
        Some(&PortInterface::SenderReceiver {
            data_elements: vec!["Speed".into(), "Speed".into()]
        })
    );
    assert_eq!(
        composition.port("Receiver", "In").map(|p| p.interface.data_elements()),
        Some(&["Speed".to_string()][..])
    );
}

#[test]
fn test_client_server_ports_on_both_sides() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;
    for (component, direction) in [("Sender", PortDirection::Provided), ("Receiver", PortDirection::Required)] {
        let diag = composition.port(component, "Diag").expect("Diag");
        assert_eq!(diag.direction, direction);
        assert_eq!(diag.interface.operations(), ["ReadDtc", "ClearDtc"]);
    }
}

#[test]
fn test_nvm_and_unresolved_ports() {
    let composition = &BODY_CONTROL_GRAPH.0.composition;
    assert_eq!(
        composition.port("Sender", "PS_NvM_Store").map(|p| &p.interface),
        Some(&PortInterface::NvmService)
    );
    assert_eq!(
        composition.port("Receiver", "Legacy").map(|p| &p.interface),
        Some(&PortInterface::Unknown)
    );
}

#[test]
fn test_connections_keep_document_order() {
    assert_eq!(peers("Sender", "Out"), ["Receiver.In", "Logger.Trace"]);
    assert_eq!(peers("Sender", "Diag"), ["Receiver.Diag"]);
    assert_eq!(peers("Receiver", "In"), ["Sender.Out"]);
    assert!(peers("Receiver", "Legacy").is_empty());
}

#[test]
fn test_placeholder_port_from_connector() {
    let trace = BODY_CONTROL_GRAPH
        .0
        .composition
        .port("Logger", "Trace")
        .expect("placeholder");
    assert_eq!(trace.direction, PortDirection::Required);
    assert_eq!(trace.interface, PortInterface::Unknown);
    assert_eq!(peers("Logger", "Trace"), ["Sender.Out"]);
}

#[test]
fn test_delegations_attach_to_owning_component() {
    let graph = &BODY_CONTROL_GRAPH.0;
    assert_eq!(
        graph.component("Sender").map(|c| c.delegations.as_slice()),
        Some(
            &[Delegation {
                inner_port: "Out".into(),
                outer_port: "SpeedOut".into(),
                direction: PortDirection::Provided,
            }][..]
        )
    );
    assert_eq!(
        graph.component("Receiver").map(|c| c.delegations.as_slice()),
        Some(
            &[Delegation {
                inner_port: "In".into(),
                outer_port: "SpeedIn".into(),
                direction: PortDirection::Required,
            }][..]
        )
    );
    assert!(graph.component("Logger").is_some_and(|c| c.delegations.is_empty()));
}

#[test]
fn test_report_lists_dropped_records() {
    let report = &BODY_CONTROL_GRAPH.1;
    assert_eq!(report.components, 3);
    assert_eq!(report.interfaces, 2);
    assert_eq!(report.connectors, 3);
    assert_eq!(report.delegations, 2);

    let connectors: Vec<_> = report
        .skipped_in(Pass::Connectors)
        .map(|s| s.subject.as_deref())
        .collect();
    assert_eq!(connectors, [Some("C_Ghost"), Some("C_Partial")]);

    let delegations: Vec<_> = report.skipped_in(Pass::Delegations).collect();
    assert_eq!(delegations.len(), 1);
    assert_eq!(
        delegations[0].reason,
        SkipReason::UnknownComponent {
            component: "Ghost".into()
        }
    );

    assert!(report.skipped_in(Pass::PortBinding).any(|s| s.reason
        == SkipReason::UnknownInterface {
            interface: "Removed".into()
        }));
    assert!(report.skipped_in(Pass::PortBinding).any(|s| s.reason
        == SkipReason::PortDeclarationNotFound {
            component: "Logger".into(),
            port: "Trace".into()
        }));
}

#[test]
fn test_stats() {
    assert_eq!(
        BODY_CONTROL_GRAPH.0.composition.stats(),
        GraphStats {
            components: 3,
            ports: 7,
            connections: 6,
            delegations: 2,
        }
    );
}
