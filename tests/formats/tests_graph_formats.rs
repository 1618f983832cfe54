//! Reading and writing the graph through the format handlers.

use arxml::format::{Arxml, FormatCapability, GraphFormat, Json, detect_format_from_mime};
use arxml::{ArxmlError, ArxmlGraph};
use rstest::rstest;

use crate::helpers::fixtures::{BODY_CONTROL, BODY_CONTROL_GRAPH, TWO_COMPONENTS};

#[test]
fn test_arxml_format_reads_like_the_extractor() {
    let graph = Arxml::default().read(BODY_CONTROL).expect("read");
    assert_eq!(graph, BODY_CONTROL_GRAPH.0);
    assert_eq!(Arxml::default().capabilities(), FormatCapability::READ_ONLY);
}

#[test]
fn test_json_document_shape() {
    let graph = Arxml::default().read(TWO_COMPONENTS).expect("read");
    let bytes = Json.write(&graph).expect("write");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json");

    assert_eq!(
        value,
        serde_json::json!({
            "composition": {
                "name": "Top",
                "swcs": {
                    "Sender": {
                        "type": "T1",
                        "ports": {
                            "Out": {
                                "direction": "provided",
                                "interfaceKind": "Unknown",
                                "connections": ["Receiver.In"]
                            }
                        },
                        "delegations": []
                    },
                    "Receiver": {
                        "type": "T2",
                        "ports": {
                            "In": {
                                "direction": "required",
                                "interfaceKind": "Unknown",
                                "connections": ["Sender.Out"]
                            }
                        },
                        "delegations": []
                    }
                }
            }
        })
    );
}

#[test]
fn test_json_payload_keys_follow_interface_kind() {
    let bytes = Json.write(&BODY_CONTROL_GRAPH.0).expect("write");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json");
    let sender = &value["composition"]["swcs"]["Sender"]["ports"];

    assert_eq!(sender["Out"]["interfaceKind"], "Sender-Receiver");
    assert_eq!(sender["Out"]["dataElements"], serde_json::json!(["Speed", "Speed"]));
    assert_eq!(sender["Diag"]["interfaceKind"], "Client-Server");
    assert_eq!(sender["Diag"]["operations"], serde_json::json!(["ReadDtc", "ClearDtc"]));
    assert_eq!(sender["PS_NvM_Store"]["interfaceKind"], "NvM");
    assert!(sender["PS_NvM_Store"].get("operations").is_none());
}

fn assert_reads_back(mime: &str) {
    let format = detect_format_from_mime(mime).expect("known mime");
    assert_eq!(format.capabilities(), FormatCapability::FULL);

    let bytes = format.write(&BODY_CONTROL_GRAPH.0).expect("write");
    format.validate(&bytes).expect("valid");
    let back: ArxmlGraph = format.read(&bytes).expect("read");
    assert_eq!(back, BODY_CONTROL_GRAPH.0);
}

#[rstest]
#[case("application/json")]
#[case("text/xml")]
fn test_mime_detection(#[case] mime: &str) {
    assert!(detect_format_from_mime(mime).is_some());
}

#[test]
fn test_json_document_reads_back() {
    assert_reads_back("application/json");
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_document_reads_back() {
    assert_reads_back("application/x-yaml");
}

#[test]
fn test_arxml_parse_failure_through_format() {
    let err = Arxml::default().read(b"<AUTOSAR>").expect_err("unclosed");
    assert!(err.is_parse_error());
    assert!(matches!(Json.read(b"{").expect_err("truncated"), ArxmlError::Json(_)));
}
