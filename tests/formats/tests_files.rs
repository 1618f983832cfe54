//! File based extraction and format detection.

use std::fs;

use arxml::format::{GraphFormat, detect_format};
use arxml::{ArxmlError, Extractor};
use tempfile::TempDir;

use crate::helpers::fixtures::{BODY_CONTROL, BODY_CONTROL_GRAPH};

#[test]
fn test_extract_path_reads_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("body_control.arxml");
    fs::write(&path, BODY_CONTROL).expect("write fixture");

    let graph = Extractor::new().extract_path(&path).expect("extract");
    assert_eq!(graph, BODY_CONTROL_GRAPH.0);
}

#[test]
fn test_extract_path_missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = Extractor::new()
        .extract_path(dir.path().join("missing.arxml"))
        .expect_err("no such file");

    assert!(matches!(err, ArxmlError::Io(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn test_convert_arxml_file_to_json_file() {
    let dir = TempDir::new().expect("temp dir");
    let source = dir.path().join("system.ARXML");
    let target = dir.path().join("system.json");
    fs::write(&source, BODY_CONTROL).expect("write fixture");

    let reader = detect_format(&source).expect("arxml detected");
    let writer = detect_format(&target).expect("json detected");
    let graph = reader.read(&fs::read(&source).expect("read")).expect("extract");
    fs::write(&target, writer.write(&graph).expect("serialize")).expect("write json");

    let back = writer.read(&fs::read(&target).expect("read json")).expect("deserialize");
    assert_eq!(back, graph);
    assert!(reader.write(&graph).is_err());
}
