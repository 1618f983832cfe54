//! Interface catalog builder.
//!
//! Interfaces are usually declared at package level, so the whole document is
//! scanned, not just the composition. Sender-receiver and client-server
//! declarations are visited together in document order; on a name clash the
//! later declaration replaces the earlier one.

use super::report::{ExtractionReport, Pass, SkipReason};
use crate::base::constants::tag;
use crate::model::{Interface, InterfaceCatalog};
use crate::xml::{Element, XmlDocument};

pub(crate) fn build_catalog(doc: &XmlDocument, report: &mut ExtractionReport) -> InterfaceCatalog {
    let mut catalog = InterfaceCatalog::new();

    for element in doc.root().descendants_or_self() {
        let interface = if element.is(tag::SENDER_RECEIVER_INTERFACE) {
            read_interface(element, tag::DATA_ELEMENTS, report)
                .map(|(name, items)| Interface::sender_receiver(name, items))
        } else if element.is(tag::CLIENT_SERVER_INTERFACE) {
            read_interface(element, tag::OPERATIONS, report)
                .map(|(name, items)| Interface::client_server(name, items))
        } else {
            continue;
        };

        if let Some(interface) = interface {
            if catalog.insert(interface).is_none() {
                report.interfaces += 1;
            }
        }
    }

    tracing::debug!(interfaces = catalog.len(), "interface catalog built");
    catalog
}

/// Read an interface's short name and the short names of the entries in its
/// `container` child (data elements or operations).
fn read_interface<'a>(
    element: Element<'a>,
    container: &'static str,
    report: &mut ExtractionReport,
) -> Option<(&'a str, Vec<String>)> {
    let Some(name) = element.short_name() else {
        report.skip(
            Pass::Interfaces,
            None,
            SkipReason::MissingShortName {
                element: element_tag(element),
            },
        );
        return None;
    };

    let mut items = Vec::new();
    if let Some(entries) = element.child(container) {
        for entry in entries.children() {
            match entry.short_name() {
                Some(item) => items.push(item.to_string()),
                None => report.skip(
                    Pass::Interfaces,
                    Some(name),
                    SkipReason::MissingShortName {
                        element: container,
                    },
                ),
            }
        }
    }

    Some((name, items))
}

fn element_tag(element: Element<'_>) -> &'static str {
    if element.is(tag::SENDER_RECEIVER_INTERFACE) {
        tag::SENDER_RECEIVER_INTERFACE
    } else {
        tag::CLIENT_SERVER_INTERFACE
    }
}
