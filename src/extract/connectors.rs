//! Assembly connector resolution.
//!
//! Each `ASSEMBLY-SW-CONNECTOR` joins a provided port of one component to a
//! required port of another. A resolved connector records one [`Connection`]
//! on each endpoint, pointing at the other; ports the connector mentions but
//! nothing declared are created as placeholders.

use indexmap::IndexMap;

use super::report::{ExtractionReport, Pass, SkipReason};
use crate::base::constants::tag;
use crate::base::last_segment;
use crate::model::{Component, Connection, PortDirection};
use crate::xml::Element;

/// One side of a resolved connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Endpoint<'a> {
    pub(crate) component: &'a str,
    pub(crate) port: &'a str,
}

/// Resolve every assembly connector of the composition, in document order.
pub(crate) fn resolve_connectors(
    composition: Element<'_>,
    swcs: &mut IndexMap<String, Component>,
    report: &mut ExtractionReport,
) {
    for connector in composition.find_all_under(tag::CONNECTORS, tag::ASSEMBLY_SW_CONNECTOR) {
        let subject = connector.short_name();
        let resolved = resolve_endpoints(connector).and_then(|(provider, requester)| {
            for endpoint in [provider, requester] {
                if !swcs.contains_key(endpoint.component) {
                    return Err(SkipReason::UnknownComponent {
                        component: endpoint.component.to_string(),
                    });
                }
            }
            Ok((provider, requester))
        });

        match resolved {
            Ok((provider, requester)) => {
                connect(swcs, provider, requester);
                report.connectors += 1;
            }
            Err(reason) => report.skip(Pass::Connectors, subject, reason),
        }
    }
}

/// Resolve the provider and requester endpoints of one connector.
///
/// All four references (two component contexts, two target ports) are
/// required; the first one missing or unresolvable is reported.
pub(crate) fn resolve_endpoints(
    connector: Element<'_>,
) -> Result<(Endpoint<'_>, Endpoint<'_>), SkipReason> {
    let provider = resolve_endpoint(connector, tag::PROVIDER_IREF, tag::TARGET_P_PORT_REF)?;
    let requester = resolve_endpoint(connector, tag::REQUESTER_IREF, tag::TARGET_R_PORT_REF)?;
    Ok((provider, requester))
}

fn resolve_endpoint<'a>(
    connector: Element<'a>,
    iref: &'static str,
    port_ref: &'static str,
) -> Result<Endpoint<'a>, SkipReason> {
    let iref = connector
        .child(iref)
        .ok_or(SkipReason::MissingReference { reference: iref })?;
    let component = resolve_reference(iref, tag::CONTEXT_COMPONENT_REF)?;
    let port = resolve_reference(iref, port_ref)?;
    Ok(Endpoint { component, port })
}

fn resolve_reference<'a>(parent: Element<'a>, reference: &'static str) -> Result<&'a str, SkipReason> {
    let path = parent
        .child_text(reference)
        .ok_or(SkipReason::MissingReference { reference })?;
    last_segment(path).ok_or_else(|| SkipReason::UnresolvablePath {
        reference,
        path: path.to_string(),
    })
}

/// Record the connection on both endpoints, creating placeholder ports as needed.
fn connect(swcs: &mut IndexMap<String, Component>, provider: Endpoint<'_>, requester: Endpoint<'_>) {
    if let Some(swc) = swcs.get_mut(provider.component) {
        swc.ensure_port(provider.port, PortDirection::Provided)
            .connections
            .push(Connection::new(requester.component, requester.port));
    }
    if let Some(swc) = swcs.get_mut(requester.component) {
        swc.ensure_port(requester.port, PortDirection::Required)
            .connections
            .push(Connection::new(provider.component, provider.port));
    }
}
