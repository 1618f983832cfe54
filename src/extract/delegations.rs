//! Delegation connector resolution.
//!
//! A `DELEGATION-SW-CONNECTOR` exposes an inner component port as a port of
//! the composition itself. The inner side is read from the target port
//! reference under `INNER-PORT-IREF`; its last two path segments name the
//! owning component and the port.

use indexmap::IndexMap;

use super::report::{ExtractionReport, Pass, SkipReason};
use crate::base::constants::tag;
use crate::base::{last_segment, last_two_segments};
use crate::model::{Component, Delegation, PortDirection};
use crate::xml::Element;

/// Resolve every delegation connector of the composition, in document order.
pub(crate) fn resolve_delegations(
    composition: Element<'_>,
    swcs: &mut IndexMap<String, Component>,
    report: &mut ExtractionReport,
) {
    for connector in composition.find_all_under(tag::CONNECTORS, tag::DELEGATION_SW_CONNECTOR) {
        let subject = connector.short_name();
        match resolve_delegation(connector) {
            Ok((owner, delegation)) => match swcs.get_mut(owner) {
                Some(swc) => {
                    swc.delegations.push(delegation);
                    report.delegations += 1;
                }
                None => report.skip(
                    Pass::Delegations,
                    subject,
                    SkipReason::UnknownComponent {
                        component: owner.to_string(),
                    },
                ),
            },
            Err(reason) => report.skip(Pass::Delegations, subject, reason),
        }
    }
}

/// Read one delegation connector into its owning component name and record.
fn resolve_delegation(connector: Element<'_>) -> Result<(&str, Delegation), SkipReason> {
    let inner = connector.child(tag::INNER_PORT_IREF).ok_or(SkipReason::MissingReference {
        reference: tag::INNER_PORT_IREF,
    })?;
    let outer_path = connector
        .child_text(tag::OUTER_PORT_REF)
        .ok_or(SkipReason::MissingReference {
            reference: tag::OUTER_PORT_REF,
        })?;

    // Provided wins if both kinds are populated.
    let (reference, inner_path, direction) = inner_target(inner, tag::TARGET_P_PORT_REF)
        .map(|path| (tag::TARGET_P_PORT_REF, path, PortDirection::Provided))
        .or_else(|| {
            inner_target(inner, tag::TARGET_R_PORT_REF)
                .map(|path| (tag::TARGET_R_PORT_REF, path, PortDirection::Required))
        })
        .ok_or(SkipReason::MissingInnerPort)?;

    let (owner, inner_port) =
        last_two_segments(inner_path).ok_or_else(|| SkipReason::UnresolvablePath {
            reference,
            path: inner_path.to_string(),
        })?;
    let outer_port = last_segment(outer_path).ok_or_else(|| SkipReason::UnresolvablePath {
        reference: tag::OUTER_PORT_REF,
        path: outer_path.to_string(),
    })?;

    Ok((
        owner,
        Delegation {
            inner_port: inner_port.to_string(),
            outer_port: outer_port.to_string(),
            direction,
        },
    ))
}

/// Text of the first target port reference of this kind anywhere under the
/// inner instance reference.
fn inner_target<'a>(inner: Element<'a>, reference: &str) -> Option<&'a str> {
    inner
        .find(reference)
        .and_then(|target| target.text())
        .filter(|text| !text.trim().is_empty())
}
