//! Component extraction from the composition's component prototypes.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::report::{ExtractionReport, Pass, SkipReason};
use crate::base::constants::{UNKNOWN_TYPE, tag};
use crate::base::last_segment;
use crate::model::Component;
use crate::xml::{Element, XmlDocument};

/// The composition the graph is built for: the first
/// `COMPOSITION-SW-COMPONENT-TYPE` in document order.
pub(crate) fn find_composition(doc: &XmlDocument) -> Option<Element<'_>> {
    doc.find(tag::COMPOSITION_SW_COMPONENT_TYPE)
}

/// One component per `COMPONENTS/SW-COMPONENT-PROTOTYPE`, keyed by short name.
///
/// Prototypes without a short name are skipped. A missing or unresolvable
/// `TYPE-TREF` yields the `UNKNOWN` type. No composition means no components.
pub(crate) fn extract_components(
    composition: Option<Element<'_>>,
    report: &mut ExtractionReport,
) -> IndexMap<String, Component> {
    let mut swcs = IndexMap::new();
    let Some(composition) = composition else {
        return swcs;
    };

    for prototype in composition.find_all_under(tag::COMPONENTS, tag::SW_COMPONENT_PROTOTYPE) {
        let Some(name) = prototype.short_name() else {
            report.skip(
                Pass::Components,
                None,
                SkipReason::MissingShortName {
                    element: tag::SW_COMPONENT_PROTOTYPE,
                },
            );
            continue;
        };

        let type_name = component_type_name(prototype);
        match swcs.entry(name.to_string()) {
            Entry::Occupied(mut existing) => {
                report.skip(
                    Pass::Components,
                    Some(name),
                    SkipReason::DuplicateComponent {
                        component: name.to_string(),
                    },
                );
                existing.insert(Component::new(type_name));
            }
            Entry::Vacant(slot) => {
                slot.insert(Component::new(type_name));
                report.components += 1;
            }
        }
    }

    swcs
}

fn component_type_name(prototype: Element<'_>) -> &str {
    prototype
        .child_text(tag::TYPE_TREF)
        .and_then(last_segment)
        .unwrap_or(UNKNOWN_TYPE)
}
