//! Lookup tables over the parsed document, built once per extraction.

use rustc_hash::FxHashMap;

use crate::base::constants::tag;
use crate::model::PortDirection;
use crate::xml::{Element, XmlDocument};

/// Suffix shared by every AUTOSAR software component type element
/// (`APPLICATION-SW-COMPONENT-TYPE`, `SENSOR-ACTUATOR-SW-COMPONENT-TYPE`, ...).
const SW_COMPONENT_TYPE_SUFFIX: &str = "-SW-COMPONENT-TYPE";

/// Component types and port prototypes by short name.
///
/// When a name is declared more than once the first declaration in document
/// order is indexed.
pub(crate) struct DeclarationIndex<'a> {
    component_types: FxHashMap<&'a str, Element<'a>>,
    ports: FxHashMap<(&'a str, PortDirection), Element<'a>>,
}

impl<'a> DeclarationIndex<'a> {
    pub(crate) fn build(doc: &'a XmlDocument) -> Self {
        let mut component_types = FxHashMap::default();
        let mut ports = FxHashMap::default();

        for element in doc.root().descendants_or_self() {
            if !element.in_namespace() {
                continue;
            }
            if element.name().ends_with(SW_COMPONENT_TYPE_SUFFIX) {
                if let Some(name) = element.short_name() {
                    component_types.entry(name).or_insert(element);
                }
            } else if let Some(direction) = port_prototype_direction(element) {
                if let Some(name) = element.short_name() {
                    ports.entry((name, direction)).or_insert(element);
                }
            }
        }

        Self {
            component_types,
            ports,
        }
    }

    /// The component type declared with this short name.
    pub(crate) fn component_type(&self, name: &str) -> Option<Element<'a>> {
        self.component_types.get(name).copied()
    }

    /// First port prototype anywhere in the document with this name and direction.
    pub(crate) fn port(&self, name: &str, direction: PortDirection) -> Option<Element<'a>> {
        self.ports.get(&(name, direction)).copied()
    }
}

/// Direction of a `P-PORT-PROTOTYPE` / `R-PORT-PROTOTYPE` element.
pub(crate) fn port_prototype_direction(element: Element<'_>) -> Option<PortDirection> {
    if element.is(tag::P_PORT_PROTOTYPE) {
        Some(PortDirection::Provided)
    } else if element.is(tag::R_PORT_PROTOTYPE) {
        Some(PortDirection::Required)
    } else {
        None
    }
}
