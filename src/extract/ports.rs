//! Port discovery and interface binding.
//!
//! Ports reach a component two ways: declared on the component's type
//! (`PORTS/P-PORT-PROTOTYPE`, `PORTS/R-PORT-PROTOTYPE`), or implied by a
//! connector endpoint. Once every port is known, [`PortBinder`] resolves each
//! one's interface through the catalog:
//!
//! ```text
//! port name ──► NvM marker? ──yes──► NvM
//!                   │no
//!                   ▼
//!      port prototype (own type first, then document-wide)
//!                   │
//!                   ▼
//!      PROVIDED-/REQUIRED-INTERFACE-TREF ──► catalog ──► payload
//!                   │
//!                   ▼
//!      com spec DATA-ELEMENT-REFs appended (sender-receiver only)
//! ```

use indexmap::IndexMap;

use super::index::{DeclarationIndex, port_prototype_direction};
use super::options::ExtractOptions;
use super::report::{ExtractionReport, Pass, SkipReason};
use crate::base::constants::{UNKNOWN_TYPE, tag};
use crate::base::last_segment;
use crate::model::{
    Component, InterfaceCatalog, InterfaceContract, Port, PortDirection, PortInterface,
};
use crate::xml::Element;

// ============================================================================
// DECLARED PORTS
// ============================================================================

/// Add the ports declared on each component's type.
pub(crate) fn discover_declared_ports(
    index: &DeclarationIndex<'_>,
    swcs: &mut IndexMap<String, Component>,
    report: &mut ExtractionReport,
) {
    for (name, swc) in swcs.iter_mut() {
        if swc.type_name == UNKNOWN_TYPE {
            continue;
        }
        let Some(component_type) = index.component_type(&swc.type_name) else {
            report.skip(
                Pass::DeclaredPorts,
                Some(name.as_str()),
                SkipReason::ComponentTypeNotFound {
                    type_name: swc.type_name.clone(),
                },
            );
            continue;
        };

        for declaration in declared_ports(component_type) {
            let Some(direction) = port_prototype_direction(declaration) else {
                continue;
            };
            let Some(port_name) = declaration.short_name() else {
                let element = match direction {
                    PortDirection::Provided => tag::P_PORT_PROTOTYPE,
                    PortDirection::Required => tag::R_PORT_PROTOTYPE,
                };
                report.skip(
                    Pass::DeclaredPorts,
                    Some(name.as_str()),
                    SkipReason::MissingShortName { element },
                );
                continue;
            };
            if !swc.ports.contains_key(port_name) {
                report.declared_ports += 1;
            }
            swc.ensure_port(port_name, direction);
        }
    }
}

/// Children of a component type's `PORTS` element.
fn declared_ports<'a>(component_type: Element<'a>) -> impl Iterator<Item = Element<'a>> {
    component_type
        .child(tag::PORTS)
        .into_iter()
        .flat_map(|ports| ports.children())
}

// ============================================================================
// INTERFACE BINDING
// ============================================================================

/// Resolves port interfaces against an owned interface catalog.
pub(crate) struct PortBinder<'o> {
    catalog: InterfaceCatalog,
    options: &'o ExtractOptions,
}

impl<'o> PortBinder<'o> {
    pub(crate) fn new(catalog: InterfaceCatalog, options: &'o ExtractOptions) -> Self {
        Self { catalog, options }
    }

    /// Bind every port of every component.
    pub(crate) fn bind(
        &self,
        index: &DeclarationIndex<'_>,
        swcs: &mut IndexMap<String, Component>,
        report: &mut ExtractionReport,
    ) {
        for (component, swc) in swcs.iter_mut() {
            let component_type = index.component_type(&swc.type_name);
            for (port_name, port) in swc.ports.iter_mut() {
                if self.bind_port(index, component_type, component, port_name, port, report) {
                    report.bound_ports += 1;
                }
            }
        }
    }

    /// Resolve one port. Returns true if the port ends up with a known interface kind.
    ///
    /// NvM ports stop at the marker and their com specs are never read. Any
    /// other port with a declaration has its com specs read even when the
    /// interface could not be resolved, so each one is either appended or
    /// recorded as a skip.
    fn bind_port(
        &self,
        index: &DeclarationIndex<'_>,
        component_type: Option<Element<'_>>,
        component: &str,
        port_name: &str,
        port: &mut Port,
        report: &mut ExtractionReport,
    ) -> bool {
        if self.options.is_nvm_port(port_name) {
            port.interface = PortInterface::NvmService;
            return true;
        }

        let Some(declaration) = self.locate_declaration(index, component_type, port_name, port.direction)
        else {
            report.skip(
                Pass::PortBinding,
                Some(port_name),
                SkipReason::PortDeclarationNotFound {
                    component: component.to_string(),
                    port: port_name.to_string(),
                },
            );
            return false;
        };

        let resolved = self.resolve_interface(declaration, port_name, port.direction, report);
        if let Some(contract) = resolved {
            port.interface = contract.clone().into();
        }
        self.append_com_spec_elements(declaration, component, port_name, port, report);
        resolved.is_some()
    }

    /// Follow the declaration's interface reference into the catalog.
    fn resolve_interface(
        &self,
        declaration: Element<'_>,
        port_name: &str,
        direction: PortDirection,
        report: &mut ExtractionReport,
    ) -> Option<&InterfaceContract> {
        let interface_tag = match direction {
            PortDirection::Provided => tag::PROVIDED_INTERFACE_TREF,
            PortDirection::Required => tag::REQUIRED_INTERFACE_TREF,
        };
        let Some(reference) = declaration.child_text(interface_tag) else {
            report.skip(
                Pass::PortBinding,
                Some(port_name),
                SkipReason::MissingReference {
                    reference: interface_tag,
                },
            );
            return None;
        };
        let Some(interface_name) = last_segment(reference) else {
            report.skip(
                Pass::PortBinding,
                Some(port_name),
                SkipReason::UnresolvablePath {
                    reference: interface_tag,
                    path: reference.to_string(),
                },
            );
            return None;
        };
        match self.catalog.get(interface_name) {
            Some(interface) => Some(&interface.contract),
            None => {
                report.skip(
                    Pass::PortBinding,
                    Some(port_name),
                    SkipReason::UnknownInterface {
                        interface: interface_name.to_string(),
                    },
                );
                None
            }
        }
    }

    /// Find the port prototype for a known port.
    fn locate_declaration<'a>(
        &self,
        index: &DeclarationIndex<'a>,
        component_type: Option<Element<'a>>,
        port_name: &str,
        direction: PortDirection,
    ) -> Option<Element<'a>> {
        let scoped = if self.options.scope_port_lookup_to_component_type {
            component_type.and_then(|t| {
                declared_ports(t).find(|d| {
                    port_prototype_direction(*d) == Some(direction) && d.short_name() == Some(port_name)
                })
            })
        } else {
            None
        };
        scoped.or_else(|| index.port(port_name, direction))
    }

    /// Append the data element referenced by each queued/non-queued com spec.
    ///
    /// Only sender-receiver ports take them; on any other port each element is
    /// recorded as `ComSpecWithoutDataInterface`. Elements already obtained from the interface are appended again if a
    /// com spec repeats them; the combined list is not deduplicated.
    fn append_com_spec_elements(
        &self,
        declaration: Element<'_>,
        component: &str,
        port_name: &str,
        port: &mut Port,
        report: &mut ExtractionReport,
    ) {
        let referenced = declaration
            .descendants()
            .filter(|e| e.in_namespace() && tag::DATA_COM_SPECS.iter().any(|t| *t == e.name()))
            .filter_map(|spec| spec.child_text(tag::DATA_ELEMENT_REF))
            .filter_map(last_segment);

        for element in referenced {
            match &mut port.interface {
                PortInterface::SenderReceiver { data_elements } => {
                    data_elements.push(element.to_string());
                }
                _ => report.skip(
                    Pass::PortBinding,
                    Some(port_name),
                    SkipReason::ComSpecWithoutDataInterface {
                        component: component.to_string(),
                        port: port_name.to_string(),
                    },
                ),
            }
        }
    }
}
