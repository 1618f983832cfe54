//! Extraction report: every record the passes dropped, and why.
//!
//! Skips are expected in partially specified input and never fail the
//! extraction. They are collected here so each skip path stays observable
//! and testable, and logged at `trace` level only.

use std::fmt;

// ============================================================================
// PASSES
// ============================================================================

/// Extraction pass that produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    Components,
    Interfaces,
    DeclaredPorts,
    Connectors,
    PortBinding,
    Delegations,
}

impl Pass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pass::Components => "components",
            Pass::Interfaces => "interfaces",
            Pass::DeclaredPorts => "declared-ports",
            Pass::Connectors => "connectors",
            Pass::PortBinding => "port-binding",
            Pass::Delegations => "delegations",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SKIP REASONS
// ============================================================================

/// Why a record (or one resolution step for it) was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The element has no `SHORT-NAME` and cannot be keyed.
    MissingShortName { element: &'static str },
    /// A required sub-element is absent or empty.
    MissingReference { reference: &'static str },
    /// A reference is present but has too few path segments.
    UnresolvablePath { reference: &'static str, path: String },
    /// A resolved component name is not part of the composition.
    UnknownComponent { component: String },
    /// A delegation carries neither a provided nor a required inner reference.
    MissingInnerPort,
    /// A later component prototype with the same name replaced an earlier one.
    DuplicateComponent { component: String },
    /// No component type with this name is declared in the document.
    ComponentTypeNotFound { type_name: String },
    /// No port prototype declaration could be located for a known port.
    PortDeclarationNotFound { component: String, port: String },
    /// The referenced interface is not in the catalog.
    UnknownInterface { interface: String },
    /// A communication spec data element on a port without a sender-receiver interface.
    ComSpecWithoutDataInterface { component: String, port: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingShortName { element } => write!(f, "<{element}> has no SHORT-NAME"),
            SkipReason::MissingReference { reference } => write!(f, "missing <{reference}>"),
            SkipReason::UnresolvablePath { reference, path } => {
                write!(f, "<{reference}> path {path:?} cannot be resolved")
            }
            SkipReason::UnknownComponent { component } => {
                write!(f, "component {component:?} is not in the composition")
            }
            SkipReason::MissingInnerPort => f.write_str("no inner port reference"),
            SkipReason::DuplicateComponent { component } => {
                write!(f, "component {component:?} declared more than once")
            }
            SkipReason::ComponentTypeNotFound { type_name } => {
                write!(f, "component type {type_name:?} is not declared")
            }
            SkipReason::PortDeclarationNotFound { component, port } => {
                write!(f, "no declaration found for port {component}.{port}")
            }
            SkipReason::UnknownInterface { interface } => {
                write!(f, "interface {interface:?} is not declared")
            }
            SkipReason::ComSpecWithoutDataInterface { component, port } => {
                write!(f, "com spec on {component}.{port} has no sender-receiver interface")
            }
        }
    }
}

/// One skipped record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub pass: Pass,
    /// Short name of the skipped element, when it has one.
    pub subject: Option<String>,
    pub reason: SkipReason,
}

// ============================================================================
// REPORT
// ============================================================================

/// Per-pass counters plus every skipped record, in the order encountered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub components: usize,
    pub interfaces: usize,
    pub declared_ports: usize,
    pub connectors: usize,
    pub bound_ports: usize,
    pub delegations: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skip.
    pub fn skip(&mut self, pass: Pass, subject: Option<&str>, reason: SkipReason) {
        tracing::trace!(pass = %pass, subject = ?subject, "skipped: {reason}");
        self.skipped.push(SkippedRecord {
            pass,
            subject: subject.map(str::to_string),
            reason,
        });
    }

    /// Skipped records of one pass.
    pub fn skipped_in(&self, pass: Pass) -> impl Iterator<Item = &SkippedRecord> {
        self.skipped.iter().filter(move |s| s.pass == pass)
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}
