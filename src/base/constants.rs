//! AUTOSAR schema constants.
//!
//! Tag names are local names; every query also requires the element to live
//! in the configured AUTOSAR namespace (see [`AUTOSAR_NAMESPACE`]).

/// AUTOSAR R4.x schema namespace URI.
pub const AUTOSAR_NAMESPACE: &str = "http://autosar.org/schema/r4.0";

/// Reserved port-name substring marking NvM (non-volatile memory) service ports.
pub const NVM_PORT_MARKER: &str = "NvM";

// ============================================================================
// SENTINELS
// ============================================================================

/// Composition name used when the document has no composition (or it has no name).
pub const UNKNOWN_COMPOSITION: &str = "UNKNOWN_COMPOSITION";

/// Component type used when the type reference is absent or unresolvable.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

// ============================================================================
// TAG NAMES
// ============================================================================

pub mod tag {
    pub const SHORT_NAME: &str = "SHORT-NAME";

    // Compositions and components
    pub const COMPOSITION_SW_COMPONENT_TYPE: &str = "COMPOSITION-SW-COMPONENT-TYPE";
    pub const COMPONENTS: &str = "COMPONENTS";
    pub const SW_COMPONENT_PROTOTYPE: &str = "SW-COMPONENT-PROTOTYPE";
    pub const TYPE_TREF: &str = "TYPE-TREF";

    // Ports
    pub const PORTS: &str = "PORTS";
    pub const P_PORT_PROTOTYPE: &str = "P-PORT-PROTOTYPE";
    pub const R_PORT_PROTOTYPE: &str = "R-PORT-PROTOTYPE";
    pub const PROVIDED_INTERFACE_TREF: &str = "PROVIDED-INTERFACE-TREF";
    pub const REQUIRED_INTERFACE_TREF: &str = "REQUIRED-INTERFACE-TREF";
    pub const DATA_ELEMENT_REF: &str = "DATA-ELEMENT-REF";

    /// Communication specs carrying a `DATA-ELEMENT-REF`.
    pub const DATA_COM_SPECS: &[&str] = &[
        "NONQUEUED-SENDER-COM-SPEC",
        "QUEUED-SENDER-COM-SPEC",
        "NONQUEUED-RECEIVER-COM-SPEC",
        "QUEUED-RECEIVER-COM-SPEC",
    ];

    // Interfaces
    pub const SENDER_RECEIVER_INTERFACE: &str = "SENDER-RECEIVER-INTERFACE";
    pub const CLIENT_SERVER_INTERFACE: &str = "CLIENT-SERVER-INTERFACE";
    pub const DATA_ELEMENTS: &str = "DATA-ELEMENTS";
    pub const OPERATIONS: &str = "OPERATIONS";

    // Connectors
    pub const CONNECTORS: &str = "CONNECTORS";
    pub const ASSEMBLY_SW_CONNECTOR: &str = "ASSEMBLY-SW-CONNECTOR";
    pub const DELEGATION_SW_CONNECTOR: &str = "DELEGATION-SW-CONNECTOR";
    pub const PROVIDER_IREF: &str = "PROVIDER-IREF";
    pub const REQUESTER_IREF: &str = "REQUESTER-IREF";
    pub const CONTEXT_COMPONENT_REF: &str = "CONTEXT-COMPONENT-REF";
    pub const TARGET_P_PORT_REF: &str = "TARGET-P-PORT-REF";
    pub const TARGET_R_PORT_REF: &str = "TARGET-R-PORT-REF";
    pub const INNER_PORT_IREF: &str = "INNER-PORT-IREF";
    pub const OUTER_PORT_REF: &str = "OUTER-PORT-REF";
}
