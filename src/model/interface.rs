//! Interface catalog consulted while binding ports.

use indexmap::IndexMap;

/// The payload a port interface defines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterfaceContract {
    /// Data-oriented interface: named data elements, in declaration order.
    SenderReceiver { data_elements: Vec<String> },
    /// Operation-oriented interface: named operations, in declaration order.
    ClientServer { operations: Vec<String> },
}

/// A declared port interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub contract: InterfaceContract,
}

impl Interface {
    pub fn sender_receiver(name: impl Into<String>, data_elements: Vec<String>) -> Self {
        Self {
            name: name.into(),
            contract: InterfaceContract::SenderReceiver { data_elements },
        }
    }

    pub fn client_server(name: impl Into<String>, operations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            contract: InterfaceContract::ClientServer { operations },
        }
    }
}

/// Interfaces keyed by short name.
///
/// Built once per document and handed to the port binder by value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceCatalog {
    interfaces: IndexMap<String, Interface>,
}

impl InterfaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an interface. A later interface with the same name replaces the
    /// earlier one; returns the replaced entry.
    pub fn insert(&mut self, interface: Interface) -> Option<Interface> {
        self.interfaces.insert(interface.name.clone(), interface)
    }

    pub fn get(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values()
    }
}
