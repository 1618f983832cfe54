//! In-memory XML element tree.
//!
//! The extraction passes never stream: the document is parsed once into an
//! immutable arena ([`XmlDocument`]) and every pass then queries it through
//! borrowed [`Element`] handles.

mod document;
mod reader;

pub use document::{Element, XmlDocument};
pub use reader::parse_document;
