//! Arena-backed, read-only XML element tree.
//!
//! Elements are stored in document (pre-)order, so the descendants of any
//! element form a contiguous slice of the arena:
//!
//! ```text
//! nodes: [ AUTOSAR, AR-PACKAGES, AR-PACKAGE, SHORT-NAME, ELEMENTS, ... ]
//!          └──────────────── subtree_end of AUTOSAR ───────────────────┘
//! ```
//!
//! Every query on [`Element`] only matches elements bound to the document's
//! target namespace. Elements from other namespaces stay in the tree (their
//! children may still match) but are invisible to name lookups.

/// Index of an element in the document arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stored element data.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    /// Local name (prefix stripped).
    pub(crate) name: Box<str>,
    /// True if the element is bound to the target namespace.
    pub(crate) in_namespace: bool,
    /// Concatenated direct text content, trimmed.
    pub(crate) text: Option<Box<str>>,
    pub(crate) parent: Option<NodeId>,
    /// Exclusive end of this element's subtree in the arena.
    pub(crate) subtree_end: u32,
}

/// A fully parsed XML document.
#[derive(Clone, Debug)]
pub struct XmlDocument {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) namespace: Box<str>,
}

impl XmlDocument {
    /// The root element. Every successfully parsed document has one.
    pub fn root(&self) -> Element<'_> {
        Element {
            doc: self,
            id: NodeId(0),
        }
    }

    /// The namespace URI this document was matched against.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Total number of elements in the document (any namespace).
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// All target-namespace elements with the given local name, in document order.
    pub fn find_all(&self, name: &str) -> impl Iterator<Item = Element<'_>> {
        self.root().descendants_or_self().filter(move |e| e.is(name))
    }

    /// First target-namespace element with the given local name.
    pub fn find(&self, name: &str) -> Option<Element<'_>> {
        self.find_all(name).next()
    }
}

/// Borrowed handle to one element of an [`XmlDocument`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a XmlDocument,
    id: NodeId,
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("text", &self.text())
            .finish()
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl<'a> Element<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id.index()]
    }

    fn at(&self, index: usize) -> Element<'a> {
        Element {
            doc: self.doc,
            id: NodeId(index as u32),
        }
    }

    /// Local name of the element.
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    /// True if the element is in the target namespace.
    pub fn in_namespace(&self) -> bool {
        self.data().in_namespace
    }

    /// True if this is a target-namespace element with the given local name.
    pub fn is(&self, name: &str) -> bool {
        self.in_namespace() && self.name() == name
    }

    /// Trimmed direct text content; `None` if absent or blank.
    pub fn text(&self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.data().parent.map(|p| self.at(p.index()))
    }

    /// Direct child elements, in document order.
    pub fn children(self) -> impl Iterator<Item = Element<'a>> {
        let doc = self.doc;
        let end = self.data().subtree_end as usize;
        let first = self.id.index() + 1;
        // Hop from sibling to sibling by skipping each child's subtree. The
        // successor is computed eagerly, so it is bounded before it is stored.
        std::iter::successors((first < end).then_some(first), move |&i| {
            let next = doc.nodes[i].subtree_end as usize;
            (next < end).then_some(next)
        })
        .map(move |i| Element {
            doc,
            id: NodeId(i as u32),
        })
    }

    /// All descendants (excluding self), in document order.
    pub fn descendants(self) -> impl Iterator<Item = Element<'a>> {
        let start = self.id.index() + 1;
        let end = self.data().subtree_end as usize;
        (start..end).map(move |i| self.at(i))
    }

    /// Self followed by all descendants, in document order.
    pub fn descendants_or_self(self) -> impl Iterator<Item = Element<'a>> {
        let start = self.id.index();
        let end = self.data().subtree_end as usize;
        (start..end).map(move |i| self.at(i))
    }

    /// First direct child with the given name.
    pub fn child(self, name: &str) -> Option<Element<'a>> {
        self.children().find(|c| c.is(name))
    }

    /// Direct children with the given name.
    pub fn children_named(self, name: &str) -> impl Iterator<Item = Element<'a>> {
        self.children().filter(move |c| c.is(name))
    }

    /// Text of the first direct child with the given name.
    pub fn child_text(self, name: &str) -> Option<&'a str> {
        self.child(name).and_then(|c| c.text())
    }

    /// The element's `SHORT-NAME`, if present and non-blank.
    pub fn short_name(self) -> Option<&'a str> {
        self.child_text(crate::base::constants::tag::SHORT_NAME)
    }

    /// First descendant with the given name.
    pub fn find(self, name: &str) -> Option<Element<'a>> {
        self.descendants().find(|d| d.is(name))
    }

    /// All descendants with the given name, in document order.
    pub fn find_all(self, name: &str) -> impl Iterator<Item = Element<'a>> {
        self.descendants().filter(move |d| d.is(name))
    }

    /// Descendants named `name` whose parent is named `parent`
    /// (the `.//PARENT/NAME` pattern).
    pub fn find_all_under(self, parent: &str, name: &str) -> impl Iterator<Item = Element<'a>> {
        self.find_all(name)
            .filter(move |d| d.parent().is_some_and(|p| p.is(parent)))
    }
}
