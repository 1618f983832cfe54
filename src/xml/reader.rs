//! Builds an [`XmlDocument`] from raw bytes with quick-xml's namespace reader.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

use super::document::{NodeData, NodeId, XmlDocument};
use crate::error::ParseError;

/// Parse `input` into an element tree, marking elements bound to `namespace`.
///
/// The whole document is read eagerly. Any well-formedness violation is a
/// [`ParseError`]; namespace mismatches are not (foreign elements are simply
/// invisible to queries).
pub fn parse_document(input: &[u8], namespace: &str) -> Result<XmlDocument, ParseError> {
    TreeBuilder::new(namespace).build(input)
}

/// Open element on the builder stack.
struct OpenElement {
    index: usize,
    text: String,
}

struct TreeBuilder<'ns> {
    namespace: &'ns str,
    nodes: Vec<NodeData>,
    stack: Vec<OpenElement>,
}

impl<'ns> TreeBuilder<'ns> {
    fn new(namespace: &'ns str) -> Self {
        Self {
            namespace,
            nodes: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn build(mut self, input: &[u8]) -> Result<XmlDocument, ParseError> {
        let mut reader = NsReader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            let position = reader.buffer_position();
            match reader.read_resolved_event_into(&mut buf) {
                Ok((ns, Event::Start(ref e))) => {
                    let in_namespace = self.is_target(&ns);
                    self.open(e, in_namespace, position)?;
                }
                Ok((ns, Event::Empty(ref e))) => {
                    let in_namespace = self.is_target(&ns);
                    self.open(e, in_namespace, position)?;
                    self.close(position)?;
                }
                Ok((_, Event::End(_))) => {
                    self.close(position)?;
                }
                Ok((_, Event::Text(ref t))) => {
                    let text = t.unescape().map_err(|e| {
                        ParseError::new(position, format!("invalid text content: {e}"))
                    })?;
                    self.append_text(&text, position)?;
                }
                Ok((_, Event::CData(ref c))) => {
                    let text = std::str::from_utf8(c).map_err(|e| {
                        ParseError::new(position, format!("invalid UTF-8 in CDATA: {e}"))
                    })?;
                    self.append_text(text, position)?;
                }
                Ok((_, Event::Eof)) => break,
                Err(e) => {
                    return Err(ParseError::new(reader.error_position(), e.to_string()));
                }
                // Declarations, comments, processing instructions, doctype
                Ok(_) => {}
            }
            buf.clear();
        }

        let end = reader.buffer_position();
        if let Some(open) = self.stack.last() {
            return Err(ParseError::new(
                end,
                format!(
                    "unexpected end of document: element <{}> is not closed",
                    self.nodes[open.index].name
                ),
            ));
        }
        if self.nodes.is_empty() {
            return Err(ParseError::new(end, "document has no root element"));
        }

        Ok(XmlDocument {
            nodes: self.nodes,
            namespace: self.namespace.into(),
        })
    }

    fn is_target(&self, ns: &ResolveResult<'_>) -> bool {
        matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == self.namespace.as_bytes())
    }

    fn open(&mut self, e: &BytesStart<'_>, in_namespace: bool, position: u64) -> Result<(), ParseError> {
        if self.stack.is_empty() && !self.nodes.is_empty() {
            return Err(ParseError::new(position, "multiple root elements"));
        }

        let local = e.local_name();
        let name = std::str::from_utf8(local.as_ref())
            .map_err(|err| ParseError::new(position, format!("invalid tag name: {err}")))?;

        let index = self.nodes.len();
        self.nodes.push(NodeData {
            name: name.into(),
            in_namespace,
            text: None,
            parent: self.stack.last().map(|open| NodeId(open.index as u32)),
            subtree_end: index as u32 + 1,
        });
        self.stack.push(OpenElement {
            index,
            text: String::new(),
        });
        Ok(())
    }

    fn close(&mut self, position: u64) -> Result<(), ParseError> {
        let open = self
            .stack
            .pop()
            .ok_or_else(|| ParseError::new(position, "end tag without matching start tag"))?;

        let end = self.nodes.len() as u32;
        let node = &mut self.nodes[open.index];
        node.subtree_end = end;
        let text = open.text.trim();
        if !text.is_empty() {
            node.text = Some(text.into());
        }
        Ok(())
    }

    fn append_text(&mut self, text: &str, position: u64) -> Result<(), ParseError> {
        match self.stack.last_mut() {
            Some(open) => {
                open.text.push_str(text);
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(ParseError::new(position, "text outside the root element")),
        }
    }
}
