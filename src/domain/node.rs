use std::borrow::Cow;

use tracing::instrument;

use crate::domain::attributes::Attributes;
use crate::domain::traverse::{PostOrderIterator, TreeIterator};

/// A single entry in an element's child sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element with its own kind, attributes and children
    Element(Element),
    /// Literal text, emitted verbatim
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Element(_) => None,
            Node::Text(text) => Some(text),
        }
    }
}

/// Element of a markup tree.
///
/// Children are owned by value, so an element belongs to exactly one parent
/// and the tree cannot contain cycles. Outside of a [`Scope`](crate::Scope)
/// an element only exposes read access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, fixed at creation
    kind: Cow<'static, str>,
    /// Attribute mapping, last write wins
    attributes: Attributes,
    /// Child sequence in document order
    children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(kind: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text leaves.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub(crate) fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    pub(crate) fn push_text(&mut self, text: String) {
        self.children.push(Node::Text(text));
    }

    /// Moves a completed child into the child sequence and hands back access to it.
    pub(crate) fn attach(&mut self, child: Element) -> &mut Element {
        self.children.push(Node::Element(child));
        match self.children.last_mut() {
            Some(Node::Element(attached)) => attached,
            _ => unreachable!("last child is the element pushed above"),
        }
    }

    /// Number of element levels; a childless element has depth 1.
    #[instrument(level = "debug", skip(self), fields(kind = %self.kind))]
    pub fn depth(&self) -> usize {
        1 + self
            .child_elements()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    /// Depth-first pre-order walk over all nodes below this element.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Depth-first post-order walk over all nodes below this element.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Concatenated text leaves in document order.
    pub fn text_content(&self) -> String {
        self.iter().filter_map(Node::as_text).collect()
    }

    /// This element and all descendant elements of the given kind, in pre-order.
    pub fn find_all<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        std::iter::once(self)
            .chain(self.iter().filter_map(Node::as_element))
            .filter(move |element| element.kind() == kind)
    }
}
