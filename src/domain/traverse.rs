use tracing::instrument;

use crate::domain::node::{Element, Node};

/// Pre-order iterator over the nodes below an element (the element itself excluded).
pub struct TreeIterator<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> TreeIterator<'a> {
    #[instrument(level = "trace", skip(root), fields(kind = root.kind()))]
    pub(crate) fn new(root: &'a Element) -> Self {
        // Push children in reverse order for left-to-right traversal
        let stack = root.children().iter().rev().collect();
        Self { stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Node::Element(element) = current {
            self.stack.extend(element.children().iter().rev());
        }
        Some(current)
    }
}

/// Post-order iterator: every node is yielded after all of its children.
pub struct PostOrderIterator<'a> {
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    #[instrument(level = "trace", skip(root), fields(kind = root.kind()))]
    pub(crate) fn new(root: &'a Element) -> Self {
        let stack = root.children().iter().rev().map(|n| (n, false)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            match current {
                Node::Element(element) if !visited => {
                    self.stack.push((current, true));
                    for child in element.children().iter().rev() {
                        self.stack.push((child, false));
                    }
                }
                _ => return Some(current),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(node: &Node) -> String {
        match node {
            Node::Element(e) => e.kind().to_string(),
            Node::Text(t) => format!("'{t}'"),
        }
    }

    fn sample() -> Element {
        // doc [ a [ 'x' ], b [ c ], 'y' ]
        let mut root = Element::new("doc");
        root.attach(Element::new("a")).push_text("x".to_string());
        root.attach(Element::new("b")).attach(Element::new("c"));
        root.push_text("y".to_string());
        root
    }

    #[test]
    fn test_preorder_visits_parent_before_children() {
        let labels: Vec<String> = sample().iter().map(label).collect();
        assert_eq!(labels, vec!["a", "'x'", "b", "c", "'y'"]);
    }

    #[test]
    fn test_postorder_visits_children_before_parent() {
        let labels: Vec<String> = sample().iter_postorder().map(label).collect();
        assert_eq!(labels, vec!["'x'", "a", "c", "b", "'y'"]);
    }

    #[test]
    fn test_empty_element_yields_nothing() {
        let root = Element::new("doc");
        assert_eq!(root.iter().count(), 0);
        assert_eq!(root.iter_postorder().count(), 0);
    }
}
