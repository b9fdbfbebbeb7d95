/*
Outline view for debugging: one line per node, drawn with box characters.

`termtree::Tree` is a foreign type, so the conversion lives in a trait
implemented on our side instead of an inherent impl.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{AttributeOrder, Element, Node};

pub trait ToOutline {
    fn to_outline(&self) -> Tree<String>;
}

fn element_label(element: &Element) -> String {
    let mut label = element.kind().to_string();
    for (name, value) in element.attributes().ordered(AttributeOrder::Lexical) {
        label.push_str(&format!(" {name}={value:?}"));
    }
    label
}

impl ToOutline for Element {
    #[instrument(level = "debug", skip(self), fields(kind = self.kind()))]
    fn to_outline(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_outline()).collect();
        Tree::new(element_label(self)).with_leaves(leaves)
    }
}

impl ToOutline for Node {
    fn to_outline(&self) -> Tree<String> {
        match self {
            Node::Element(element) => element.to_outline(),
            Node::Text(text) => Tree::new(format!("{text:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_labels_kinds_attributes_and_text() {
        let mut root = Element::new("doc");
        let section = root.attach(Element::new("section"));
        section.set_attr("id", "intro");
        section.push_text("hello".to_string());

        let outline = root.to_outline();
        assert_eq!(outline.root, "doc");
        assert_eq!(outline.leaves.len(), 1);
        assert_eq!(outline.leaves[0].root, "section id=\"intro\"");
        assert_eq!(outline.leaves[0].leaves[0].root, "\"hello\"");

        let drawn = outline.to_string();
        assert!(drawn.starts_with("doc\n"));
        assert!(drawn.contains("section id=\"intro\""));
    }
}
