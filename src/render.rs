//! Tree-to-text serialization.
//!
//! Depth-first pre-order. An element emits an opening line, its children one
//! indent unit deeper, then a closing line. A text leaf emits its payload
//! verbatim at the current indent. Every line ends with `\n`. Nothing is
//! escaped.

use std::fmt::{self, Write};

use tracing::instrument;

use crate::config::RenderSettings;
use crate::domain::{Element, Node};

/// Renders with [`RenderSettings::default`].
pub fn render(element: &Element) -> String {
    Renderer::default().render(element)
}

/// Serializes trees according to a fixed set of [`RenderSettings`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[instrument(
        level = "debug",
        skip(self, element),
        fields(kind = element.kind(), order = %self.settings.attribute_order)
    )]
    pub fn render(&self, element: &Element) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render_to(element, &mut out);
        out
    }

    /// Writes the rendering of `element` into `out`.
    pub fn render_to<W: Write>(&self, element: &Element, out: &mut W) -> fmt::Result {
        self.write_element(element, 0, out)
    }

    fn write_element<W: Write>(&self, element: &Element, level: usize, out: &mut W) -> fmt::Result {
        self.write_indent(level, out)?;
        write!(out, "<{}", element.kind())?;
        for (name, value) in element
            .attributes()
            .ordered(self.settings.attribute_order)
        {
            write!(out, " {name}=\"{value}\"")?;
        }
        out.write_str(">\n")?;

        for child in element.children() {
            self.write_node(child, level + 1, out)?;
        }

        self.write_indent(level, out)?;
        writeln!(out, "</{}>", element.kind())
    }

    fn write_node<W: Write>(&self, node: &Node, level: usize, out: &mut W) -> fmt::Result {
        match node {
            Node::Element(element) => self.write_element(element, level, out),
            Node::Text(text) => {
                self.write_indent(level, out)?;
                writeln!(out, "{text}")
            }
        }
    }

    fn write_indent<W: Write>(&self, level: usize, out: &mut W) -> fmt::Result {
        for _ in 0..level {
            out.write_str(&self.settings.indent_unit)?;
        }
        Ok(())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().render_to(self, f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().write_node(self, 0, f)
    }
}
