//! Display node tree.
//!
//! A deliberately small subset of the DOM: elements with ordered attributes
//! and children, and text nodes. Nodes serialize to HTML with text and
//! attribute values escaped.

use std::fmt::Write;

use askama::{Html, MarkupDisplay};

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attribute order is preserved on output.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }
}

/// A node in the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create an element containing a single text node.
    pub fn text_element(tag: &'static str, text: impl Into<String>) -> Self {
        Element::new(tag).with_text(text).into()
    }

    /// The element tag, or `None` for text nodes.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element(element) => Some(element.tag),
            Node::Text(_) => None,
        }
    }

    /// Borrow the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            // Writing into a String cannot fail.
            Node::Text(text) => {
                let _ = write!(out, "{}", MarkupDisplay::new_unsafe(text, Html));
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        name,
                        MarkupDisplay::new_unsafe(value, Html)
                    );
                }
                out.push('>');
                if element.is_void() {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Escape text for use in HTML content or a quoted attribute value.
pub fn escape_html(input: &str) -> String {
    MarkupDisplay::new_unsafe(input, Html).to_string()
}
