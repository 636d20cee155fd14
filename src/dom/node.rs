//! Document tree types.
//!
//! A deliberately small DOM: DITA conversion only needs tag names, ordered
//! attributes, and ordered children. Namespaces, processing instructions,
//! and DTD internals are out of scope.

use crate::error::Result;

/// Document type declaration emitted ahead of the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    /// Root element name (e.g. `task`).
    pub name: String,
    /// Public identifier (e.g. `-//OASIS//DTD DITA Task//EN`).
    pub public_id: String,
    /// System identifier (e.g. `task.dtd`).
    pub system_id: String,
}

impl Doctype {
    pub fn new(name: &str, public_id: &str, system_id: &str) -> Self {
        Self {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }
    }
}

/// A parsed XML document: an optional DOCTYPE plus the root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub doctype: Option<Doctype>,
    pub root: Element,
}

impl Document {
    /// Parse a document from an XML string.
    pub fn parse(input: &str) -> Result<Self> {
        super::parser::parse_document(input)
    }

    /// Serialize the document back to XML, including the XML declaration
    /// and DOCTYPE.
    pub fn to_xml(&self) -> String {
        super::writer::serialize(self)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Get the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Check if this node is an element with the given name.
    pub fn is_element_named(&self, name: &str) -> bool {
        matches!(self, Node::Element(el) if el.name == name)
    }

    /// Whitespace-only text and comments carry no structure. They are
    /// preserved in passthrough content but ignored when classifying
    /// body children.
    pub fn is_insignificant(&self) -> bool {
        match self {
            Node::Text(text) => text.chars().all(char::is_whitespace),
            Node::Comment(_) => true,
            Node::Element(_) => false,
        }
    }
}

/// An element: tag name, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for (key, existing) in &mut self.attributes {
            if key == name {
                *existing = value.to_string();
                return;
            }
        }
        self.attributes.push((name.to_string(), value.to_string()));
    }

    /// Append a child node.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|el| el.name == name)
    }

    /// Iterate over child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Iterate over children that carry structure (skips whitespace-only
    /// text and comments).
    pub fn significant_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|node| !node.is_insignificant())
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(chunk) => text.push_str(chunk),
                Node::Element(el) => el.collect_text(text),
                Node::Comment(_) => {}
            }
        }
    }

    /// Check whether any descendant element has the given name.
    pub fn has_descendant(&self, name: &str) -> bool {
        self.child_elements()
            .any(|el| el.name == name || el.has_descendant(name))
    }
}
