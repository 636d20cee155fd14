//! XML serialization from the document tree.

use super::node::{Document, Element, Node};

/// Serialize a [`Document`] to an XML string with the XML declaration and,
/// when present, the DOCTYPE.
pub fn serialize(doc: &Document) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");

    if let Some(ref doctype) = doc.doctype {
        xml.push_str(&format!(
            "<!DOCTYPE {} PUBLIC \"{}\" \"{}\">\n",
            doctype.name, doctype.public_id, doctype.system_id
        ));
    }

    write_element(&mut xml, &doc.root);
    xml.push('\n');
    xml
}

fn write_element(xml: &mut String, element: &Element) {
    xml.push('<');
    xml.push_str(&element.name);

    for (key, value) in &element.attributes {
        xml.push(' ');
        xml.push_str(key);
        xml.push_str("=\"");
        xml.push_str(&escape_xml(value));
        xml.push('"');
    }

    if element.children.is_empty() {
        xml.push_str("/>");
        return;
    }

    xml.push('>');
    for child in &element.children {
        write_node(xml, child);
    }
    xml.push_str("</");
    xml.push_str(&element.name);
    xml.push('>');
}

fn write_node(xml: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(xml, element),
        Node::Text(text) => xml.push_str(&escape_text(text)),
        Node::Comment(comment) => {
            xml.push_str("<!--");
            xml.push_str(comment);
            xml.push_str("-->");
        }
    }
}

/// Escape XML special characters for attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape XML special characters for text content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
