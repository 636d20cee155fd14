//! XML parsing into the document tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

use super::node::{Doctype, Document, Element, Node};

/// Parse an XML string into a [`Document`].
///
/// Text is preserved verbatim, including whitespace between block elements,
/// so that passthrough content survives conversion unchanged. Entity
/// references are resolved to their character values.
pub fn parse_document(input: &str) -> Result<Document> {
    let mut reader = Reader::from_str(input);

    let mut doctype: Option<Doctype> = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Decl(_)) => {}
            Ok(Event::DocType(e)) => {
                doctype = parse_doctype(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e));
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e);
                append(&mut stack, &mut root, Node::Element(element));
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    append(&mut stack, &mut root, Node::Element(element));
                }
            }
            Ok(Event::Text(e)) => {
                append_text(&mut stack, &String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::CData(e)) => {
                append_text(&mut stack, &String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                if let Some(resolved) = resolve_entity(&entity) {
                    append_text(&mut stack, &resolved);
                }
            }
            Ok(Event::Comment(e)) => {
                append(
                    &mut stack,
                    &mut root,
                    Node::Comment(String::from_utf8_lossy(e.as_ref()).into_owned()),
                );
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    let root = root.ok_or_else(|| Error::MissingElement("document root".to_string()))?;
    Ok(Document { doctype, root })
}

/// Strip UTF-8 BOM if present.
pub fn strip_bom(data: &[u8]) -> &[u8] {
    if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &data[3..]
    } else {
        data
    }
}

fn element_from_start(e: &BytesStart) -> Element {
    let mut element = Element::new(&String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(attr.value.as_ref());
        // Store the unescaped value; the writer re-escapes on output.
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(unescaped) => unescaped.into_owned(),
            Err(_) => raw.into_owned(),
        };
        element.attributes.push((key, value));
    }

    element
}

fn append(stack: &mut Vec<Element>, root: &mut Option<Element>, node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if let Node::Element(element) = node
        && root.is_none()
    {
        *root = Some(element);
    }
    // Comments outside the root element are dropped.
}

fn append_text(stack: &mut Vec<Element>, text: &str) {
    let Some(parent) = stack.last_mut() else {
        // Whitespace around the root element carries no content.
        return;
    };

    // Merge with a preceding text node so entity references don't split runs.
    if let Some(Node::Text(existing)) = parent.children.last_mut() {
        existing.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
}

/// Parse a DOCTYPE declaration body, e.g.
/// `topic PUBLIC "-//OASIS//DTD DITA Topic//EN" "topic.dtd"`.
///
/// Only the PUBLIC form is recognized; anything else is ignored since the
/// conversion output always declares its own document type.
fn parse_doctype(content: &str) -> Option<Doctype> {
    let content = content.trim();
    let (name, rest) = content.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("PUBLIC")?;

    let mut quoted = rest.split('"').skip(1).step_by(2);
    let public_id = quoted.next()?;
    let system_id = quoted.next()?;

    Some(Doctype::new(name, public_id, system_id))
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
