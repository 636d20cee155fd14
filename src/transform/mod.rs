//! Topic conversions to the specialized DITA document types.
//!
//! Each conversion is a pure function from a parsed [`Document`] to a new
//! [`Document`]: inspect the input tree, validate its shape against the
//! target type, and build the target structure node by node. Recoverable
//! anomalies are recorded as ordered warnings on the returned
//! [`Conversion`]; structural violations abort with an error.

mod concept;
mod links;
mod reference;
mod steps;
mod task;
mod task_generated;

pub use concept::to_concept;
pub use reference::to_reference;
pub use task::to_task;
pub use task_generated::to_task_generated;

use crate::dom::{Doctype, Document, Element, Node};
use crate::error::{Error, Result};

/// Result of a conversion: the new document plus the warnings recorded
/// while building it, in the order they were encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: Document,
    pub warnings: Vec<String>,
}

impl Conversion {
    fn new(document: Document) -> Self {
        Self { document, warnings: Vec::new() }
    }
}

/// DOCTYPE identities of the specialized output types.
pub(crate) fn concept_doctype() -> Doctype {
    Doctype::new("concept", "-//OASIS//DTD DITA Concept//EN", "concept.dtd")
}

pub(crate) fn reference_doctype() -> Doctype {
    Doctype::new("reference", "-//OASIS//DTD DITA Reference//EN", "reference.dtd")
}

pub(crate) fn task_doctype() -> Doctype {
    Doctype::new("task", "-//OASIS//DTD DITA Task//EN", "task.dtd")
}

/// Check that the document root is a generic topic.
pub(crate) fn require_topic(doc: &Document) -> Result<&Element> {
    if doc.root.name == "topic" {
        Ok(&doc.root)
    } else {
        Err(Error::NotTopic)
    }
}

/// Check that the topic body contains no section element. Sections have no
/// counterpart in the task model.
pub(crate) fn require_no_sections(topic: &Element) -> Result<()> {
    match topic.child("body") {
        Some(body) if body.has_descendant("section") => Err(Error::SectionInTask),
        _ => Ok(()),
    }
}

/// Copy the topic's attributes, title, short description, and prolog onto
/// the output root, verbatim and in that order.
pub(crate) fn copy_head(topic: &Element, out: &mut Element) {
    out.attributes = topic.attributes.clone();

    for name in ["title", "shortdesc", "prolog"] {
        if let Some(child) = topic.child(name) {
            out.push_element(child.clone());
        }
    }
}

/// Copy a related-links child of the source topic, if any, onto the output
/// root after the body.
pub(crate) fn copy_related_links(topic: &Element, out: &mut Element) {
    if let Some(links) = topic.child("related-links") {
        out.push_element(links.clone());
    }
}

/// Check whether a slice of nodes holds any real content.
pub(crate) fn all_insignificant(nodes: &[Node]) -> bool {
    nodes.iter().all(Node::is_insignificant)
}
