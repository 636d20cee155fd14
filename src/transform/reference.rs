//! Topic to reference conversion.

use crate::dom::{Document, Element};
use crate::error::Result;

use super::{Conversion, copy_head, copy_related_links, reference_doctype, require_topic};

/// Convert a generic topic into a reference.
///
/// The reference body holds exactly one section wrapping every body child
/// unchanged, in original order.
pub fn to_reference(doc: &Document) -> Result<Conversion> {
    let topic = require_topic(doc)?;

    let mut reference = Element::new("reference");
    copy_head(topic, &mut reference);

    if let Some(body) = topic.child("body") {
        let mut refbody = Element::new("refbody");
        refbody.attributes = body.attributes.clone();

        let mut section = Element::new("section");
        section.children = body.children.clone();
        refbody.push_element(section);

        reference.push_element(refbody);
    }

    copy_related_links(topic, &mut reference);

    Ok(Conversion::new(Document {
        doctype: Some(reference_doctype()),
        root: reference,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;

    #[test]
    fn test_single_section_wrap() {
        let topic = parse_document(concat!(
            "<topic id=\"t\"><title>T</title><body>",
            "<p>one</p><ul><li>a</li></ul>",
            "</body></topic>",
        ))
        .unwrap();

        let conversion = to_reference(&topic).unwrap();
        let refbody = conversion.document.root.child("refbody").unwrap();

        let sections: Vec<_> = refbody.child_elements().collect();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "section");

        let body = topic.root.child("body").unwrap();
        assert_eq!(sections[0].children, body.children);
    }
}
