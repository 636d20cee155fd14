//! Topic to concept conversion.

use crate::dom::{Document, Element};
use crate::error::Result;

use super::{Conversion, concept_doctype, copy_head, copy_related_links, require_topic};

/// Convert a generic topic into a concept.
///
/// The body content is carried over verbatim: every body child lands in the
/// concept body unchanged and in original order.
pub fn to_concept(doc: &Document) -> Result<Conversion> {
    let topic = require_topic(doc)?;

    let mut concept = Element::new("concept");
    copy_head(topic, &mut concept);

    if let Some(body) = topic.child("body") {
        let mut conbody = Element::new("conbody");
        conbody.attributes = body.attributes.clone();
        conbody.children = body.children.clone();
        concept.push_element(conbody);
    }

    copy_related_links(topic, &mut concept);

    Ok(Conversion::new(Document {
        doctype: Some(concept_doctype()),
        root: concept,
    }))
}
