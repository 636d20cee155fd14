//! Related-links extraction.

use crate::dom::Element;

/// Build a related-links element from an unordered list.
///
/// Each list item must contain exactly one cross-reference and nothing
/// else. A qualifying item becomes a link carrying the cross-reference's
/// href, format, and scope attributes; inline content becomes the link
/// text. Anything else is skipped with a warning.
pub(crate) fn build_related_links(list: &Element, warnings: &mut Vec<String>) -> Element {
    let mut links = Element::new("related-links");

    for item in list.child_elements().filter(|el| el.name == "li") {
        match single_xref(item) {
            Some(xref) => links.push_element(build_link(xref)),
            None => {
                warnings
                    .push("Unexpected content found in related-links, skipping...".to_string());
            }
        }
    }

    links
}

/// The item's only significant child, if it is a cross-reference.
fn single_xref(item: &Element) -> Option<&Element> {
    let mut significant = item.significant_children();
    let first = significant.next()?;
    if significant.next().is_some() {
        return None;
    }
    first.as_element().filter(|el| el.name == "xref")
}

fn build_link(xref: &Element) -> Element {
    let mut link = Element::new("link");

    for name in ["href", "format", "scope"] {
        if let Some(value) = xref.attr(name) {
            link.set_attr(name, value);
        }
    }

    if xref.significant_children().next().is_some() {
        let mut linktext = Element::new("linktext");
        linktext.children = xref.children.clone();
        link.push_element(linktext);
    }

    link
}
