//! Concept and reference conversion tests, plus the shared precondition
//! checks for every conversion.

use ditaform::{Document, to_concept, to_reference, to_task, to_task_generated};

fn parse(xml: &str) -> Document {
    Document::parse(xml).expect("test input should parse")
}

const SECTIONED_TOPIC: &str = r#"<topic id="example-topic">
    <title>Topic title</title>
    <body>
        <p>Topic introduction</p>
        <section>
            <title>Section title</title>
            <p>Section body</p>
        </section>
    </body>
</topic>"#;

#[test]
fn non_topic_root_fails_every_conversion() {
    let concept = parse("<concept id=\"c\"><title>Concept title</title></concept>");
    let task = parse("<task id=\"t\"><title>Task title</title></task>");

    for result in [
        to_concept(&concept),
        to_reference(&concept),
        to_task(&task),
        to_task_generated(&task),
    ] {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "ERROR: Not a DITA topic");
    }
}

#[test]
fn sections_not_permitted_in_task_conversions() {
    let topic = parse(SECTIONED_TOPIC);

    for result in [to_task(&topic), to_task_generated(&topic)] {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "ERROR: Section not allowed in a DITA task");
    }
}

#[test]
fn sections_permitted_in_concept_and_reference() {
    let topic = parse(SECTIONED_TOPIC);
    assert!(to_concept(&topic).is_ok());
    assert!(to_reference(&topic).is_ok());
}

#[test]
fn concept_structure() {
    let topic = parse(
        r#"<topic id="example-topic">
    <title>Topic title</title>
    <body>
        <p>Topic body</p>
    </body>
</topic>"#,
    );

    let conversion = to_concept(&topic).unwrap();
    let concept = &conversion.document.root;

    let doctype = conversion.document.doctype.as_ref().unwrap();
    assert_eq!(doctype.public_id, "-//OASIS//DTD DITA Concept//EN");
    assert_eq!(doctype.system_id, "concept.dtd");

    assert_eq!(concept.name, "concept");
    assert_eq!(concept.attr("id"), Some("example-topic"));
    assert_eq!(concept.child("title").unwrap().text_content(), "Topic title");

    let conbody = concept.child("conbody").unwrap();
    assert_eq!(conbody.child("p").unwrap().text_content(), "Topic body");
    assert!(conversion.warnings.is_empty());
}

#[test]
fn reference_structure() {
    let topic = parse(
        r#"<topic id="example-topic">
    <title>Topic title</title>
    <body>
        <p>Topic body</p>
    </body>
</topic>"#,
    );

    let conversion = to_reference(&topic).unwrap();
    let reference = &conversion.document.root;

    let doctype = conversion.document.doctype.as_ref().unwrap();
    assert_eq!(doctype.public_id, "-//OASIS//DTD DITA Reference//EN");
    assert_eq!(doctype.system_id, "reference.dtd");

    assert_eq!(reference.name, "reference");
    assert_eq!(reference.attr("id"), Some("example-topic"));
    assert_eq!(reference.child("title").unwrap().text_content(), "Topic title");

    let refbody = reference.child("refbody").unwrap();
    let section = refbody.child("section").unwrap();
    assert_eq!(section.child("p").unwrap().text_content(), "Topic body");
}

#[test]
fn concept_preserves_child_count_and_order() {
    let topic = parse(concat!(
        "<topic id=\"t\"><title>T</title><body>",
        "<p>1</p><ul><li>2</li></ul><codeblock>3</codeblock><p>4</p>",
        "</body></topic>",
    ));

    let conversion = to_concept(&topic).unwrap();
    let conbody = conversion.document.root.child("conbody").unwrap();

    let names: Vec<_> = conbody.child_elements().map(|el| el.name.clone()).collect();
    assert_eq!(names, ["p", "ul", "codeblock", "p"]);
}

#[test]
fn reference_wraps_all_children_in_order() {
    let topic = parse(concat!(
        "<topic id=\"t\"><title>T</title><body>",
        "<p>1</p><table/><p>3</p>",
        "</body></topic>",
    ));

    let conversion = to_reference(&topic).unwrap();
    let section = conversion
        .document
        .root
        .child("refbody")
        .unwrap()
        .child("section")
        .unwrap();

    let names: Vec<_> = section.child_elements().map(|el| el.name.clone()).collect();
    assert_eq!(names, ["p", "table", "p"]);
}

#[test]
fn head_passthrough_includes_shortdesc_and_prolog() {
    let topic = parse(concat!(
        "<topic id=\"t\" outputclass=\"concept\" xml:lang=\"en-us\">",
        "<title>Title <b>bold</b></title>",
        "<shortdesc>A short description.</shortdesc>",
        "<prolog><author>Someone</author></prolog>",
        "<body><p>Body</p></body>",
        "</topic>",
    ));

    let conversion = to_concept(&topic).unwrap();
    let concept = &conversion.document.root;

    assert_eq!(concept.attr("outputclass"), Some("concept"));
    assert_eq!(concept.attr("xml:lang"), Some("en-us"));
    assert_eq!(concept.child("title").unwrap().text_content(), "Title bold");
    assert_eq!(
        concept.child("shortdesc").unwrap().text_content(),
        "A short description."
    );
    assert_eq!(
        concept.child("prolog").unwrap().child("author").unwrap().text_content(),
        "Someone"
    );

    // Head content comes before the body in the output.
    let names: Vec<_> = concept.child_elements().map(|el| el.name.clone()).collect();
    assert_eq!(names, ["title", "shortdesc", "prolog", "conbody"]);
}

#[test]
fn titleless_topic_converts_without_error() {
    // A missing title is not a precondition failure; the output simply
    // has no title either.
    let topic = parse("<topic id=\"t\"><body><p>Body</p></body></topic>");

    let conversion = to_concept(&topic).unwrap();
    let concept = &conversion.document.root;
    assert!(concept.child("title").is_none());
    assert_eq!(
        concept.child("conbody").unwrap().child("p").unwrap().text_content(),
        "Body"
    );
}

#[test]
fn related_links_copied_through() {
    let topic = parse(concat!(
        "<topic id=\"t\"><title>T</title><body><p>Body</p></body>",
        "<related-links><link href=\"other.dita\"/></related-links>",
        "</topic>",
    ));

    let conversion = to_concept(&topic).unwrap();
    let links = conversion.document.root.child("related-links").unwrap();
    assert_eq!(links.child("link").unwrap().attr("href"), Some("other.dita"));
}

#[test]
fn serialized_output_declares_target_doctype() {
    let topic = parse("<topic id=\"t\"><title>T</title><body><p>x</p></body></topic>");

    let xml = to_reference(&topic).unwrap().document.to_xml();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(xml.contains(
        "<!DOCTYPE reference PUBLIC \"-//OASIS//DTD DITA Reference//EN\" \"reference.dtd\">"
    ));
}
