//! Topic to task conversion for heading-convention topics.
//!
//! Authors writing in tools without task semantics mark up a task as a
//! generic topic with labeled heading paragraphs ("Prerequisites",
//! "Procedure", ...). This conversion scans the body in document order,
//! classifies content into semantic zones by those headings, and emits a
//! fully structured task: prereq, context, steps, result,
//! tasktroubleshooting, postreq, and related-links.

use crate::dom::{Document, Element, Node};
use crate::error::Result;

use super::links::build_related_links;
use super::steps::build_steps;
use super::{
    Conversion, all_insignificant, copy_head, copy_related_links, require_no_sections,
    require_topic, task_doctype,
};

/// Semantic zones of a generated task body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Prerequisites,
    Procedure,
    Verification,
    Troubleshooting,
    NextSteps,
    RelatedResources,
}

/// Map a recognized heading label to its zone. Matching is exact and
/// case-sensitive.
fn zone_for_label(label: &str) -> Option<Zone> {
    match label {
        "Prerequisites" => Some(Zone::Prerequisites),
        "Procedure" => Some(Zone::Procedure),
        "Verification" => Some(Zone::Verification),
        "Troubleshooting" => Some(Zone::Troubleshooting),
        "Next steps" => Some(Zone::NextSteps),
        "Additional resources" | "Related information" => Some(Zone::RelatedResources),
        _ => None,
    }
}

/// Buffered content per zone. `None` means the zone's heading never
/// appeared, which is distinct from a heading followed by nothing.
#[derive(Default)]
struct ZoneBuffers {
    prerequisites: Option<Vec<Node>>,
    procedure: Option<Vec<Node>>,
    verification: Option<Vec<Node>>,
    troubleshooting: Option<Vec<Node>>,
    next_steps: Option<Vec<Node>>,
    related: Option<Vec<Node>>,
}

impl ZoneBuffers {
    fn open(&mut self, zone: Zone) -> &mut Vec<Node> {
        let slot = match zone {
            Zone::Prerequisites => &mut self.prerequisites,
            Zone::Procedure => &mut self.procedure,
            Zone::Verification => &mut self.verification,
            Zone::Troubleshooting => &mut self.troubleshooting,
            Zone::NextSteps => &mut self.next_steps,
            Zone::RelatedResources => &mut self.related,
        };
        slot.get_or_insert_with(Vec::new)
    }
}

/// Convert a heading-convention topic into a fully structured task.
pub fn to_task_generated(doc: &Document) -> Result<Conversion> {
    let topic = require_topic(doc)?;
    require_no_sections(topic)?;

    let mut warnings = Vec::new();

    // Scan the body in document order. Exactly one zone is open at a time;
    // each recognized heading closes the previous zone and opens its own.
    let mut context: Vec<Node> = Vec::new();
    let mut zones = ZoneBuffers::default();
    let mut current: Option<Zone> = None;

    if let Some(body) = topic.child("body") {
        for node in &body.children {
            if let Some(label) = heading_label(node) {
                match zone_for_label(&label) {
                    Some(zone) => {
                        zones.open(zone);
                        current = Some(zone);
                    }
                    None => {
                        warnings.push(format!("Unsupported title '{label}' found, skipping..."));
                    }
                }
                continue;
            }

            match current {
                Some(zone) => zones.open(zone).push(node.clone()),
                // Content before the first heading always becomes context.
                None => context.push(node.clone()),
            }
        }
    }

    let mut task = Element::new("task");
    copy_head(topic, &mut task);

    if let Some(body) = topic.child("body") {
        let mut taskbody = Element::new("taskbody");
        taskbody.attributes = body.attributes.clone();

        if let Some(buffer) = &zones.prerequisites
            && let Some(list) = extract_list(buffer, &["ul"], Wording::Steps, &mut warnings)
        {
            taskbody.push_element(wrap("prereq", list));
        }

        if !all_insignificant(&context) {
            let mut wrapper = Element::new("context");
            wrapper.children = context;
            taskbody.push_element(wrapper);
        }

        if let Some(buffer) = &zones.procedure
            && let Some(list) = extract_list(buffer, &["ol", "ul"], Wording::Steps, &mut warnings)
        {
            // An unordered procedure still converts, into unordered steps.
            let container = if list.name == "ol" { "steps" } else { "steps-unordered" };
            taskbody.push_element(build_steps(list, container));
        }

        if let Some(buffer) = &zones.verification
            && let Some(list) = extract_list(buffer, &["ul"], Wording::Steps, &mut warnings)
        {
            taskbody.push_element(wrap("result", list));
        }

        if let Some(buffer) = &zones.troubleshooting
            && let Some(list) = extract_list(buffer, &["ol"], Wording::Steps, &mut warnings)
        {
            taskbody.push_element(wrap("tasktroubleshooting", list));
        }

        if let Some(buffer) = &zones.next_steps
            && let Some(list) = extract_list(buffer, &["ul"], Wording::Steps, &mut warnings)
        {
            taskbody.push_element(wrap("postreq", list));
        }

        task.push_element(taskbody);

        // Related links are siblings of the task body, not nested in it.
        if let Some(buffer) = &zones.related
            && let Some(list) = extract_list(buffer, &["ul"], Wording::RelatedLinks, &mut warnings)
        {
            task.push_element(build_related_links(list, &mut warnings));
        }
    }

    copy_related_links(topic, &mut task);

    Ok(Conversion {
        document: Document {
            doctype: Some(task_doctype()),
            root: task,
        },
        warnings,
    })
}

/// The label of a zone-heading marker: a paragraph whose outputclass marks
/// it as a title. The label is the paragraph's trimmed text.
fn heading_label(node: &Node) -> Option<String> {
    let element = node.as_element()?;
    if element.name == "p" && element.attr("outputclass") == Some("title") {
        Some(element.text_content().trim().to_string())
    } else {
        None
    }
}

/// Which message templates a zone uses.
#[derive(Clone, Copy)]
enum Wording {
    Steps,
    RelatedLinks,
}

impl Wording {
    fn skip_label(self) -> &'static str {
        match self {
            Wording::Steps => "steps",
            Wording::RelatedLinks => "related-links",
        }
    }

    fn empty_label(self) -> &'static str {
        match self {
            Wording::Steps => "steps",
            Wording::RelatedLinks => "related links",
        }
    }
}

/// Pull the single expected list out of a zone buffer.
///
/// Diagnostics, in priority order: stray non-list content warns and is
/// dropped while the list is still processed; extra qualifying lists warn
/// and only the first is kept; no qualifying list warns and the zone is
/// omitted.
fn extract_list<'a>(
    buffer: &'a [Node],
    kinds: &[&str],
    wording: Wording,
    warnings: &mut Vec<String>,
) -> Option<&'a Element> {
    let mut lists: Vec<&Element> = Vec::new();
    let mut stray = false;

    for node in buffer.iter().filter(|node| !node.is_insignificant()) {
        match node.as_element() {
            Some(el) if kinds.contains(&el.name.as_str()) => lists.push(el),
            _ => stray = true,
        }
    }

    if stray {
        warnings.push(format!(
            "Non-list elements found in {}, skipping...",
            wording.skip_label()
        ));
    }
    if lists.len() > 1 {
        warnings.push(format!(
            "Extra list elements found in {}, skipping...",
            wording.skip_label()
        ));
    }
    if lists.is_empty() {
        warnings.push(format!(
            "No list elements found in {}",
            wording.empty_label()
        ));
        return None;
    }

    Some(lists[0])
}

/// Wrap a list verbatim in a zone container.
fn wrap(name: &str, list: &Element) -> Element {
    let mut wrapper = Element::new(name);
    wrapper.push_element(list.clone());
    wrapper
}
