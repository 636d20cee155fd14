//! Topic to task conversion (ordered-list based).
//!
//! The body is partitioned around its first top-level ordered list: content
//! before it becomes the task context, the list becomes the steps, and
//! content after it becomes the result. Any further top-level ordered list
//! lands in the result verbatim.

use crate::dom::{Document, Element, Node};
use crate::error::Result;

use super::steps::build_steps;
use super::{
    Conversion, all_insignificant, copy_head, copy_related_links, require_no_sections,
    require_topic, task_doctype,
};

/// Convert a generic topic into a task.
pub fn to_task(doc: &Document) -> Result<Conversion> {
    let topic = require_topic(doc)?;
    require_no_sections(topic)?;

    let mut task = Element::new("task");
    copy_head(topic, &mut task);

    if let Some(body) = topic.child("body") {
        let mut taskbody = Element::new("taskbody");
        taskbody.attributes = body.attributes.clone();

        match body.children.iter().position(|node| node.is_element_named("ol")) {
            Some(position) => {
                push_wrapped(&mut taskbody, "context", &body.children[..position]);

                if let Some(list) = body.children[position].as_element() {
                    taskbody.push_element(build_steps(list, "steps"));
                }

                push_wrapped(&mut taskbody, "result", &body.children[position + 1..]);
            }
            // No ordered list: the whole body is context and the task has
            // no steps.
            None => push_wrapped(&mut taskbody, "context", &body.children),
        }

        task.push_element(taskbody);
    }

    copy_related_links(topic, &mut task);

    Ok(Conversion::new(Document {
        doctype: Some(task_doctype()),
        root: task,
    }))
}

/// Wrap a run of body children in a container, unless the run is empty.
fn push_wrapped(taskbody: &mut Element, name: &str, nodes: &[Node]) {
    if all_insignificant(nodes) {
        return;
    }
    let mut wrapper = Element::new(name);
    wrapper.children = nodes.to_vec();
    taskbody.push_element(wrapper);
}
