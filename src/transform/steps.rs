//! Shared step and substep builder.
//!
//! Converts a DITA list into a steps container: the leading paragraph-like
//! content of each item becomes the step command, nested lists become
//! substep groups, and every other contiguous run of content becomes one
//! info block. Source order is preserved exactly, so info blocks and
//! substep groups interleave the way they did in the item.

use crate::dom::{Element, Node};

/// Block-level element names. Anything else found at the start of a list
/// item is treated as inline command content.
const BLOCK_NAMES: &[&str] = &[
    "p",
    "ol",
    "ul",
    "sl",
    "dl",
    "lq",
    "pre",
    "lines",
    "note",
    "fig",
    "image",
    "object",
    "table",
    "simpletable",
    "codeblock",
    "screen",
    "msgblock",
    "example",
    "div",
];

fn is_list(element: &Element) -> bool {
    element.name == "ol" || element.name == "ul"
}

fn is_block(element: &Element) -> bool {
    BLOCK_NAMES.contains(&element.name.as_str())
}

/// Nesting level of the item being converted. Substeps are one level deep:
/// lists nested inside a substep are not converted again and fall into the
/// substep's info content verbatim.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Step,
    Substep,
}

/// Convert a list into a steps container with the given name (`steps`,
/// `steps-unordered`).
pub(crate) fn build_steps(list: &Element, container: &str) -> Element {
    let mut steps = Element::new(container);
    for item in list.child_elements().filter(|el| el.name == "li") {
        steps.push_element(build_step(item, Level::Step));
    }
    steps
}

fn build_step(item: &Element, level: Level) -> Element {
    let mut step = Element::new(match level {
        Level::Step => "step",
        Level::Substep => "substep",
    });

    let nodes = &item.children;
    let mut index = 0;

    while index < nodes.len() && nodes[index].is_insignificant() {
        index += 1;
    }

    // Command: a leading paragraph, or the leading run of inline content.
    // An item that opens with a non-paragraph block has no command.
    match nodes.get(index) {
        Some(Node::Element(el)) if el.name == "p" => {
            let mut cmd = Element::new("cmd");
            cmd.attributes = el.attributes.clone();
            cmd.children = el.children.clone();
            step.push_element(cmd);
            index += 1;
        }
        Some(Node::Element(el)) if is_block(el) => {}
        Some(_) => {
            let mut cmd = Element::new("cmd");
            while index < nodes.len() {
                match &nodes[index] {
                    Node::Element(el) if is_block(el) => break,
                    node => {
                        cmd.children.push(node.clone());
                        index += 1;
                    }
                }
            }
            step.push_element(cmd);
        }
        None => {}
    }

    // Remaining content, grouped by contiguous run: nested lists become
    // substep groups, everything between them becomes info blocks.
    let mut info_run: Vec<Node> = Vec::new();
    for node in &nodes[index..] {
        match node {
            Node::Element(el) if is_list(el) && level == Level::Step => {
                flush_info(&mut step, &mut info_run);
                step.push_element(build_substeps(el));
            }
            node => info_run.push(node.clone()),
        }
    }
    flush_info(&mut step, &mut info_run);

    step
}

fn build_substeps(list: &Element) -> Element {
    let mut substeps = Element::new("substeps");
    for item in list.child_elements().filter(|el| el.name == "li") {
        substeps.push_element(build_step(item, Level::Substep));
    }
    substeps
}

fn flush_info(step: &mut Element, run: &mut Vec<Node>) {
    if run.iter().any(|node| !node.is_insignificant()) {
        let mut info = Element::new("info");
        info.children = std::mem::take(run);
        step.push_element(info);
    } else {
        run.clear();
    }
}
