//! Minimal XML document tree for DITA conversion.
//!
//! - Node types: tagged-variant tree of elements, text, and comments
//! - Parser: builds the tree from a `quick-xml` event stream
//! - Writer: serializes the tree with XML declaration and DOCTYPE

mod node;
mod parser;
mod writer;

pub use node::{Doctype, Document, Element, Node};
pub use parser::{parse_document, strip_bom};
pub use writer::serialize;
