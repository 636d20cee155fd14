//! # ditaform
//!
//! Convert generic DITA topics into specialized concept, task, or
//! reference documents.
//!
//! ## Conversions
//!
//! - Concept: body content carried over verbatim
//! - Reference: body content wrapped in a single section
//! - Task: body split into context, steps (from the first ordered list),
//!   and result
//! - Generated task: heading-convention content classified into semantic
//!   zones (prerequisites, procedure, verification, troubleshooting,
//!   next steps, related resources)
//!
//! ## Quick Start
//!
//! ```
//! use ditaform::{Document, to_task};
//!
//! let topic = Document::parse(
//!     r#"<topic id="example">
//!         <title>Example</title>
//!         <body>
//!             <p>Introduction</p>
//!             <ol><li>First step</li><li>Second step</li></ol>
//!         </body>
//!     </topic>"#,
//! )?;
//!
//! let conversion = to_task(&topic)?;
//! for warning in &conversion.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("{}", conversion.document.to_xml());
//! # Ok::<(), ditaform::Error>(())
//! ```
//!
//! Conversions are pure: the same input always yields the same output tree
//! and the same ordered warning log. The library performs no I/O.

pub mod dom;
pub mod error;
pub mod transform;

pub use dom::{Doctype, Document, Element, Node};
pub use error::{Error, Result};
pub use transform::{Conversion, to_concept, to_reference, to_task, to_task_generated};
