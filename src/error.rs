//! Error types for ditaform operations.

use thiserror::Error;

/// Errors that can occur while parsing or converting a DITA document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The input root element is not a generic DITA topic.
    #[error("ERROR: Not a DITA topic")]
    NotTopic,

    /// The topic body contains a section, which DITA tasks do not allow.
    #[error("ERROR: Section not allowed in a DITA task")]
    SectionInTask,

    #[error("Missing required element: {0}")]
    MissingElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
