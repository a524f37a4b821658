//! FoLiA set definition loader
//!
//! Reads a set definition (a controlled vocabulary made of nested classes and
//! one level of subsets) and exposes it as RDF triples or canonical JSON:
//! - Legacy XML parsing (`legacy`)
//! - Format detection and retrieval (`format`, `resource`)
//! - Native RDF parsing for Turtle, N3, N-Triples and RDF/XML (`native`)
//! - Graph and JSON export (`export`)
//! - Unified entry point (`SetDefinition`)

pub mod config;
pub mod definition;
pub mod export;
pub mod format;
pub mod legacy;
pub mod model;
pub mod native;
pub mod resource;
pub mod vocabulary;
pub mod xml;

pub use config::{LoadOptions, LoaderConfig};
pub use definition::SetDefinition;
pub use export::{export_graph, set_to_json};
pub use format::Format;
pub use model::{ClassNode, SetNode, SetType};

pub use foliaset_core::{GraphStore, Literal, Term, Triple};

use thiserror::Error;

/// Coarse error category, for callers that branch on "why" rather than "what"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Retrieval,
    Structural,
    Syntax,
    Usage,
    NotImplemented,
}

#[derive(Error, Debug)]
pub enum SetDefinitionError {
    #[error("Unable to retrieve {location}: {reason}")]
    Retrieval { location: String, reason: String },

    #[error("Invalid set definition: {0}")]
    Structural(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl SetDefinitionError {
    pub(crate) fn retrieval(location: &str, reason: impl ToString) -> Self {
        SetDefinitionError::Retrieval {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SetDefinitionError::Retrieval { .. } => ErrorKind::Retrieval,
            SetDefinitionError::Structural(_) => ErrorKind::Structural,
            SetDefinitionError::Syntax(_) => ErrorKind::Syntax,
            SetDefinitionError::UnknownFormat(_) => ErrorKind::Usage,
            SetDefinitionError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetDefinitionError>;
