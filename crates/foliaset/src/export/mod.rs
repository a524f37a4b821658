//! Exporters over a parsed set tree
//!
//! - `graph`: triples, in document order
//! - `json`: canonical nested map, classes ordered by label

pub mod graph;
pub mod json;

pub use graph::export_graph;
pub use json::{class_to_json, set_to_json};
