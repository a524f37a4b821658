//! # foliaset CLI library
//!
//! Load a set definition from a path or URL and print it as canonical JSON
//! or N-Triples.

pub mod commands;

pub use commands::*;
