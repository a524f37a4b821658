//! Legacy XML set definition parser
//!
//! Accepted structure (all elements in the `NSFOLIA` namespace):
//!
//! ```text
//! set      -> (class | subset | constraint)*
//! subset   -> (class | constraint)*
//! class    -> class*
//! ```
//!
//! Elements from other namespaces are skipped. Any other element in the
//! set definition namespace aborts the parse.

use crate::model::{ClassNode, SetNode, SetType};
use crate::vocabulary::{NSFOLIA, XML_NAMESPACE};
use crate::xml::{self, Element};
use crate::{Result, SetDefinitionError};
use std::collections::HashSet;
use tracing::warn;

/// Parse raw document bytes into a set tree
pub fn parse_document(bytes: &[u8]) -> Result<SetNode> {
    let root = xml::parse(bytes)?;
    if !root.is(NSFOLIA, "set") {
        return Err(SetDefinitionError::Structural(format!(
            "not a set definition, unexpected root tag: {}",
            root.tag()
        )));
    }
    parse_set(&root)
}

/// Parse a root `set` element
pub fn parse_set(element: &Element) -> Result<SetNode> {
    parse_set_element(element, None)
}

fn parse_set_element(element: &Element, parent: Option<&str>) -> Result<SetNode> {
    let expected = if parent.is_some() { "subset" } else { "set" };
    if !element.is(NSFOLIA, expected) {
        return Err(SetDefinitionError::Structural(format!(
            "expected {} tag, got {}",
            expected,
            element.tag()
        )));
    }

    let id = identifier(element)?;
    let set_type = match element.attribute(None, "type") {
        Some(literal) => SetType::from_literal(literal).ok_or_else(|| {
            SetDefinitionError::Structural(format!("invalid set type '{}' on {} {}", literal, expected, id))
        })?,
        None => SetType::Mixed,
    };

    let mut set = SetNode::new(id, set_type);
    set.label = element.attribute(None, "label").map(str::to_string);
    set.parent = parent.map(str::to_string);

    for child in &element.children {
        if !child.in_namespace(NSFOLIA) {
            continue;
        }
        match child.name.as_str() {
            "class" => set.classes.push(parse_class(child)?),
            "subset" if parent.is_none() => set.subsets.push(parse_set_element(child, Some(&set.id))?),
            "constraint" => {}
            _ => {
                return Err(SetDefinitionError::Structural(format!(
                    "invalid tag in set definition {}: {}",
                    set.id,
                    child.tag()
                )))
            }
        }
    }

    warn_duplicates(&set.id, &set.classes);
    Ok(set)
}

/// Parse a `class` element and its nested classes
pub fn parse_class(element: &Element) -> Result<ClassNode> {
    if !element.is(NSFOLIA, "class") {
        return Err(SetDefinitionError::Structural(format!(
            "expected class tag, got {}",
            element.tag()
        )));
    }

    let id = identifier(element)?;
    let label = element.attribute(None, "label").unwrap_or_default();

    let mut subclasses = Vec::new();
    for child in &element.children {
        if !child.in_namespace(NSFOLIA) {
            continue;
        }
        if child.name != "class" {
            return Err(SetDefinitionError::Structural(format!(
                "invalid tag in class definition {}: {}",
                id,
                child.tag()
            )));
        }
        subclasses.push(parse_class(child)?);
    }

    warn_duplicates(&id, &subclasses);
    Ok(ClassNode::new(id, label).with_subclasses(subclasses))
}

/// `xml:id`, falling back to an unqualified `id`
fn identifier(element: &Element) -> Result<String> {
    let id = element
        .attribute(Some(XML_NAMESPACE), "id")
        .or_else(|| element.attribute(None, "id"))
        .ok_or_else(|| SetDefinitionError::Structural(format!("{} element without id", element.name)))?;
    if id.is_empty() {
        return Err(SetDefinitionError::Structural(format!("{} element with empty id", element.name)));
    }
    Ok(id.to_string())
}

// Duplicates are kept; consumers must tolerate them.
fn warn_duplicates(owner: &str, classes: &[ClassNode]) {
    let mut seen = HashSet::new();
    for class in classes {
        if !seen.insert(class.id.as_str()) {
            warn!("Duplicate class id '{}' under '{}'", class.id, owner);
        }
    }
}
