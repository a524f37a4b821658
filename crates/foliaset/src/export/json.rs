//! Set tree to canonical JSON
//!
//! Key order is fixed (`id`, `label`, `type`, `subsets`, `classes`,
//! `classorder`). Classes of each set are ordered by label; subclasses keep
//! document order.

use crate::model::{ClassNode, SetNode};
use serde_json::{Map, Value};

/// Canonical JSON for one class and its subclasses
pub fn class_to_json(class: &ClassNode) -> Value {
    let mut node = Map::new();
    node.insert("id".to_string(), Value::String(class.id.clone()));
    node.insert("label".to_string(), Value::String(class.label.clone()));
    node.insert(
        "subclasses".to_string(),
        Value::Array(class.subclasses.iter().map(class_to_json).collect()),
    );
    Value::Object(node)
}

/// Canonical JSON for a set and its subsets. Pure: the tree is not modified.
pub fn set_to_json(set: &SetNode) -> Value {
    let mut node = Map::new();
    node.insert("id".to_string(), Value::String(set.id.clone()));
    if let Some(label) = set.label() {
        node.insert("label".to_string(), Value::String(label.to_string()));
    }
    node.insert("type".to_string(), Value::String(set.set_type.as_str().to_string()));

    let subsets: Map<String, Value> = set
        .subsets
        .iter()
        .map(|subset| (subset.id.clone(), set_to_json(subset)))
        .collect();
    node.insert("subsets".to_string(), Value::Object(subsets));

    // stable: equal labels keep document order
    let mut ordered: Vec<&ClassNode> = set.classes.iter().collect();
    ordered.sort_by(|a, b| a.label.cmp(&b.label));

    let mut classes = Map::new();
    let mut classorder = Vec::with_capacity(ordered.len());
    for class in ordered {
        classes.insert(class.id.clone(), class_to_json(class));
        classorder.push(Value::String(class.id.clone()));
    }
    node.insert("classes".to_string(), Value::Object(classes));
    node.insert("classorder".to_string(), Value::Array(classorder));

    Value::Object(node)
}
