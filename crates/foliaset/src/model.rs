//! Set definition tree

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether identifiers outside the declared classes are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Open,
    Closed,
    #[default]
    Mixed,
}

impl SetType {
    /// Parse the `type` attribute literal. Unknown literals yield `None`.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "open" => Some(SetType::Open),
            "closed" => Some(SetType::Closed),
            "mixed" => Some(SetType::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::Open => "open",
            SetType::Closed => "closed",
            SetType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One class of a set, with its nested subclasses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    pub id: String,
    /// Empty when the document gives no label
    pub label: String,
    pub subclasses: Vec<ClassNode>,
}

impl ClassNode {
    pub fn new<I: Into<String>, L: Into<String>>(id: I, label: L) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subclasses: Vec::new(),
        }
    }

    pub fn with_subclasses(mut self, subclasses: Vec<ClassNode>) -> Self {
        self.subclasses = subclasses;
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassNode> {
        self.subclasses.iter()
    }

    /// This class plus all of its descendants
    pub fn count(&self) -> usize {
        1 + self.subclasses.iter().map(ClassNode::count).sum::<usize>()
    }
}

impl<'a> IntoIterator for &'a ClassNode {
    type Item = &'a ClassNode;
    type IntoIter = std::slice::Iter<'a, ClassNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A set, or a subset of the root set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetNode {
    pub id: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub set_type: SetType,
    pub classes: Vec<ClassNode>,
    pub subsets: Vec<SetNode>,
    /// Id of the enclosing set; `None` for the root
    pub parent: Option<String>,
}

impl SetNode {
    pub fn new<I: Into<String>>(id: I, set_type: SetType) -> Self {
        Self {
            id: id.into(),
            label: None,
            set_type,
            classes: Vec::new(),
            subsets: Vec::new(),
            parent: None,
        }
    }

    pub fn is_subset(&self) -> bool {
        self.parent.is_some()
    }

    /// Label, treating an empty label as absent
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    pub fn subset(&self, id: &str) -> Option<&SetNode> {
        self.subsets.iter().find(|s| s.id == id)
    }

    /// Number of classes at every depth, subsets excluded
    pub fn class_count(&self) -> usize {
        self.classes.iter().map(ClassNode::count).sum()
    }
}
