//! Minimal namespace-resolved XML element tree
//!
//! Set definitions are small, so the document is read into an owned tree of
//! elements and attributes. Text, comments and processing instructions are
//! dropped.

use crate::vocabulary::XML_NAMESPACE;
use crate::{Result, SetDefinitionError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub namespace: Option<String>,
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, namespace: Option<&str>, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.in_namespace(namespace) && self.name == name
    }

    /// Attribute value by namespace (`None` for unqualified) and local name
    pub fn attribute(&self, namespace: Option<&str>, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == namespace && a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Clark notation: `{namespace}name`
    pub fn tag(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{{{}}}{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

fn syntax<E: std::fmt::Display>(e: E) -> SetDefinitionError {
    SetDefinitionError::Syntax(e.to_string())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes).map(str::to_owned).map_err(syntax)
}

fn resolved_namespace(result: ResolveResult<'_>) -> Result<Option<String>> {
    match result {
        ResolveResult::Bound(ns) => utf8(ns.as_ref()).map(Some),
        ResolveResult::Unbound => Ok(None),
        // the `xml` prefix is implicitly bound
        ResolveResult::Unknown(prefix) if prefix == b"xml" => Ok(Some(XML_NAMESPACE.to_string())),
        ResolveResult::Unknown(prefix) => Err(SetDefinitionError::Syntax(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn build_element<R>(reader: &NsReader<R>, namespace: Option<String>, start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element {
        namespace,
        name: utf8(start.local_name().as_ref())?,
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr.map_err(syntax)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        element.attributes.push(Attribute {
            namespace: resolved_namespace(resolved)?,
            name: utf8(local.as_ref())?,
            value: attr.unescape_value().map_err(syntax)?.into_owned(),
        });
    }

    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(SetDefinitionError::Syntax("multiple root elements".to_string()));
    }
    Ok(())
}

/// Parse a UTF-8 XML document into its root element
pub fn parse(bytes: &[u8]) -> Result<Element> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event_into(&mut buf).map_err(syntax)?;
        let namespace = resolved_namespace(resolved)?;
        match event {
            Event::Start(start) => {
                let element = build_element(&reader, namespace, &start)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = build_element(&reader, namespace, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| SetDefinitionError::Syntax("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(SetDefinitionError::Syntax(format!("unclosed element {}", open.tag())));
    }
    root.ok_or_else(|| SetDefinitionError::Syntax("document has no root element".to_string()))
}
