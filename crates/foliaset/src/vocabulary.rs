//! Namespaces and the set definition vocabulary

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Namespace of legacy set definition XML elements
pub const NSFOLIA: &str = "http://ilk.uvt.nl/folia";

/// Base of the set definition RDF vocabulary
pub const NSFOLIASETDEFINITION: &str = "http://folia.science.ru.nl/setdefinition";

/// Namespace bound to the `xml:` prefix
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const SET: &str = "http://folia.science.ru.nl/setdefinition#Set";
pub const CLASS: &str = "http://folia.science.ru.nl/setdefinition#Class";
pub const ID: &str = "http://folia.science.ru.nl/setdefinition#id";
pub const LABEL: &str = "http://folia.science.ru.nl/setdefinition#label";
pub const OPEN: &str = "http://folia.science.ru.nl/setdefinition#open";
pub const MEMBER_OF: &str = "http://folia.science.ru.nl/setdefinition#memberOf";
pub const PARENT_CLASS: &str = "http://folia.science.ru.nl/setdefinition#parentClass";
pub const SUBSET_OF: &str = "http://folia.science.ru.nl/setdefinition#subsetOf";

/// Characters of a set or class id that cannot appear verbatim in an IRI
/// path segment or fragment. Non-ASCII is always encoded.
const ID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, ID_ENCODE_SET).to_string()
}

/// Namespace context used when neither the caller nor the location provides one
pub fn default_basens(set_id: &str) -> String {
    format!("{}/{}", NSFOLIASETDEFINITION, encode_id(set_id))
}

/// Subject IRI of a set or subset. The id is percent-encoded; the `id`
/// literal keeps it verbatim.
pub fn set_iri(basens: &str, set_id: &str) -> String {
    format!("{}#Set.{}", basens, encode_id(set_id))
}

/// Subject IRI of a class
pub fn class_iri(basens: &str, class_id: &str) -> String {
    format!("{}#{}", basens, encode_id(class_id))
}
