//! Serialization formats and suffix-based detection

use crate::SetDefinitionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Legacy hierarchical set definition XML
    Legacy,
    Turtle,
    Notation3,
    RdfXml,
    NTriples,
}

/// Checked in order; the first matching suffix wins.
const SUFFIXES: &[(&str, Format)] = &[
    (".ttl", Format::Turtle),
    (".n3", Format::Notation3),
    (".rdf.xml", Format::RdfXml),
    (".rdf", Format::RdfXml),
    (".nt", Format::NTriples),
    (".xml", Format::Legacy),
];

impl Format {
    /// Infer the format from a location's suffix. Unrecognized suffixes are legacy XML.
    pub fn from_location(location: &str) -> Self {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| location.ends_with(suffix))
            .map(|(_, format)| *format)
            .unwrap_or(Format::Legacy)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Legacy => "application/foliaset+xml",
            Format::Turtle => "text/turtle",
            Format::Notation3 => "text/n3",
            Format::RdfXml => "application/rdf+xml",
            Format::NTriples => "application/n-triples",
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Format::Legacy)
    }
}

impl FromStr for Format {
    type Err = SetDefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "application/foliaset+xml" | "legacy" | "foliaset" => Ok(Format::Legacy),
            "text/turtle" | "turtle" | "ttl" => Ok(Format::Turtle),
            "text/n3" | "n3" | "notation3" => Ok(Format::Notation3),
            "application/rdf+xml" | "xml" | "rdfxml" | "rdf" => Ok(Format::RdfXml),
            "application/n-triples" | "nt" | "ntriples" => Ok(Format::NTriples),
            other => Err(SetDefinitionError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}
