//! RDF term and triple models

use serde::{Deserialize, Serialize};

/// XSD boolean datatype IRI
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// XSD string datatype IRI (implicit for plain literals)
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    /// Plain string literal
    pub fn string<S: Into<String>>(lexical: S) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: Some(XSD_BOOLEAN.to_string()),
            language: None,
        }
    }

    /// Typed literal. `xsd:string` is normalized to a plain literal.
    pub fn typed<S: Into<String>, D: Into<String>>(lexical: S, datatype: D) -> Self {
        let datatype = datatype.into();
        Self {
            lexical: lexical.into(),
            datatype: if datatype == XSD_STRING { None } else { Some(datatype) },
            language: None,
        }
    }

    /// Language-tagged literal
    pub fn lang<S: Into<String>, L: Into<String>>(lexical: S, language: L) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

/// RDF term: IRI, blank node or literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Term {
    Iri(String),
    BlankNode(String),
    Literal(Literal),
}

impl Term {
    pub fn iri<S: Into<String>>(iri: S) -> Self {
        Term::Iri(iri.into())
    }

    pub fn literal<S: Into<String>>(lexical: S) -> Self {
        Term::Literal(Literal::string(lexical))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// RDF Triple representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new<P: Into<String>>(subject: Term, predicate: P, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}
