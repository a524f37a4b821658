//! N-Triples serialization through sophia

use crate::model::{Term, Triple, XSD_STRING};
use sophia::api::serializer::{Stringifier, TripleSerializer};
use sophia::api::term::{BnodeId, LanguageTag, SimpleTerm};
use sophia::iri::IriRef;
use sophia::turtle::serializer::nt::NtSerializer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid blank node id: {0}")]
    InvalidBlankNode(String),

    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),

    #[error("Serialization failed: {0}")]
    Io(String),
}

fn iri_ref(iri: &str) -> Result<IriRef<sophia::api::MownStr<'_>>, SerializeError> {
    IriRef::new(iri.into()).map_err(|_| SerializeError::InvalidIri(iri.to_string()))
}

/// Validated sophia view of a term
pub fn to_sophia(term: &Term) -> Result<SimpleTerm<'_>, SerializeError> {
    match term {
        Term::Iri(iri) => Ok(SimpleTerm::Iri(iri_ref(iri)?)),
        Term::BlankNode(id) => BnodeId::new(id.as_str().into())
            .map(SimpleTerm::BlankNode)
            .map_err(|_| SerializeError::InvalidBlankNode(id.clone())),
        Term::Literal(literal) => match (&literal.language, &literal.datatype) {
            (Some(tag), _) => LanguageTag::new(tag.as_str().into())
                .map(|tag| SimpleTerm::LiteralLanguage(literal.lexical.as_str().into(), tag))
                .map_err(|_| SerializeError::InvalidLanguageTag(tag.clone())),
            (None, datatype) => {
                let datatype = iri_ref(datatype.as_deref().unwrap_or(XSD_STRING))?;
                Ok(SimpleTerm::LiteralDatatype(literal.lexical.as_str().into(), datatype))
            }
        },
    }
}

fn to_sophia_triple(triple: &Triple) -> Result<[SimpleTerm<'_>; 3], SerializeError> {
    Ok([
        to_sophia(&triple.subject)?,
        SimpleTerm::Iri(iri_ref(&triple.predicate)?),
        to_sophia(&triple.object)?,
    ])
}

/// Serialize triples as N-Triples, one statement per line.
///
/// Fails on the first term that is not valid RDF (e.g. an IRI containing a space).
pub fn write_ntriples<'a, I>(triples: I) -> Result<String, SerializeError>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let graph = triples
        .into_iter()
        .map(to_sophia_triple)
        .collect::<Result<Vec<_>, _>>()?;
    let mut serializer = NtSerializer::new_stringifier();
    serializer
        .serialize_graph(&graph)
        .map_err(|e| SerializeError::Io(e.to_string()))?;
    Ok(serializer.to_string())
}

/// N-Triples form of a single term
pub fn term_to_ntriples(term: &Term) -> Result<String, SerializeError> {
    let term = to_sophia(term)?;
    let mut out = Vec::new();
    sophia::turtle::serializer::nt::write_term(&mut out, term).map_err(|e| SerializeError::Io(e.to_string()))?;
    String::from_utf8(out).map_err(|e| SerializeError::Io(e.to_string()))
}
