//! Native RDF parsing (Turtle, N3, N-Triples, RDF/XML) through sophia

use crate::format::Format;
use crate::{Result, SetDefinitionError};
use foliaset_core::{GraphStore, Literal, Term, Triple};
use sophia::api::parser::TripleParser;
use sophia::api::source::TripleSource;
use sophia::api::term::{Term as SophiaTerm, TermKind};
use sophia::api::triple::Triple as SophiaTriple;
use sophia::iri::Iri;
use sophia::turtle::parser::{nt, turtle::TurtleParser};
use sophia::xml::parser::RdfXmlParser;
use tracing::debug;

fn convert_term<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::BlankNode(id.as_str().to_string())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let literal = match (term.language_tag(), term.datatype()) {
                (Some(tag), _) => Literal::lang(lexical, tag.as_str()),
                (None, Some(datatype)) => Literal::typed(lexical, datatype.as_str()),
                (None, None) => Literal::string(lexical),
            };
            Some(Term::Literal(literal))
        }
        _ => None,
    }
}

fn collect<S: TripleSource>(mut source: S, store: &mut GraphStore) -> Result<usize> {
    let before = store.len();
    let mut skipped = 0usize;
    source
        .for_each_triple(|t| {
            let subject = convert_term(t.s());
            let predicate = t.p().iri().map(|iri| iri.as_str().to_string());
            let object = convert_term(t.o());
            match (subject, predicate, object) {
                (Some(s), Some(p), Some(o)) => store.add_triple(Triple::new(s, p, o)),
                _ => skipped += 1,
            }
        })
        .map_err(|e| SetDefinitionError::Syntax(e.to_string()))?;
    if skipped > 0 {
        debug!("Skipped {} triples with unsupported terms", skipped);
    }
    Ok(store.len() - before)
}

/// Parse an RDF document into `store`, returning the number of triples added.
///
/// Notation3 is read with the Turtle parser, so only its Turtle subset is accepted.
pub fn parse_into(text: &str, format: Format, base: Option<&str>, store: &mut GraphStore) -> Result<usize> {
    let base = base
        .map(|b| Iri::new(b.to_string()).map_err(|e| SetDefinitionError::Syntax(format!("invalid base IRI {}: {}", b, e))))
        .transpose()?;

    match format {
        Format::Turtle | Format::Notation3 => collect(TurtleParser { base }.parse_str(text), store),
        Format::NTriples => collect(nt::parse_str(text), store),
        Format::RdfXml => collect(RdfXmlParser { base }.parse_str(text), store),
        Format::Legacy => Err(SetDefinitionError::UnknownFormat(
            "legacy set definitions are not RDF".to_string(),
        )),
    }
}
