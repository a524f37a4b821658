//! # foliaset-core
//!
//! RDF term/triple model and the in-memory graph store that set definitions
//! are exported into.

pub mod model;
pub mod ntriples;
pub mod store;

pub use model::*;
pub use ntriples::{term_to_ntriples, write_ntriples, SerializeError};
pub use store::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::iri(s), p, o)
    }

    #[cfg(test)]
    mod term_tests {
        use super::*;

        #[test]
        fn test_iri_ntriples() {
            assert_eq!(term_to_ntriples(&Term::iri("http://example.org/a")).unwrap(), "<http://example.org/a>");
        }

        #[test]
        fn test_blank_node_ntriples() {
            assert_eq!(term_to_ntriples(&Term::BlankNode("b0".to_string())).unwrap(), "_:b0");
        }

        #[test]
        fn test_plain_literal_escaping() {
            let term = Term::literal("say \"hi\"\nback\\slash");
            assert_eq!(term_to_ntriples(&term).unwrap(), r#""say \"hi\"\nback\\slash""#);
        }

        #[test]
        fn test_boolean_literal() {
            let term: Term = Literal::boolean(true).into();
            assert_eq!(
                term_to_ntriples(&term).unwrap(),
                "\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean>"
            );
        }

        #[test]
        fn test_language_literal() {
            let term: Term = Literal::lang("chat", "fr").into();
            assert_eq!(term_to_ntriples(&term).unwrap(), "\"chat\"@fr");
        }

        #[test]
        fn test_invalid_iri_is_rejected() {
            let err = term_to_ntriples(&Term::iri("http://example.org/s#a b")).unwrap_err();
            assert!(matches!(err, SerializeError::InvalidIri(_)));
        }

        #[test]
        fn test_xsd_string_is_plain() {
            let literal = Literal::typed("x", XSD_STRING);
            assert_eq!(literal, Literal::string("x"));
        }

        #[test]
        fn test_accessors() {
            assert_eq!(Term::iri("x").as_iri(), Some("x"));
            assert!(Term::literal("x").as_iri().is_none());
            assert_eq!(Term::literal("x").as_literal().map(|l| l.lexical.as_str()), Some("x"));
        }

        #[test]
        fn test_term_serde() {
            let json = serde_json::to_value(Term::iri("http://example.org/a")).unwrap();
            assert_eq!(json, serde_json::json!({"type": "Iri", "value": "http://example.org/a"}));
        }
    }

    #[cfg(test)]
    mod triple_tests {
        use super::*;

        #[test]
        fn test_triple_ntriples() {
            let t = triple("http://example.org/s", "http://example.org/p", Term::literal("o"));
            assert_eq!(
                write_ntriples([&t]).unwrap(),
                "<http://example.org/s> <http://example.org/p> \"o\".\n"
            );
        }

        #[test]
        fn test_triple_equality() {
            let t1 = triple("s", "p", Term::literal("o"));
            let t2 = triple("s", "p", Term::literal("o"));
            let t3 = triple("s", "p", Term::iri("o"));
            assert_eq!(t1, t2);
            assert_ne!(t1, t3);
        }
    }

    #[cfg(test)]
    mod store_tests {
        use super::*;

        fn sample_store() -> GraphStore {
            let mut store = GraphStore::new();
            store.add_triple(triple("s1", "p1", Term::iri("o1")));
            store.add_triple(triple("s1", "p2", Term::literal("o2")));
            store.add_triple(triple("s2", "p1", Term::iri("o1")));
            store
        }

        #[test]
        fn test_graph_store_new() {
            let store = GraphStore::new();
            assert!(store.is_empty());
            assert_eq!(store.len(), 0);
        }

        #[test]
        fn test_add_triple_keeps_duplicates() {
            let mut store = GraphStore::new();
            let t = triple("s", "p", Term::literal("o"));
            store.add_triple(t.clone());
            store.add_triple(t.clone());
            assert_eq!(store.len(), 2);
            assert_eq!(store.find_triples(Some(&t.subject), None, None).len(), 2);
        }

        #[test]
        fn test_find_by_subject() {
            let store = sample_store();
            let results = store.find_triples(Some(&Term::iri("s1")), None, None);
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].predicate, "p1");
            assert_eq!(results[1].predicate, "p2");
        }

        #[test]
        fn test_find_by_predicate_and_object() {
            let store = sample_store();
            let results = store.find_triples(None, Some("p1"), Some(&Term::iri("o1")));
            assert_eq!(results.len(), 2);
        }

        #[test]
        fn test_find_exact() {
            let store = sample_store();
            assert!(store.contains(&triple("s1", "p2", Term::literal("o2"))));
            assert!(!store.contains(&triple("s1", "p2", Term::iri("o2"))));
        }

        #[test]
        fn test_find_unknown_returns_empty() {
            let store = sample_store();
            assert!(store.find_triples(Some(&Term::iri("nope")), Some("p1"), None).is_empty());
        }

        #[test]
        fn test_find_all_in_insertion_order() {
            let store = sample_store();
            let all = store.find_triples(None, None, None);
            assert_eq!(all.len(), 3);
            assert_eq!(all[2].subject, Term::iri("s2"));
        }

        #[test]
        fn test_to_ntriples() {
            let store = sample_store();
            let nt = store.to_ntriples().unwrap();
            let lines: Vec<&str> = nt.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "<s1> <p1> <o1>.");
            assert_eq!(lines[1], "<s1> <p2> \"o2\".");
        }

        #[test]
        fn test_to_ntriples_fails_on_invalid_iri() {
            let mut store = sample_store();
            store.add_triple(triple("http://example.org/s#a b", "p1", Term::iri("o1")));
            assert!(matches!(store.to_ntriples(), Err(SerializeError::InvalidIri(_))));
        }

        #[test]
        fn test_clear() {
            let mut store = sample_store();
            store.clear();
            assert!(store.is_empty());
            assert!(store.find_triples(Some(&Term::iri("s1")), None, None).is_empty());
        }
    }

    #[cfg(test)]
    mod store_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_len_counts_every_insert(subjects in proptest::collection::vec("[a-c]", 0..20)) {
                let mut store = GraphStore::new();
                for s in &subjects {
                    store.add_triple(triple(s, "p", Term::literal("o")));
                }
                prop_assert_eq!(store.len(), subjects.len());
                let a_count = subjects.iter().filter(|s| s.as_str() == "a").count();
                prop_assert_eq!(store.find_triples(Some(&Term::iri("a")), Some("p"), None).len(), a_count);
            }
        }
    }
}
