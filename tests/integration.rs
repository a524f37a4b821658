// Integration tests for foliaset components
// These tests verify end-to-end functionality across multiple crates

#[cfg(test)]
mod tests {
    use foliaset::vocabulary::{CLASS, ID, LABEL, MEMBER_OF, PARENT_CLASS, RDF_TYPE, SET};
    use foliaset::{ErrorKind, Format, LoadOptions, SetDefinition};
    use foliaset_core::{GraphStore, Term, Triple};
    use std::io::Write;

    const NESTED: &str = r#"<set xmlns="http://ilk.uvt.nl/folia" xml:id="ner" type="closed" label="Named entities">
        <class xml:id="loc" label="Location"><class xml:id="loc-city" label="City"/></class>
        <class xml:id="per" label="Person"/>
        <class xml:id="org" label="Organisation"/>
    </set>"#;

    fn temp_with(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_legacy_to_ntriples_to_native_round_trip() {
        // legacy XML -> graph -> N-Triples -> reloaded native graph
        let legacy = SetDefinition::from_legacy_str(NESTED, Some("http://example.org/ner")).unwrap();
        let nt = legacy.graph().to_ntriples().unwrap();

        let file = temp_with(".nt", &nt);
        let native = SetDefinition::load(file.path().to_str().unwrap(), LoadOptions::new()).unwrap();
        assert_eq!(native.format(), Format::NTriples);
        assert_eq!(native.graph().len(), legacy.graph().len());
        for triple in legacy.graph().triples() {
            assert!(native.graph().contains(triple), "missing {:?}", triple);
        }
    }

    #[test]
    fn test_ids_with_reserved_characters_round_trip() {
        let xml = r#"<set xmlns="http://ilk.uvt.nl/folia" xml:id="s" type="closed">
            <class id="a b" label="Spaced"/>
            <class id="c&gt;d" label="Angled"/>
        </set>"#;
        let legacy = SetDefinition::from_legacy_str(xml, Some("http://example.org/s")).unwrap();
        let nt = legacy.graph().to_ntriples().unwrap();
        assert!(nt.contains("<http://example.org/s#a%20b>"));
        assert!(nt.contains("<http://example.org/s#c%3Ed>"));

        let file = temp_with(".nt", &nt);
        let native = SetDefinition::load(file.path().to_str().unwrap(), LoadOptions::new()).unwrap();
        assert_eq!(native.graph().len(), legacy.graph().len());

        // the id literal keeps the raw id
        let subject = Term::iri("http://example.org/s#a%20b");
        let ids = native.graph().find_triples(Some(&subject), Some(ID), None);
        assert_eq!(ids[0].object, Term::literal("a b"));
    }

    #[test]
    fn test_export_into_caller_store_accumulates() {
        let definition = SetDefinition::from_legacy_str(NESTED, None).unwrap();
        let set = definition.legacy_set().unwrap();

        let mut store = GraphStore::new();
        store.add_triple(Triple::new(Term::iri("http://example.org/x"), LABEL, Term::literal("pre-existing")));
        foliaset::export_graph(set, &mut store, Some("http://example.org/ner"));
        let after_first = store.len();
        foliaset::export_graph(set, &mut store, Some("http://example.org/ner"));

        assert_eq!(after_first, 1 + definition.graph().len());
        assert_eq!(store.len(), 1 + 2 * definition.graph().len());
        assert!(store.contains(&Triple::new(Term::iri("http://example.org/x"), LABEL, Term::literal("pre-existing"))));
    }

    #[test]
    fn test_class_structure_in_graph() {
        let definition = SetDefinition::from_legacy_str(NESTED, Some("http://example.org/ner")).unwrap();
        let graph = definition.graph();

        assert_eq!(graph.find_triples(None, Some(RDF_TYPE), Some(&Term::iri(SET))).len(), 1);
        assert_eq!(graph.find_triples(None, Some(RDF_TYPE), Some(&Term::iri(CLASS))).len(), 4);
        assert_eq!(
            graph.find_triples(None, Some(MEMBER_OF), Some(&Term::iri("http://example.org/ner#Set.ner"))).len(),
            4
        );

        let parents = graph.find_triples(None, Some(PARENT_CLASS), None);
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].subject, Term::iri("http://example.org/ner#loc-city"));
        assert_eq!(parents[0].object, Term::iri("http://example.org/ner#loc"));
    }

    #[test]
    fn test_json_order_differs_from_graph_order() {
        let definition = SetDefinition::from_legacy_str(NESTED, Some("http://example.org/ner")).unwrap();

        let json = definition.to_json().unwrap();
        assert_eq!(json["classorder"], serde_json::json!(["loc", "org", "per"]));

        let graph_order: Vec<&str> = definition
            .graph()
            .find_triples(None, Some(RDF_TYPE), Some(&Term::iri(CLASS)))
            .iter()
            .filter_map(|t| t.subject.as_iri())
            .collect();
        assert_eq!(
            graph_order,
            vec![
                "http://example.org/ner#loc",
                "http://example.org/ner#loc-city",
                "http://example.org/ner#per",
                "http://example.org/ner#org",
            ]
        );
    }

    #[test]
    fn test_error_categories_are_distinct() {
        let retrieval = SetDefinition::load("./missing/ner.xml", LoadOptions::new()).unwrap_err();
        let structural = SetDefinition::from_legacy_str(r#"<set xmlns="http://ilk.uvt.nl/folia" xml:id="s" type="bogus"/>"#, None).unwrap_err();
        let syntax = SetDefinition::from_legacy_str("<set", None).unwrap_err();
        let unimplemented = SetDefinition::from_legacy_str(NESTED, None).unwrap().test_class("loc").unwrap_err();

        assert_eq!(retrieval.kind(), ErrorKind::Retrieval);
        assert_eq!(structural.kind(), ErrorKind::Structural);
        assert_eq!(syntax.kind(), ErrorKind::Syntax);
        assert_eq!(unimplemented.kind(), ErrorKind::NotImplemented);
    }
}
