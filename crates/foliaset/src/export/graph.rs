//! Set tree to RDF triples

use crate::model::{ClassNode, SetNode, SetType};
use crate::vocabulary::{self, CLASS, ID, LABEL, MEMBER_OF, OPEN, PARENT_CLASS, RDF_TYPE, SET, SUBSET_OF};
use foliaset_core::{GraphStore, Literal, Term, Triple};

struct GraphExporter<'a> {
    store: &'a mut GraphStore,
    basens: &'a str,
}

impl GraphExporter<'_> {
    fn emit(&mut self, subject: &str, predicate: &str, object: Term) {
        self.store.add_triple(Triple::new(Term::iri(subject), predicate, object));
    }

    fn set(&mut self, set: &SetNode) {
        let subject = vocabulary::set_iri(self.basens, &set.id);

        self.emit(&subject, RDF_TYPE, Term::iri(SET));
        self.emit(&subject, ID, Term::literal(&set.id));
        if set.set_type == SetType::Open {
            self.emit(&subject, OPEN, Literal::boolean(true).into());
        }
        if let Some(label) = set.label() {
            self.emit(&subject, LABEL, Term::literal(label));
        }
        if let Some(parent) = &set.parent {
            let parent_subject = vocabulary::set_iri(self.basens, parent);
            self.emit(&subject, SUBSET_OF, Term::iri(parent_subject));
        }

        for class in &set.classes {
            self.class(class, &subject, None);
        }
        for subset in &set.subsets {
            self.set(subset);
        }
    }

    fn class(&mut self, class: &ClassNode, set_subject: &str, parent_class: Option<&str>) {
        let subject = vocabulary::class_iri(self.basens, &class.id);

        self.emit(&subject, RDF_TYPE, Term::iri(CLASS));
        self.emit(&subject, ID, Term::literal(&class.id));
        self.emit(&subject, LABEL, Term::literal(&class.label));
        self.emit(&subject, MEMBER_OF, Term::iri(set_subject));
        if let Some(parent) = parent_class {
            self.emit(&subject, PARENT_CLASS, Term::iri(parent));
        }

        for subclass in &class.subclasses {
            self.class(subclass, set_subject, Some(&subject));
        }
    }
}

/// Append the triples describing `set` to `store`.
///
/// Without `basens` the namespace is derived from the root set id. Returns
/// the namespace actually used. The store is only ever appended to.
pub fn export_graph(set: &SetNode, store: &mut GraphStore, basens: Option<&str>) -> String {
    let basens = match basens {
        Some(ns) if !ns.is_empty() => ns.to_string(),
        _ => vocabulary::default_basens(&set.id),
    };
    GraphExporter { store, basens: &basens }.set(set);
    basens
}
