//! Graph storage and manipulation

use crate::model::{Term, Triple};
use crate::ntriples::{write_ntriples, SerializeError};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Append-only in-memory graph store with indexing for fast queries.
///
/// Triples are kept in insertion order and never deduplicated: adding the
/// same triple twice stores it twice.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    triples: Vec<Triple>,
    /// Subject index: subject -> list of triple indices
    subject_index: HashMap<Term, SmallVec<[usize; 8]>>,
    /// Predicate index: predicate -> list of triple indices
    predicate_index: HashMap<String, SmallVec<[usize; 8]>>,
    /// Object index: object -> list of triple indices
    object_index: HashMap<Term, SmallVec<[usize; 8]>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a triple
    pub fn add_triple(&mut self, triple: Triple) {
        let index = self.triples.len();

        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);

        self.triples.push(triple);
    }

    /// Append multiple triples
    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) {
        for triple in triples {
            self.add_triple(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All triples in insertion order
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        !self
            .find_triples(Some(&triple.subject), Some(&triple.predicate), Some(&triple.object))
            .is_empty()
    }

    /// Find triples matching a pattern, in insertion order
    pub fn find_triples(&self, subject: Option<&Term>, predicate: Option<&str>, object: Option<&Term>) -> Vec<&Triple> {
        let mut candidates: Option<SmallVec<[usize; 8]>> = None;

        if let Some(s) = subject {
            candidates = Some(self.narrow(candidates, self.subject_index.get(s)));
        }
        if let Some(p) = predicate {
            candidates = Some(self.narrow(candidates, self.predicate_index.get(p)));
        }
        if let Some(o) = object {
            candidates = Some(self.narrow(candidates, self.object_index.get(o)));
        }

        match candidates {
            Some(indices) => indices.iter().filter_map(|&i| self.triples.get(i)).collect(),
            None => self.triples.iter().collect(),
        }
    }

    /// Intersect the running candidate set with one index bucket
    fn narrow(&self, current: Option<SmallVec<[usize; 8]>>, bucket: Option<&SmallVec<[usize; 8]>>) -> SmallVec<[usize; 8]> {
        let bucket = bucket.map(|v| v.as_slice()).unwrap_or(&[]);
        match current {
            None => SmallVec::from_slice(bucket),
            Some(current) => Self::intersect_indices(&current, bucket),
        }
    }

    /// Intersect two sorted index vectors
    fn intersect_indices(a: &[usize], b: &[usize]) -> SmallVec<[usize; 8]> {
        let mut result = SmallVec::new();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    result.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        result
    }

    /// Serialize the store as N-Triples, one line per stored triple
    pub fn to_ntriples(&self) -> Result<String, SerializeError> {
        write_ntriples(&self.triples)
    }

    pub fn clear(&mut self) {
        self.triples.clear();
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
    }
}
