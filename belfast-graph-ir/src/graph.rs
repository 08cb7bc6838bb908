//! RDF graph - a collection of triples with prefix bindings
//!
//! `Graph` uses `Vec<Triple>` storage (bag semantics); call `dedupe()` for
//! set semantics. Prefix bindings are cosmetic but carried through so that
//! rewritten files keep their namespace declarations.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples.
///
/// Besides the container surface this exposes the narrow query helpers the
/// smushing pass needs: first-value lookup, object iteration, and reverse
/// subject lookup. They scan linearly - fine for harvested documents, which
/// are a few thousand triples at most.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Base IRI from parsing (for reconstruction)
    pub base: Option<String>,
    /// Prefix mappings (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base IRI.
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping.
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph.
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components.
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Sort triples by SPO for deterministic output.
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics). Sorts first.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Sort and dedupe - the standard preparation before serializing.
    pub fn canonicalize(&mut self) {
        self.dedupe();
    }

    /// Copy the base IRI and prefix bindings from another graph.
    pub fn copy_bindings_from(&mut self, other: &Graph) {
        self.base.clone_from(&other.base);
        for (prefix, ns) in &other.prefixes {
            self.prefixes.insert(prefix.clone(), ns.clone());
        }
    }

    // -----------------------------------------------------------------------
    // Pattern queries
    // -----------------------------------------------------------------------

    /// First object of `(subject, predicate, ?)`, if any.
    ///
    /// The rdflib-style `graph.value()` lookup: use when the data model says
    /// a property occurs at most once.
    pub fn value(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.triples
            .iter()
            .find(|t| &t.s == subject && t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
    }

    /// All objects of `(subject, predicate, ?)`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| &t.s == subject && t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
    }

    /// All subjects of `(?, predicate, object)`.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |t| t.p.as_iri() == Some(predicate) && &t.o == object)
            .map(|t| &t.s)
    }

    /// Check for the presence of a fully-ground triple.
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.triples
            .iter()
            .any(|t| &t.s == subject && t.p.as_iri() == Some(predicate) && &t.o == object)
    }

    /// Group triples by subject, in current order.
    ///
    /// Sort the graph first for consistent grouping.
    pub fn group_by_subject(&self) -> SubjectGroups<'_> {
        SubjectGroups {
            triples: &self.triples,
            index: 0,
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            base: None,
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

/// Iterator over triples grouped by subject.
pub struct SubjectGroups<'a> {
    triples: &'a [Triple],
    index: usize,
}

impl<'a> Iterator for SubjectGroups<'a> {
    type Item = (&'a Term, &'a [Triple]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.triples.len() {
            return None;
        }

        let start = self.index;
        let subject = &self.triples[start].s;

        while self.index < self.triples.len() && self.triples[self.index].s == *subject {
            self.index += 1;
        }

        Some((subject, &self.triples[start..self.index]))
    }
}
