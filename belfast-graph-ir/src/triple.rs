//! A single RDF statement.

use crate::Term;
use serde::{Deserialize, Serialize};

/// An RDF triple: (subject, predicate, object).
///
/// Ordering is SPO-lexicographic, which gives graphs a deterministic sort.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (IRI, blank node, or literal)
    pub o: Term,
}

impl Triple {
    /// Create a new triple.
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
