//! RDF graph intermediate representation for the Belfast Group toolkit
//!
//! Canonical types for representing harvested RDF: terms, triples, and
//! graphs with namespace prefix bindings. Parsers produce these types and
//! the smusher consumes them, independent of the serialization format.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Compaction back to prefixed names happens at output time.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. Plain
//!    strings use `xsd:string`, language-tagged strings `rdf:langString`.
//!
//! 3. **Bag semantics by default** - `Graph` stores `Vec<Triple>`. Call
//!    `dedupe()` explicitly for set semantics.
//!
//! 4. **Deterministic output** - Call `sort()` (or `canonicalize()`) before
//!    formatting for stable SPO-lexicographic ordering.
//!
//! # Example
//!
//! ```
//! use belfast_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("http://example.org/doc"),
//!     Term::iri("http://purl.org/dc/terms/title"),
//!     Term::string("Poems"),
//! );
//! graph.canonicalize();
//! assert_eq!(graph.len(), 1);
//! ```

pub mod collection;
mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{BlankId, LiteralValue, Term};
pub use triple::Triple;
