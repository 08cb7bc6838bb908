//! Turtle (TTL) reader and writer for the Belfast Group toolkit.
//!
//! The smushing core operates on an already-materialized
//! [`belfast_graph_ir::Graph`]; this crate is the I/O adapter that gets a
//! harvested document into that form and back out again, preserving prefix
//! bindings for output fidelity.
//!
//! # Example
//!
//! ```
//! use belfast_graph_turtle::{parse, write_graph};
//!
//! let turtle = r#"
//!     @prefix dc: <http://purl.org/dc/terms/> .
//!     <http://example.org/doc> dc:title "Poems" .
//! "#;
//!
//! let graph = parse(turtle).unwrap();
//! assert_eq!(graph.len(), 1);
//!
//! // Round-trips to an equal triple set
//! let out = write_graph(&graph);
//! assert_eq!(parse(&out).unwrap().triples(), graph.triples());
//! ```

pub mod error;
pub mod lex;
pub mod parser;
pub mod writer;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Token, TokenKind};
pub use parser::parse;
pub use writer::write_graph;
