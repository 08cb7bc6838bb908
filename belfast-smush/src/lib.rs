//! Identity resolution ("smushing") for Belfast Group groupsheets.
//!
//! Group sheets harvested from archival RDF have no stable identifiers:
//! the same physical sheet appears as a different blank node in every
//! document that mentions it. This crate derives a deterministic
//! identifier from the sheet's content - an MD5 over the author key and
//! the sorted, slugified titles - and rewrites every reference, so
//! descriptions of the same sheet merge across documents.
//!
//! The entry point is [`GroupsheetSmusher`]:
//!
//! ```
//! use belfast_graph_ir::Graph;
//! use belfast_smush::GroupsheetSmusher;
//!
//! let smusher = GroupsheetSmusher::default();
//! // A graph with no groupsheets is left alone
//! assert!(smusher.smush(&Graph::new()).is_none());
//! ```

pub mod slug;
mod smusher;

pub use slug::slugify;
pub use smusher::GroupsheetSmusher;
