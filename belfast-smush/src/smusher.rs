//! Groupsheet identity smushing.
//!
//! Harvested documents describe the same groupsheet under different blank
//! nodes or local URIs. The smusher assigns each groupsheet a
//! content-derived identifier (an MD5 of its author key and sorted title
//! slugs) and rewrites every reference to it, so records for the same
//! sheet converge on one IRI across all files.

use belfast_graph_ir::{collection::expand_collection, Graph, Term};
use belfast_vocab::{belfast, bibo, dc, rdf, schema};
use md5::{Digest, Md5};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use crate::slug::slugify;

/// Rewrites groupsheet references to content-derived identifiers.
#[derive(Clone, Debug)]
pub struct GroupsheetSmusher {
    /// The topic IRI a document must be `schema:about` for its
    /// manuscripts to count as groupsheets.
    topic: String,
    /// Namespace the MD5 fingerprint is appended to.
    namespace: String,
}

impl Default for GroupsheetSmusher {
    fn default() -> Self {
        Self {
            topic: belfast::BELFAST_GROUP.to_string(),
            namespace: belfast::GROUPSHEET_NS.to_string(),
        }
    }
}

impl GroupsheetSmusher {
    /// Create a smusher with a custom topic and identifier namespace.
    pub fn new(topic: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            namespace: namespace.into(),
        }
    }

    /// Find every manuscript mentioned by a document about the topic.
    ///
    /// Matches the two-hop pattern: `?doc schema:about <topic>`,
    /// `?doc schema:mentions ?ms`, `?ms rdf:type bibo:Manuscript`.
    /// Nodes are returned in first-seen order, deduplicated.
    pub fn find_groupsheets(&self, graph: &Graph) -> Vec<Term> {
        let topic = Term::iri(&self.topic);
        let manuscript = Term::iri(bibo::MANUSCRIPT);

        let mut seen = FxHashSet::default();
        let mut sheets = Vec::new();
        for doc in graph.subjects_with(schema::ABOUT, &topic) {
            for ms in graph.objects(doc, schema::MENTIONS) {
                if graph.contains(ms, rdf::TYPE, &manuscript) && seen.insert(ms.clone()) {
                    sheets.push(ms.clone());
                }
            }
        }
        sheets
    }

    /// Compute the content-derived identifier for one groupsheet node.
    ///
    /// Returns `None` when the record carries no usable signal (no title
    /// and no author) - those nodes are left untouched rather than
    /// collapsed into one "empty" identity.
    pub fn compute_identity(&self, graph: &Graph, node: &Term) -> Option<Term> {
        let mut titles: Vec<String> = Vec::new();
        if let Some(title) = graph.value(node, dc::TITLE) {
            if title.is_literal() {
                titles.push(slugify(&term_text(title)));
            } else {
                // Multi-part sheets carry their titles as an RDF collection
                for item in expand_collection(graph, title) {
                    titles.push(slugify(&term_text(&item)));
                }
            }
        }
        titles.sort();

        let author = match graph.value(node, schema::AUTHOR) {
            None => None,
            Some(author_node @ Term::BlankNode(_)) => {
                // Blank-node authors are unreliable; use "Family, Given"
                // only when both names are present
                let family = graph
                    .value(author_node, schema::FAMILY_NAME)
                    .and_then(Term::literal_str);
                let given = graph
                    .value(author_node, schema::GIVEN_NAME)
                    .and_then(Term::literal_str);
                match (family, given) {
                    (Some(family), Some(given)) => Some(format!("{family}, {given}")),
                    _ => None,
                }
            }
            Some(other) => Some(term_text(other)),
        };

        if titles.is_empty() && author.is_none() {
            return None;
        }

        let author = author.unwrap_or_else(|| "anonymous".to_string());
        let text = format!("{author} {}", titles.join(" "));

        let digest = Md5::digest(text.as_bytes());
        Some(Term::iri(format!(
            "{}{}",
            self.namespace,
            hex::encode(digest)
        )))
    }

    /// Rewrite groupsheet references in a graph.
    ///
    /// Returns `None` when the graph mentions no groupsheets at all, so
    /// callers can leave the source file untouched. Otherwise returns a
    /// new graph with every subject and object in the substitution map
    /// replaced; predicates and all other terms pass through unchanged.
    pub fn smush(&self, graph: &Graph) -> Option<Graph> {
        let sheets = self.find_groupsheets(graph);
        if sheets.is_empty() {
            debug!("no groupsheets found");
            return None;
        }
        info!(count = sheets.len(), "found possible groupsheets");

        let mut new_uris: FxHashMap<Term, Term> = FxHashMap::default();
        for node in &sheets {
            match self.compute_identity(graph, node) {
                Some(uri) => {
                    new_uris.insert(node.clone(), uri);
                }
                None => {
                    warn!(node = %node, "groupsheet has no title or author, leaving as-is");
                }
            }
        }

        let mut output = Graph::new();
        output.copy_bindings_from(graph);
        for triple in graph.iter() {
            let s = new_uris.get(&triple.s).unwrap_or(&triple.s).clone();
            let o = new_uris.get(&triple.o).unwrap_or(&triple.o).clone();
            output.add_triple(s, triple.p.clone(), o);
        }
        Some(output)
    }
}

/// The text a node contributes to the fingerprint.
fn term_text(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri.to_string(),
        Term::BlankNode(id) => id.as_str().to_string(),
        Term::Literal { value, .. } => value.lexical(),
    }
}
