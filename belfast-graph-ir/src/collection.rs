//! RDF collection (linked list) expansion
//!
//! Harvested groupsheet titles are sometimes an ordered sequence encoded as
//! an RDF list: a chain of blank nodes linked by `rdf:first`/`rdf:rest`,
//! terminated by `rdf:nil`. This module isolates that traversal behind one
//! operation so callers never touch the list encoding directly.

use crate::{Graph, Term};
use belfast_vocab::rdf;
use std::collections::HashSet;

/// Expand an RDF list into its ordered member terms.
///
/// `head` is the first list node (or `rdf:nil` for the empty list, which
/// yields an empty vector). Members are returned in list order.
///
/// Malformed lists degrade gracefully: a node without `rdf:first` ends the
/// walk, as does a cycle in the `rdf:rest` chain.
pub fn expand_collection(graph: &Graph, head: &Term) -> Vec<Term> {
    let mut members = Vec::new();
    let mut seen: HashSet<Term> = HashSet::new();
    let nil = Term::iri(rdf::NIL);

    let mut node = head.clone();
    loop {
        if node == nil || !seen.insert(node.clone()) {
            break;
        }

        match graph.value(&node, rdf::FIRST) {
            Some(first) => members.push(first.clone()),
            None => break,
        }

        match graph.value(&node, rdf::REST) {
            Some(rest) => node = rest.clone(),
            None => break,
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_graph(items: &[&str]) -> (Graph, Term) {
        let mut graph = Graph::new();
        if items.is_empty() {
            return (graph, Term::iri(rdf::NIL));
        }

        let head = Term::blank("l0");
        let mut node = head.clone();
        for (i, item) in items.iter().enumerate() {
            graph.add_triple(node.clone(), Term::iri(rdf::FIRST), Term::string(item));
            let next = if i + 1 == items.len() {
                Term::iri(rdf::NIL)
            } else {
                Term::blank(format!("l{}", i + 1))
            };
            graph.add_triple(node.clone(), Term::iri(rdf::REST), next.clone());
            node = next;
        }
        (graph, head)
    }

    #[test]
    fn test_expand_ordered() {
        let (graph, head) = list_graph(&["The Group", "Belfast Poems"]);
        let members = expand_collection(&graph, &head);
        assert_eq!(
            members,
            vec![Term::string("The Group"), Term::string("Belfast Poems")]
        );
    }

    #[test]
    fn test_expand_empty() {
        let (graph, head) = list_graph(&[]);
        assert!(expand_collection(&graph, &head).is_empty());
    }

    #[test]
    fn test_expand_single() {
        let (graph, head) = list_graph(&["Soundings"]);
        assert_eq!(expand_collection(&graph, &head), vec![Term::string("Soundings")]);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = Graph::new();
        let a = Term::blank("a");
        let b = Term::blank("b");
        graph.add_triple(a.clone(), Term::iri(rdf::FIRST), Term::string("x"));
        graph.add_triple(a.clone(), Term::iri(rdf::REST), b.clone());
        graph.add_triple(b.clone(), Term::iri(rdf::FIRST), Term::string("y"));
        graph.add_triple(b.clone(), Term::iri(rdf::REST), a.clone());

        let members = expand_collection(&graph, &a);
        assert_eq!(members, vec![Term::string("x"), Term::string("y")]);
    }

    #[test]
    fn test_missing_first_ends_walk() {
        let mut graph = Graph::new();
        let a = Term::blank("a");
        graph.add_triple(a.clone(), Term::iri(rdf::REST), Term::iri(rdf::NIL));
        assert!(expand_collection(&graph, &a).is_empty());
    }
}
