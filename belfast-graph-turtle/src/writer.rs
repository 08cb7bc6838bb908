//! Turtle serializer.
//!
//! Emits a deterministic rendering: prefix directives sorted by prefix,
//! triples sorted and deduplicated, one subject per block with `;`
//! continuation lines. Parsing the output yields the canonicalized
//! triple set of the input graph.

use std::fmt::Write as _;

use belfast_graph_ir::{Graph, LiteralValue, Term, Triple};
use belfast_vocab::rdf;

/// Serialize a graph to a Turtle string.
pub fn write_graph(graph: &Graph) -> String {
    let mut canonical = graph.clone();
    canonical.canonicalize();

    let mut out = String::new();

    if let Some(base) = &canonical.base {
        let _ = writeln!(out, "@base <{base}> .");
    }
    for (prefix, namespace) in &canonical.prefixes {
        let _ = writeln!(out, "@prefix {prefix}: <{namespace}> .");
    }
    if !out.is_empty() && !canonical.is_empty() {
        out.push('\n');
    }

    for (subject, triples) in canonical.group_by_subject() {
        write_subject_block(&mut out, &canonical, subject, triples);
        out.push('\n');
    }

    out
}

fn write_subject_block(out: &mut String, graph: &Graph, subject: &Term, triples: &[Triple]) {
    out.push_str(&render_term(graph, subject));
    out.push(' ');

    let mut i = 0;
    while i < triples.len() {
        let predicate = &triples[i].p;
        if i > 0 {
            out.push_str(" ;\n    ");
        }
        out.push_str(&render_predicate(graph, predicate));
        out.push(' ');

        let mut first = true;
        while i < triples.len() && &triples[i].p == predicate {
            if !first {
                out.push_str(", ");
            }
            out.push_str(&render_term(graph, &triples[i].o));
            first = false;
            i += 1;
        }
    }

    out.push_str(" .\n");
}

fn render_predicate(graph: &Graph, predicate: &Term) -> String {
    if predicate.as_iri() == Some(rdf::TYPE) {
        "a".to_string()
    } else {
        render_term(graph, predicate)
    }
}

fn render_term(graph: &Graph, term: &Term) -> String {
    match term {
        Term::Iri(iri) => render_iri(graph, iri),
        Term::BlankNode(id) => id.to_string(),
        Term::Literal {
            value,
            datatype,
            language,
        } => match value {
            LiteralValue::Integer(n) => n.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Double(d) if d.is_finite() => format!("{d:E}"),
            _ => {
                let mut rendered = format!("\"{}\"", escape_string(&value.lexical()));
                if let Some(lang) = language {
                    let _ = write!(rendered, "@{lang}");
                } else if !datatype.is_xsd_string() {
                    let _ = write!(rendered, "^^{}", render_iri(graph, datatype.as_iri()));
                }
                rendered
            }
        },
    }
}

/// Compact an IRI against the graph's prefix bindings where the remainder
/// is a safe local name; fall back to the bracketed form.
fn render_iri(graph: &Graph, iri: &str) -> String {
    let mut best: Option<(&str, &str)> = None;
    for (prefix, namespace) in &graph.prefixes {
        if let Some(local) = iri.strip_prefix(namespace.as_str()) {
            if is_safe_local(local)
                && best.is_none_or(|(_, prev)| namespace.len() > iri.len() - prev.len())
            {
                best = Some((prefix, local));
            }
        }
    }

    match best {
        Some((prefix, local)) => format!("{prefix}:{local}"),
        None => format!("<{iri}>"),
    }
}

/// Local names we compact without needing PN_LOCAL escapes.
fn is_safe_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        Some(_) => false,
    }
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(escaped, "\\u{:04X}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
