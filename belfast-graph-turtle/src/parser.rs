//! Turtle parser.
//!
//! Recursive-descent over the token stream, building a
//! [`belfast_graph_ir::Graph`] directly. Collections are desugared to
//! `rdf:first`/`rdf:rest`/`rdf:nil` triples so the graph carries the same
//! list encoding the fingerprint walk reads back.

use std::collections::HashMap;

use belfast_graph_ir::{Datatype, Graph, Term};
use belfast_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::lex::{tokenize, Token, TokenKind};

/// Turtle parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    graph: Graph,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
    /// Counter for generated blank node labels
    next_blank: usize,
}

impl Parser {
    /// Create a new parser over the given input.
    pub fn new(input: &str) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            graph: Graph::new(),
            prefixes: HashMap::new(),
            base: None,
            next_blank: 0,
        })
    }

    /// Parse the entire document and return the resulting graph.
    pub fn parse(mut self) -> Result<Graph> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(self.graph)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind) {
            self.advance();
            Ok(())
        } else {
            Err(TurtleError::parse(
                self.current().start,
                format!("expected {}, found {}", kind, self.current().kind),
            ))
        }
    }

    /// A fresh blank node for `[]`, `[...]`, and collection cells.
    fn fresh_blank(&mut self) -> Term {
        let term = Term::blank(format!("genid{}", self.next_blank));
        self.next_blank += 1;
        term
    }

    // -----------------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------------

    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples(),
        }
    }

    fn parse_prefix_directive(&mut self) -> Result<()> {
        let needs_dot = matches!(self.current().kind, TokenKind::KwPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected prefix namespace",
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => self.resolve_iri(iri)?,
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for prefix namespace",
                ))
            }
        };
        self.advance();

        self.graph.add_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        if needs_dot {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_base_directive(&mut self) -> Result<()> {
        let needs_dot = matches!(self.current().kind, TokenKind::KwBase);
        self.advance();

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for base",
                ))
            }
        };
        self.advance();

        self.graph.set_base(&base_iri);
        self.base = Some(base_iri);

        if needs_dot {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_triples(&mut self) -> Result<()> {
        let bracket_subject = matches!(self.current().kind, TokenKind::LBracket);
        let subject = self.parse_subject()?;

        // `[ ... ] .` is a complete statement; everything else needs at
        // least one predicate-object pair.
        if !(bracket_subject && matches!(self.current().kind, TokenKind::Dot)) {
            self.parse_predicate_object_list(&subject)?;
        }

        self.expect(&TokenKind::Dot)
    }

    fn parse_subject(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri)?;
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(&prefix, "")?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(Term::blank(label.as_ref()))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected subject, found {}", self.current().kind),
            )),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &Term) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, &predicate)?;

            if matches!(self.current().kind, TokenKind::Semicolon) {
                self.advance();
                // A trailing semicolon before `.` or `]` is allowed
                if matches!(
                    self.current().kind,
                    TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof
                ) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_predicate(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri)?;
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(&prefix, "")?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::KwA => {
                self.advance();
                Ok(Term::iri(rdf::TYPE))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected predicate, found {}", self.current().kind),
            )),
        }
    }

    fn parse_object_list(&mut self, subject: &Term, predicate: &Term) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.graph
                .add_triple(subject.clone(), predicate.clone(), object);

            if matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri)?;
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(&prefix, "")?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(Term::blank(label.as_ref()))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected object, found {}", self.current().kind),
            )),
        }
    }

    fn parse_literal(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::String(value) => {
                self.advance();
                match self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        self.advance();
                        Ok(Term::lang_string(value.as_ref(), lang.as_ref()))
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype_iri = self.parse_datatype_iri()?;
                        Ok(Term::typed(
                            value.as_ref(),
                            Datatype::from_iri(datatype_iri),
                        ))
                    }
                    _ => Ok(Term::string(value.as_ref())),
                }
            }
            TokenKind::Integer(n) => {
                self.advance();
                Ok(Term::integer(n))
            }
            TokenKind::Decimal(s) => {
                self.advance();
                Ok(Term::typed(s.as_ref(), Datatype::xsd_decimal()))
            }
            TokenKind::Double(n) => {
                self.advance();
                Ok(Term::double(n))
            }
            TokenKind::KwTrue => {
                self.advance();
                Ok(Term::boolean(true))
            }
            TokenKind::KwFalse => {
                self.advance();
                Ok(Term::boolean(false))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected literal, found {}", self.current().kind),
            )),
        }
    }

    fn parse_datatype_iri(&mut self) -> Result<String> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri)?;
                self.advance();
                Ok(resolved)
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(iri)
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected datatype IRI, found {}", self.current().kind),
            )),
        }
    }

    /// `[ predicate object ; ... ]` - returns the fresh blank node.
    fn parse_blank_node_property_list(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LBracket)?;
        let bnode = self.fresh_blank();

        if !matches!(self.current().kind, TokenKind::RBracket) {
            self.parse_predicate_object_list(&bnode)?;
        }

        self.expect(&TokenKind::RBracket)?;
        Ok(bnode)
    }

    /// `( item1 item2 ... )` - desugared to rdf:first/rest/nil triples.
    fn parse_collection(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LParen)?;

        if matches!(self.current().kind, TokenKind::RParen) {
            self.advance();
            return Ok(Term::iri(rdf::NIL));
        }

        let head = self.fresh_blank();
        let mut cell = head.clone();
        loop {
            let item = self.parse_object()?;
            self.graph
                .add_triple(cell.clone(), Term::iri(rdf::FIRST), item);

            if matches!(self.current().kind, TokenKind::RParen) {
                self.graph
                    .add_triple(cell, Term::iri(rdf::REST), Term::iri(rdf::NIL));
                break;
            }

            let next = self.fresh_blank();
            self.graph
                .add_triple(cell, Term::iri(rdf::REST), next.clone());
            cell = next;
        }

        self.expect(&TokenKind::RParen)?;
        Ok(head)
    }

    // -----------------------------------------------------------------------
    // IRI handling
    // -----------------------------------------------------------------------

    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{namespace}{local}")),
            None => Err(TurtleError::UndefinedPrefix(prefix.to_string())),
        }
    }

    /// Resolve a potentially relative IRI reference against `@base`
    /// (RFC 3986 section 5, the cases Turtle data actually exercises).
    fn resolve_iri(&self, reference: &str) -> Result<String> {
        if reference.is_empty() {
            return self.base.clone().ok_or_else(|| {
                TurtleError::IriResolution("empty IRI reference without base".to_string())
            });
        }

        if has_scheme(reference) {
            return Ok(reference.to_string());
        }

        let base = self.base.as_deref().ok_or_else(|| {
            TurtleError::IriResolution(format!("relative IRI '{reference}' without base"))
        })?;

        let (scheme, authority, base_path) = split_iri(base);

        if let Some(rest) = reference.strip_prefix("//") {
            return Ok(format!("{scheme}://{rest}"));
        }

        if reference.starts_with('#') {
            return Ok(format!("{scheme}://{authority}{base_path}{reference}"));
        }

        let path = if reference.starts_with('/') {
            remove_dot_segments(reference)
        } else {
            // Merge with the base path minus its last segment
            let dir = match base_path.rfind('/') {
                Some(pos) => &base_path[..=pos],
                None => "/",
            };
            remove_dot_segments(&format!("{dir}{reference}"))
        };

        Ok(format!("{scheme}://{authority}{path}"))
    }
}

/// Check for an absolute IRI: a scheme followed by a colon.
fn has_scheme(reference: &str) -> bool {
    match reference.find(':') {
        Some(pos) => {
            let scheme = &reference[..pos];
            !scheme.is_empty()
                && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Split an absolute IRI into (scheme, authority, path-and-beyond).
fn split_iri(iri: &str) -> (&str, &str, &str) {
    let (scheme, rest) = match iri.find("://") {
        Some(pos) => (&iri[..pos], &iri[pos + 3..]),
        None => return (iri, "", ""),
    };
    match rest.find('/') {
        Some(pos) => (scheme, &rest[..pos], &rest[pos..]),
        None => (scheme, rest, ""),
    }
}

/// Remove `.` and `..` segments from a path (RFC 3986 section 5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." => {
                output.pop();
            }
            s => output.push(s),
        }
    }

    let result = output.join("/");
    if path.starts_with('/') && !result.starts_with('/') {
        format!("/{result}")
    } else {
        result
    }
}

/// Parse a Turtle document into a graph.
pub fn parse(input: &str) -> Result<Graph> {
    Parser::new(input)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use belfast_graph_ir::LiteralValue;

    #[test]
    fn test_simple_triple() {
        let graph =
            parse(r#"<http://example.org/doc> <http://purl.org/dc/terms/title> "Poems" ."#)
                .unwrap();

        assert_eq!(graph.len(), 1);
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s.as_iri(), Some("http://example.org/doc"));
        assert_eq!(triple.p.as_iri(), Some("http://purl.org/dc/terms/title"));
        assert_eq!(triple.o.literal_str(), Some("Poems"));
    }

    #[test]
    fn test_prefix_directive() {
        let graph = parse(
            r#"
            @prefix dc: <http://purl.org/dc/terms/> .
            <http://example.org/doc> dc:title "Poems" .
        "#,
        )
        .unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(
            graph.prefixes.get("dc").map(String::as_str),
            Some("http://purl.org/dc/terms/")
        );
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.p.as_iri(), Some("http://purl.org/dc/terms/title"));
    }

    #[test]
    fn test_a_keyword() {
        let graph = parse(
            r#"
            @prefix bibo: <http://purl.org/ontology/bibo/> .
            _:ms1 a bibo:Manuscript .
        "#,
        )
        .unwrap();

        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.p.as_iri(), Some(rdf::TYPE));
        assert_eq!(
            triple.o.as_iri(),
            Some("http://purl.org/ontology/bibo/Manuscript")
        );
    }

    #[test]
    fn test_semicolon_and_comma() {
        let graph = parse(
            r#"
            @prefix s: <http://schema.org/> .
            <http://example.org/doc> s:about <http://example.org/topic> ;
                s:mentions _:a, _:b .
        "#,
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_blank_node_property_list() {
        let graph = parse(
            r#"
            @prefix s: <http://schema.org/> .
            _:ms s:author [ s:familyName "Heaney" ; s:givenName "Seamus" ] .
        "#,
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        let ms = Term::blank("ms");
        let author = graph.value(&ms, "http://schema.org/author").unwrap().clone();
        assert!(author.is_blank());
        assert_eq!(
            graph
                .value(&author, "http://schema.org/familyName")
                .and_then(Term::literal_str),
            Some("Heaney")
        );
    }

    #[test]
    fn test_collection_desugars_to_list_triples() {
        let graph = parse(
            r#"
            @prefix dc: <http://purl.org/dc/terms/> .
            _:ms dc:title ( "The Group" "Belfast Poems" ) .
        "#,
        )
        .unwrap();

        // _:ms dc:title _:l0 + two first/rest pairs
        assert_eq!(graph.len(), 5);

        let ms = Term::blank("ms");
        let head = graph.value(&ms, "http://purl.org/dc/terms/title").unwrap();
        let titles = belfast_graph_ir::collection::expand_collection(&graph, head);
        assert_eq!(
            titles,
            vec![Term::string("The Group"), Term::string("Belfast Poems")]
        );
    }

    #[test]
    fn test_empty_collection() {
        let graph = parse(
            r#"
            @prefix dc: <http://purl.org/dc/terms/> .
            _:ms dc:title ( ) .
        "#,
        )
        .unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.iter().next().unwrap().o.as_iri(), Some(rdf::NIL));
    }

    #[test]
    fn test_typed_and_tagged_literals() {
        let graph = parse(
            r#"
            @prefix x: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            x:s x:date "1963-10-08"^^xsd:date ;
                x:label "dán"@ga ;
                x:count 3 ;
                x:flag true .
        "#,
        )
        .unwrap();

        assert_eq!(graph.len(), 4);
        let s = Term::iri("http://example.org/s");
        let date = graph.value(&s, "http://example.org/date").unwrap();
        let (_, dt, _) = date.as_literal().unwrap();
        assert_eq!(dt.as_iri(), "http://www.w3.org/2001/XMLSchema#date");

        let label = graph.value(&s, "http://example.org/label").unwrap();
        assert_eq!(label.as_literal().unwrap().2, Some("ga"));

        let count = graph.value(&s, "http://example.org/count").unwrap();
        assert!(matches!(
            count.as_literal().unwrap().0,
            LiteralValue::Integer(3)
        ));
    }

    #[test]
    fn test_sparql_style_prefix() {
        let graph = parse(
            r#"
            PREFIX dc: <http://purl.org/dc/terms/>
            <http://example.org/doc> dc:title "Poems" .
        "#,
        )
        .unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_base_resolution() {
        let graph = parse(
            r#"
            @base <http://example.org/path/> .
            <doc> <title> "x" .
            <../other> <title> "y" .
            </root> <title> "z" .
        "#,
        )
        .unwrap();

        let subjects: Vec<_> = graph.iter().filter_map(|t| t.s.as_iri()).collect();
        assert!(subjects.contains(&"http://example.org/path/doc"));
        assert!(subjects.contains(&"http://example.org/other"));
        assert!(subjects.contains(&"http://example.org/root"));
    }

    #[test]
    fn test_relative_iri_without_base_fails() {
        let err = parse(r#"<doc> <title> "x" ."#).unwrap_err();
        assert!(matches!(err, TurtleError::IriResolution(_)));
    }

    #[test]
    fn test_undefined_prefix_fails() {
        let err = parse("nope:thing <http://example.org/p> \"x\" .").unwrap_err();
        assert!(matches!(err, TurtleError::UndefinedPrefix(p) if p == "nope"));
    }

    #[test]
    fn test_generated_blanks_are_distinct() {
        let graph = parse(
            r#"
            @prefix s: <http://schema.org/> .
            _:x s:author [ s:name "A" ] .
            _:y s:author [ s:name "B" ] .
        "#,
        )
        .unwrap();

        let authors: Vec<_> = graph
            .iter()
            .filter(|t| t.p.as_iri() == Some("http://schema.org/author"))
            .map(|t| t.o.clone())
            .collect();
        assert_eq!(authors.len(), 2);
        assert_ne!(authors[0], authors[1]);
    }
}
