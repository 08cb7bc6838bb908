//! Turtle token types.

use std::sync::Arc;

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The token kind
    pub kind: TokenKind,
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Token kinds for Turtle.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Full IRI: `<http://example.org/>`
    Iri(Arc<str>),

    /// Prefixed name namespace only: `prefix:`
    PrefixedNameNs(Arc<str>),

    /// Prefixed name with local part: `prefix:local`
    PrefixedName {
        /// Namespace prefix (without colon)
        prefix: Arc<str>,
        /// Local name
        local: Arc<str>,
    },

    /// Labeled blank node: `_:name`
    BlankNodeLabel(Arc<str>),

    /// String literal (unescaped content)
    String(Arc<str>),

    /// Integer literal
    Integer(i64),

    /// Decimal literal (kept as text to preserve the lexical form)
    Decimal(Arc<str>),

    /// Double literal (with exponent)
    Double(f64),

    /// Language tag, without the `@`
    LangTag(Arc<str>),

    /// `@prefix` directive
    KwPrefix,
    /// `@base` directive
    KwBase,
    /// SPARQL-style `PREFIX`
    KwSparqlPrefix,
    /// SPARQL-style `BASE`
    KwSparqlBase,
    /// `a` (shorthand for rdf:type)
    KwA,
    /// `true`
    KwTrue,
    /// `false`
    KwFalse,

    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `^^` (datatype marker)
    DoubleCaret,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// End of input
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{s}>"),
            TokenKind::PrefixedNameNs(s) => write!(f, "{s}:"),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{prefix}:{local}"),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{s}"),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Integer(n) => write!(f, "{n}"),
            TokenKind::Decimal(s) => write!(f, "{s}"),
            TokenKind::Double(n) => write!(f, "{n:e}"),
            TokenKind::LangTag(s) => write!(f, "@{s}"),
            TokenKind::KwPrefix => write!(f, "@prefix"),
            TokenKind::KwBase => write!(f, "@base"),
            TokenKind::KwSparqlPrefix => write!(f, "PREFIX"),
            TokenKind::KwSparqlBase => write!(f, "BASE"),
            TokenKind::KwA => write!(f, "a"),
            TokenKind::KwTrue => write!(f, "true"),
            TokenKind::KwFalse => write!(f, "false"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::DoubleCaret => write!(f, "^^"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
