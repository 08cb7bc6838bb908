//! Turtle lexer implementation using winnow.
//!
//! Tokenizes Turtle input into spanned tokens, failing fast on the first
//! lexical error with a line/column message and source context.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{delimited, opt, preceded};
use winnow::error::ContextError;
use winnow::stream::{AsChar, Location};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

// ---------------------------------------------------------------------------
// Character classes (Turtle grammar productions, shared with SPARQL)
// ---------------------------------------------------------------------------

/// PN_CHARS_BASE
fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' |
        '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' |
        '\u{00F8}'..='\u{02FF}' | '\u{0370}'..='\u{037D}' |
        '\u{037F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}' |
        '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' |
        '\u{3001}'..='\u{D7FF}' | '\u{F900}'..='\u{FDCF}' |
        '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}'
    )
}

/// PN_CHARS_U
fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

/// PN_CHARS
fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || c == '\u{00B7}'
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// Turtle whitespace.
fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed unescaped inside `<...>`.
fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}

fn bail<T>() -> ModalResult<T> {
    Err(winnow::error::ErrMode::Backtrack(ContextError::new()))
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

/// Lexer for Turtle documents.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input.
    ///
    /// Returns an error immediately on the first invalid token.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            if input.is_empty() {
                let pos = input.current_token_start();
                tokens.push(Token::new(TokenKind::Eof, pos, pos));
                break;
            }

            let start = input.current_token_start();
            match next_token(&mut input) {
                Ok(kind) => {
                    let end = input.current_token_start();
                    tokens.push(Token::new(kind, start, end));
                }
                Err(_) => return Err(self.make_error(start, &input)),
            }
        }

        Ok(tokens)
    }

    /// Build a descriptive error for an invalid token.
    fn make_error(&self, position: usize, input: &Input<'_>) -> TurtleError {
        let bad_char = input.as_ref().chars().next().unwrap_or('?');
        let (line, col) = self.line_col(position);
        let line_content = self.input.lines().nth(line.saturating_sub(1)).unwrap_or("");
        let pointer = " ".repeat(col.saturating_sub(1));

        let what = match bad_char {
            '"' | '\'' => "unterminated string literal".to_string(),
            '<' => "invalid or unterminated IRI".to_string(),
            c => format!("unexpected character '{}'", c.escape_default()),
        };
        let message = format!(
            "{what} at line {line}, column {col}\n  |\n{line} | {line_content}\n  | {pointer}^"
        );

        TurtleError::Lexer { position, message }
    }

    /// Convert a byte position to (line, column), 1-indexed.
    fn line_col(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for (i, c) in self.input.char_indices() {
            if i >= position {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// Skip whitespace and `#` comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.as_ref().starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
        } else {
            break;
        }
    }
}

/// Lex the next token, dispatching on the first character.
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let c = match input.as_ref().chars().next() {
        Some(c) => c,
        None => return bail(),
    };

    match c {
        '<' => lex_iri(input),
        '@' => lex_at_word(input),
        '"' | '\'' => lex_string(input),
        '^' => "^^".value(TokenKind::DoubleCaret).parse_next(input),
        ',' => any.value(TokenKind::Comma).parse_next(input),
        ';' => any.value(TokenKind::Semicolon).parse_next(input),
        '[' => any.value(TokenKind::LBracket).parse_next(input),
        ']' => any.value(TokenKind::RBracket).parse_next(input),
        '(' => any.value(TokenKind::LParen).parse_next(input),
        ')' => any.value(TokenKind::RParen).parse_next(input),
        '.' => {
            // A dot starts a decimal only when a digit follows.
            if input.as_ref()[1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
            {
                lex_number(input)
            } else {
                any.value(TokenKind::Dot).parse_next(input)
            }
        }
        '+' | '-' | '0'..='9' => lex_number(input),
        '_' if input.as_ref().starts_with("_:") => lex_blank_node_label(input),
        ':' => lex_local_after_prefix(input, ""),
        c if is_pn_chars_base(c) => lex_word(input),
        _ => bail(),
    }
}

/// `<...>` IRI reference, with \u / \U escapes.
fn lex_iri(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;

    let mut iri = String::new();
    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        iri.push_str(chunk);

        if input.as_ref().starts_with('>') {
            break;
        }
        if input.as_ref().starts_with('\\') {
            '\\'.parse_next(input)?;
            iri.push(unicode_escape(input)?);
        } else {
            return bail();
        }
    }

    '>'.parse_next(input)?;
    // Empty IRIs are allowed (relative reference to base)
    Ok(TokenKind::Iri(Arc::from(iri)))
}

/// `@prefix`, `@base`, or a language tag.
fn lex_at_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;
    let word: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)?;

    match word {
        "prefix" => Ok(TokenKind::KwPrefix),
        "base" => Ok(TokenKind::KwBase),
        _ => Ok(TokenKind::LangTag(Arc::from(word))),
    }
}

/// `_:label` blank node.
fn lex_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "_:".parse_next(input)?;

    let first: char =
        one_of(|c: char| is_pn_chars_u(c) || c.is_ascii_digit()).parse_next(input)?;
    let tail = name_tail(input)?;

    Ok(TokenKind::BlankNodeLabel(Arc::from(format!("{first}{tail}"))))
}

/// PN_CHARS continuation with internal dots. A dot followed by anything
/// else ends the name (it is the statement terminator).
fn name_tail(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        result.push_str(chunk);

        if input.as_ref().starts_with('.')
            && input.as_ref()[1..].chars().next().is_some_and(is_pn_chars)
        {
            '.'.parse_next(input)?;
            result.push('.');
            continue;
        }
        break;
    }
    Ok(result)
}

/// A bare word: keyword (`a`, `true`, `false`, `PREFIX`, `BASE`) or the
/// prefix part of a prefixed name.
fn lex_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let first: char = one_of(is_pn_chars_base).parse_next(input)?;
    let word = format!("{first}{}", name_tail(input)?);

    if input.as_ref().starts_with(':') {
        ':'.parse_next(input)?;
        return lex_local_after_prefix(input, &word);
    }

    match word.as_str() {
        "a" => Ok(TokenKind::KwA),
        "true" => Ok(TokenKind::KwTrue),
        "false" => Ok(TokenKind::KwFalse),
        "PREFIX" => Ok(TokenKind::KwSparqlPrefix),
        "BASE" => Ok(TokenKind::KwSparqlBase),
        _ => bail(),
    }
}

/// The local part after `prefix:` (the colon already consumed for non-default
/// prefixes; for the default prefix the caller consumes it via this path).
fn lex_local_after_prefix(input: &mut Input<'_>, prefix: &str) -> ModalResult<TokenKind> {
    if prefix.is_empty() && input.as_ref().starts_with(':') {
        ':'.parse_next(input)?;
    }

    let local = opt(pn_local).parse_next(input)?;
    match local {
        Some(local) => Ok(TokenKind::PrefixedName {
            prefix: Arc::from(prefix),
            local: Arc::from(local.as_str()),
        }),
        None => Ok(TokenKind::PrefixedNameNs(Arc::from(prefix))),
    }
}

/// PN_LOCAL: name characters plus internal dots, `:` and `%XX` escapes.
fn pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first = match input.as_ref().chars().next() {
        Some(c) => c,
        None => return bail(),
    };
    if !(is_pn_chars_u(first) || first == ':' || first.is_ascii_digit() || first == '%') {
        return bail();
    }

    let mut result = String::new();
    loop {
        let chunk: &str =
            take_while(0.., |c: char| is_pn_chars(c) || c == ':').parse_next(input)?;
        result.push_str(chunk);

        if input.as_ref().starts_with('.') {
            // Internal dot only; a trailing dot ends the statement instead.
            let next = input.as_ref()[1..].chars().next();
            if next.is_some_and(|c| is_pn_chars(c) || c == ':' || c == '%') {
                '.'.parse_next(input)?;
                result.push('.');
                continue;
            }
            break;
        }

        if input.as_ref().starts_with('%') {
            '%'.parse_next(input)?;
            let hex: &str = take_while(2..=2, AsChar::is_hex_digit).parse_next(input)?;
            result.push('%');
            result.push_str(hex);
            continue;
        }

        break;
    }

    if result.is_empty() {
        return bail();
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// String literal: short or long, double- or single-quoted.
fn lex_string(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let s = if input.as_ref().starts_with("\"\"\"") {
        delimited("\"\"\"", |i: &mut Input<'_>| long_string_content(i, '"'), "\"\"\"")
            .parse_next(input)?
    } else if input.as_ref().starts_with("'''") {
        delimited("'''", |i: &mut Input<'_>| long_string_content(i, '\''), "'''")
            .parse_next(input)?
    } else if input.as_ref().starts_with('"') {
        delimited('"', |i: &mut Input<'_>| short_string_content(i, '"'), '"').parse_next(input)?
    } else {
        delimited('\'', |i: &mut Input<'_>| short_string_content(i, '\''), '\'')
            .parse_next(input)?
    };

    Ok(TokenKind::String(Arc::from(s)))
}

fn short_string_content(input: &mut Input<'_>, quote: char) -> ModalResult<String> {
    let mut result = String::new();
    loop {
        let chunk: &str =
            take_while(0.., |c| c != quote && c != '\\' && c != '\n' && c != '\r')
                .parse_next(input)?;
        result.push_str(chunk);

        if input.as_ref().starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(escape_char(input)?);
        } else {
            break;
        }
    }
    Ok(result)
}

fn long_string_content(input: &mut Input<'_>, quote: char) -> ModalResult<String> {
    let terminator = if quote == '"' { "\"\"\"" } else { "'''" };
    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., |c| c != quote && c != '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.as_ref().starts_with(terminator) {
            break;
        }
        if input.as_ref().starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(escape_char(input)?);
        } else {
            // A lone quote character inside a long string
            let c: char = any.parse_next(input)?;
            result.push(c);
        }
    }
    Ok(result)
}

/// Character after a backslash.
fn escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let hex: &str = take_while(width..=width, AsChar::is_hex_digit).parse_next(input)?;
            let code = match u32::from_str_radix(hex, 16) {
                Ok(code) => code,
                Err(_) => return bail(),
            };
            match char::from_u32(code) {
                Some(c) => Ok(c),
                None => bail(),
            }
        }
        _ => bail(),
    }
}

/// `\uXXXX` / `\UXXXXXXXX` inside an IRI (backslash already consumed).
fn unicode_escape(input: &mut Input<'_>) -> ModalResult<char> {
    let c = input.as_ref().chars().next();
    if !matches!(c, Some('u') | Some('U')) {
        return bail();
    }
    escape_char(input)
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Integer, decimal, or double.
fn lex_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let text: &str = (
        opt(one_of(['+', '-'])),
        alt_number_body,
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)?;

    let has_exponent = text.contains(['e', 'E']);
    let has_fraction = text.contains('.');

    if has_exponent {
        match text.parse::<f64>() {
            Ok(v) => Ok(TokenKind::Double(v)),
            Err(_) => bail(),
        }
    } else if has_fraction {
        Ok(TokenKind::Decimal(Arc::from(text)))
    } else {
        match text.parse::<i64>() {
            Ok(v) => Ok(TokenKind::Integer(v)),
            Err(_) => bail(),
        }
    }
}

/// Digits with an optional fractional part; the trailing-dot case
/// (`30.` ending a statement) leaves the dot unconsumed.
fn alt_number_body<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    if input.as_ref().starts_with('.') {
        return preceded('.', digit1).take().parse_next(input);
    }

    (digit1, opt_fraction).take().parse_next(input)
}

fn opt_fraction<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    if input.as_ref().starts_with('.')
        && input.as_ref()[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return ('.', digit1).take().parse_next(input);
    }
    Ok("")
}

/// Tokenize a Turtle document string.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !matches!(k, TokenKind::Eof))
            .collect()
    }

    #[test]
    fn test_iri() {
        assert_eq!(
            tok("<http://example.org/>"),
            vec![TokenKind::Iri(Arc::from("http://example.org/"))]
        );
        assert_eq!(tok("<>"), vec![TokenKind::Iri(Arc::from(""))]);
    }

    #[test]
    fn test_prefixed_name() {
        assert_eq!(
            tok("schema:about"),
            vec![TokenKind::PrefixedName {
                prefix: Arc::from("schema"),
                local: Arc::from("about"),
            }]
        );
        assert_eq!(
            tok("schema:"),
            vec![TokenKind::PrefixedNameNs(Arc::from("schema"))]
        );
        assert_eq!(
            tok(":name"),
            vec![TokenKind::PrefixedName {
                prefix: Arc::from(""),
                local: Arc::from("name"),
            }]
        );
    }

    #[test]
    fn test_blank_node_label() {
        assert_eq!(tok("_:b1"), vec![TokenKind::BlankNodeLabel(Arc::from("b1"))]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(tok("a"), vec![TokenKind::KwA]);
        assert_eq!(tok("true"), vec![TokenKind::KwTrue]);
        assert_eq!(tok("false"), vec![TokenKind::KwFalse]);
        assert_eq!(tok("@prefix"), vec![TokenKind::KwPrefix]);
        assert_eq!(tok("@base"), vec![TokenKind::KwBase]);
        assert_eq!(tok("PREFIX"), vec![TokenKind::KwSparqlPrefix]);
        assert_eq!(tok("BASE"), vec![TokenKind::KwSparqlBase]);
    }

    #[test]
    fn test_lang_tag() {
        assert_eq!(tok("@en"), vec![TokenKind::LangTag(Arc::from("en"))]);
        assert_eq!(tok("@en-US"), vec![TokenKind::LangTag(Arc::from("en-US"))]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(tok("\"hello\""), vec![TokenKind::String(Arc::from("hello"))]);
        assert_eq!(tok("'hello'"), vec![TokenKind::String(Arc::from("hello"))]);
        assert_eq!(
            tok("\"line\\nbreak\""),
            vec![TokenKind::String(Arc::from("line\nbreak"))]
        );
        assert_eq!(
            tok("\"\"\"two\nlines\"\"\""),
            vec![TokenKind::String(Arc::from("two\nlines"))]
        );
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(tok("\"\\u00E9\""), vec![TokenKind::String(Arc::from("é"))]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tok("42"), vec![TokenKind::Integer(42)]);
        assert_eq!(tok("-7"), vec![TokenKind::Integer(-7)]);
        assert_eq!(tok("3.14"), vec![TokenKind::Decimal(Arc::from("3.14"))]);
        assert_eq!(tok("1e10"), vec![TokenKind::Double(1e10)]);
    }

    #[test]
    fn test_integer_then_statement_dot() {
        assert_eq!(tok("42 ."), vec![TokenKind::Integer(42), TokenKind::Dot]);
        assert_eq!(tok("42."), vec![TokenKind::Integer(42), TokenKind::Dot]);
    }

    #[test]
    fn test_statement_dot_without_space() {
        assert_eq!(tok("a."), vec![TokenKind::KwA, TokenKind::Dot]);
        assert_eq!(
            tok("_:ms."),
            vec![TokenKind::BlankNodeLabel(Arc::from("ms")), TokenKind::Dot]
        );
        assert_eq!(
            tok("bibo:Manuscript."),
            vec![
                TokenKind::PrefixedName {
                    prefix: Arc::from("bibo"),
                    local: Arc::from("Manuscript"),
                },
                TokenKind::Dot
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tok(".;,^^"),
            vec![
                TokenKind::Dot,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::DoubleCaret
            ]
        );
        assert_eq!(
            tok("[]()"),
            vec![
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LParen,
                TokenKind::RParen
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            tok("dc:title # trailing comment\ndc:creator"),
            vec![
                TokenKind::PrefixedName {
                    prefix: Arc::from("dc"),
                    local: Arc::from("title"),
                },
                TokenKind::PrefixedName {
                    prefix: Arc::from("dc"),
                    local: Arc::from("creator"),
                },
            ]
        );
    }

    #[test]
    fn test_error_reports_line_and_column() {
        let err = tokenize("dc:title \"ok\" .\ndc:x $ .").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains('$'), "{msg}");
    }

    #[test]
    fn test_error_unterminated_string() {
        let err = tokenize("dc:title \"oops").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
