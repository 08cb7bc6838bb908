//! Title slugification.
//!
//! Titles arrive from several archives with inconsistent case, accents,
//! and punctuation ("The Group!", "the group", "Dán"/"Dan"). Slugs erase
//! those differences before titles enter the fingerprint, so equivalent
//! records hash identically.

use unicode_normalization::UnicodeNormalization;

/// Slugify a title: NFKD-decompose and keep the ASCII base characters,
/// lowercase, drop punctuation, collapse whitespace and hyphen runs to a
/// single `-`, trim separators from the ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    // NFKD first: accented letters decompose into an ASCII base plus
    // combining marks, and the marks fall out with the other non-ASCII.
    for c in text.nfkd() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
        // everything else (punctuation, combining marks) is dropped
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(slugify("Letter"), "letter");
        assert_eq!(slugify("SOUNDINGS"), "soundings");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("The Group!"), "the-group");
        assert_eq!(slugify("the group"), "the-group");
        assert_eq!(slugify("Poem, untitled."), "poem-untitled");
    }

    #[test]
    fn test_transliterates_accents() {
        assert_eq!(slugify("Dán"), "dan");
        assert_eq!(slugify("dan"), "dan");
        assert_eq!(slugify("Séamus Ó Duilearga"), "seamus-o-duilearga");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("a  -  b"), "a-b");
        assert_eq!(slugify("  leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_keeps_digits_and_underscores() {
        assert_eq!(slugify("Draft 2"), "draft-2");
        assert_eq!(slugify("a_b"), "a_b");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!..."), "");
    }
}
