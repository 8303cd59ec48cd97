//! Search-term sanitization.
//!
//! User-supplied search terms are matched as case-insensitive substrings
//! against note titles and bodies. Before a term reaches the store's
//! pattern matching, every character that is not an ASCII letter, digit,
//! or space is stripped. This keeps pattern metacharacters (`%`, `_`,
//! regex syntax) out of the match entirely rather than trying to escape
//! them per backend.

/// Strip every character that is not an ASCII letter, digit, or space.
///
/// An empty result (empty input, or input that was all special characters)
/// is valid: as a substring pattern it matches every note the user owns.
#[must_use]
pub fn sanitize_search_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_search_term("hello world 42"), "hello world 42");
    }

    #[test]
    fn test_strips_html() {
        assert_eq!(sanitize_search_term("abc<script>"), "abcscript");
    }

    #[test]
    fn test_strips_pattern_metacharacters() {
        assert_eq!(sanitize_search_term("%_.*^$[]()"), "");
        assert_eq!(sanitize_search_term("50% off_sale"), "50 offsale");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(sanitize_search_term(""), "");
    }

    #[test]
    fn test_all_special_input_becomes_empty() {
        assert_eq!(sanitize_search_term("!!!???"), "");
    }

    #[test]
    fn test_strips_non_ascii() {
        assert_eq!(sanitize_search_term("café"), "caf");
    }
}
