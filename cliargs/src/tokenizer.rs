//! Tokenizer for raw command-line argument strings

/// Split a raw command-line string into individual argument tokens
///
/// Tokens are separated by spaces, with two escape hatches applied in a
/// single left-to-right pass:
///
/// - A double quote (`"`) toggles quoted mode; spaces inside a quoted span
///   belong to the current token and the quote characters themselves are
///   dropped.
/// - A backslash (`\`) is consumed and makes the following character literal
///   content, whatever it is. An escaped quote does not toggle quoted mode
///   and an escaped space does not separate tokens.
///
/// Consecutive separators are not collapsed: every unescaped, unquoted space
/// terminates the current token, even an empty one. At end of input the
/// current buffer is always flushed as the final token: an unterminated
/// quote closes implicitly and a trailing backslash is dropped. The empty
/// string therefore tokenizes to one empty token.
///
/// # Arguments
///
/// * `raw` - The raw argument string to split
///
/// # Returns
///
/// The argument tokens in order of appearance.
///
/// # Examples
///
/// ```
/// use cliargs::tokenize_arg_string;
///
/// assert_eq!(tokenize_arg_string(r#"a "b c" d"#), vec!["a", "b c", "d"]);
/// assert_eq!(tokenize_arg_string(r"a\ b"), vec!["a b"]);
/// assert_eq!(tokenize_arg_string(r#""a\"b""#), vec![r#"a"b"#]);
/// ```
#[must_use]
pub fn tokenize_arg_string(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut pending_escape = false;

    for c in raw.chars() {
        if pending_escape {
            current.push(c);
            pending_escape = false;
            continue;
        }
        match c {
            '\\' => pending_escape = true,
            '"' => in_quote = !in_quote,
            ' ' if !in_quote => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    // The whole input must be read to find the final token, so the sequence
    // is realized eagerly. The last buffer is flushed unconditionally.
    tokens.push(current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(tokenize_arg_string("a b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_span_keeps_spaces() {
        assert_eq!(tokenize_arg_string(r#"a "b c" d"#), vec!["a", "b c", "d"]);
    }

    #[test]
    fn test_escaped_space_is_literal() {
        assert_eq!(tokenize_arg_string(r"a\ b"), vec!["a b"]);
    }

    #[test]
    fn test_escaped_quote_inside_quotes() {
        assert_eq!(tokenize_arg_string(r#""a\"b""#), vec![r#"a"b"#]);
    }

    #[test]
    fn test_escaped_backslash_is_literal() {
        assert_eq!(tokenize_arg_string(r"a\\b"), vec![r"a\b"]);
    }

    #[test]
    fn test_escape_applies_to_any_character() {
        assert_eq!(tokenize_arg_string(r"a\bc"), vec!["abc"]);
    }

    #[test]
    fn test_consecutive_separators_produce_empty_tokens() {
        assert_eq!(tokenize_arg_string("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_trailing_separator_produces_empty_token() {
        assert_eq!(tokenize_arg_string("a "), vec!["a", ""]);
    }

    #[test]
    fn test_empty_input_produces_one_empty_token() {
        assert_eq!(tokenize_arg_string(""), vec![""]);
    }

    #[test]
    fn test_unterminated_quote_closes_implicitly() {
        assert_eq!(tokenize_arg_string(r#"a "b c"#), vec!["a", "b c"]);
    }

    #[test]
    fn test_trailing_backslash_is_dropped() {
        assert_eq!(tokenize_arg_string(r"a\"), vec!["a"]);
    }

    #[test]
    fn test_quotes_merge_into_surrounding_token() {
        assert_eq!(tokenize_arg_string(r#"a"b c"d"#), vec!["ab cd"]);
    }

    #[test]
    fn test_only_spaces() {
        assert_eq!(tokenize_arg_string("  "), vec!["", "", ""]);
    }
}
