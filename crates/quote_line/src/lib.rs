// crates/quote_line/src/lib.rs

/// Converts a line of text into a double-quoted string literal.
///
/// Backslashes are doubled first, so the backslashes introduced for quotes
/// and newlines are not escaped a second time. Any newline in the input
/// (including a trailing one) becomes the two characters `\n`.
pub fn quote_line(line: &str) -> String {
    let escaped = line
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

/// Reverses [`quote_line`], returning the original text of a literal.
///
/// Only the three escapes produced by `quote_line` are accepted. Anything
/// else (a missing surrounding quote, an unknown escape, a dangling
/// backslash or a bare quote inside the literal) is an error.
pub fn unquote_line(literal: &str) -> Result<String, String> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| format!("Literal is not wrapped in double quotes: {}", literal))?;

    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('\\') => output.push('\\'),
                Some('"') => output.push('"'),
                Some('n') => output.push('\n'),
                Some(other) => return Err(format!("Unsupported escape sequence: \\{}", other)),
                None => return Err("Literal ends with a dangling backslash".to_string()),
            },
            '"' => return Err(format!("Unescaped double quote inside literal: {}", literal)),
            _ => output.push(ch),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_plain_line() {
        assert_eq!(quote_line("hello"), "\"hello\"");
    }

    #[test]
    fn test_trailing_newline_is_escaped() {
        assert_eq!(quote_line("x\n"), "\"x\\n\"");
    }

    #[test]
    fn test_double_quote() {
        assert_eq!(quote_line("y\"z\n"), "\"y\\\"z\\n\"");
    }

    #[test]
    fn test_backslash_escaped_before_quote() {
        // \" in the input must become \\\" and not \\\\\"
        assert_eq!(quote_line("\\\""), "\"\\\\\\\"\"");
    }

    #[test]
    fn test_literal_backslash_n_is_not_a_newline() {
        assert_eq!(quote_line("a\\nb"), "\"a\\\\nb\"");
        assert_eq!(unquote_line("\"a\\\\nb\"").unwrap(), "a\\nb");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(quote_line(""), "\"\"");
        assert_eq!(unquote_line("\"\"").unwrap(), "");
    }

    #[test]
    fn test_unquote_rejects_missing_quotes() {
        assert!(unquote_line("abc").is_err());
        assert!(unquote_line("\"abc").is_err());
        assert!(unquote_line("\"").is_err());
    }

    #[test]
    fn test_unquote_rejects_unknown_escape() {
        assert!(unquote_line("\"\\t\"").is_err());
    }

    #[test]
    fn test_unquote_rejects_bare_inner_quote() {
        assert!(unquote_line("\"a\"b\"").is_err());
    }

    #[test]
    fn test_unquote_rejects_dangling_backslash() {
        // "\" with the closing quote consumed as the literal's end.
        assert!(unquote_line("\"a\\\"").is_err());
    }

    #[test]
    fn test_round_trip_mixed_specials() {
        let samples = [
            "plain text\n",
            "C:\\path\\to\\file\n",
            "say \"hi\"\n",
            "\\\"\\n\"\\\n",
            "two\nnewlines\n",
            "no newline at end",
            "",
        ];
        for sample in samples {
            assert_eq!(unquote_line(&quote_line(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_round_trip_random_lines() {
        let alphabet = ['a', 'Z', ' ', '\\', '"', '\n', 'n', '\t', 'é'];
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let len = rng.gen_range(0..40);
            let line: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let literal = quote_line(&line);
            assert!(!literal.contains('\n'), "literal spans lines: {:?}", literal);
            assert_eq!(unquote_line(&literal).unwrap(), line);
        }
    }
}
