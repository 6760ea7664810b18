//! Helpers for scripts handed to `document::eval`.

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
pub fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Line terminators inside string literals break older engines
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_quoted() {
        assert_eq!(js_string_escape("about"), "\"about\"");
        assert_eq!(js_string_escape(""), "\"\"");
    }

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(js_string_escape(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(js_string_escape("a\nb\tc\r"), "\"a\\nb\\tc\\r\"");
        assert_eq!(js_string_escape("\u{0007}"), "\"\\u0007\"");
        assert_eq!(js_string_escape("\u{2028}"), "\"\\u2028\"");
    }

    #[test]
    fn test_keeps_unicode() {
        assert_eq!(js_string_escape("🎯 ✅"), "\"🎯 ✅\"");
    }

    #[test]
    fn test_embedded_quotes_cannot_end_the_literal() {
        let escaped = js_string_escape("\"); alert(1); (\"");
        let inner = &escaped[1..escaped.len() - 1];
        let bytes = inner.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                assert_eq!(bytes[i - 1], b'\\', "unescaped quote in {escaped}");
            }
        }
    }
}
