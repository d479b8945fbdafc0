//! Kotlin string literals.

/// Escape text for use inside a Kotlin string literal.
///
/// `$` is escaped so literal text is never read as a string template.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Quoted Kotlin string literal.
pub fn string_literal(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
