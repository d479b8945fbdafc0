//! Validation context and identifier rules for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result, SourceContext};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// manifest hierarchy (e.g. `["com.app.Sample", "name"]`), so nested
/// validation produces located errors.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "wayfinder.toml");
/// ctx.validate_name("Sample", "declaration")?;
///
/// let nested = ctx.push("com.app.Sample");
/// nested.validate_name("userId", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a slash-separated string.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property in 'com.app.Sample'" or just "declaration" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable Kotlin identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_kotlin_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Create a duplicate name error located at the last occurrence.
    pub fn duplicate_error(&self, name: &str, kind: &str) -> Box<Error> {
        let span = rfind_name_span(self.source.src(), name);
        self.source
            .duplicate_error(name, self.context_for(kind), span)
    }
}

/// Kotlin hard keywords, which cannot be used as identifiers without backticks.
/// Source: https://kotlinlang.org/docs/keyword-reference.html#hard-keywords
pub const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Check if a name is a Kotlin hard keyword
pub fn is_kotlin_keyword(name: &str) -> bool {
    KOTLIN_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
/// Prefers `name = "<name>"` assignments, then any quoted occurrence.
fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    name_patterns(name).iter().find_map(|(pattern, offset)| {
        src.find(pattern.as_str())
            .map(|pos| SourceSpan::from((pos + offset, name.len())))
    })
}

fn rfind_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    name_patterns(name).iter().find_map(|(pattern, offset)| {
        src.rfind(pattern.as_str())
            .map(|pos| SourceSpan::from((pos + offset, name.len())))
    })
}

fn name_patterns(name: &str) -> [(String, usize); 3] {
    [
        (format!("name = \"{}\"", name), "name = \"".len()),
        (format!("name=\"{}\"", name), "name=\"".len()),
        (format!("\"{}\"", name), 1),
    ]
}

/// Validate that a name is a valid Kotlin identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.chars().all(|c| c == '_') {
        return Some("name cannot consist only of underscores");
    }

    None
}
