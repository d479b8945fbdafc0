//! Line buffer that tracks nesting depth.

use super::{CodeFragment, Indent, Renderable};

/// Writes code fragments into a string, indenting block bodies.
///
/// # Example
///
/// ```
/// use wayfinder_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::kotlin();
/// builder.emit(&CodeFragment::Block {
///     header: "object Home {".to_string(),
///     body: vec![CodeFragment::Line("val ID: String = \"id\"".to_string())],
///     close: Some("}".to_string()),
/// });
///
/// assert_eq!(builder.build(), "object Home {\n    val ID: String = \"id\"\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder using Kotlin's four-space indentation.
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Append one line at the current depth.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write_to(&mut self.buffer, self.depth);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append every fragment of a node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.depth -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::kotlin()
    }
}
