//! KotlinFile abstraction for structured Kotlin file generation.
//!
//! Provides a high-level API for generating Kotlin files with a package
//! declaration, sorted imports, and body content.

use std::collections::BTreeSet;

use wayfinder_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// Header placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by wayfinder. DO NOT EDIT.";

/// A structured representation of a Kotlin file.
///
/// # Example
///
/// ```
/// use wayfinder_codegen_kotlin::{KotlinFile, ast::Object};
///
/// let code = KotlinFile::new("com.app")
///     .import("java.net.URLEncoder")
///     .add(Object::new("HomeDestination"))
///     .render();
///
/// assert!(code.starts_with("package com.app\n\nimport java.net.URLEncoder\n"));
/// ```
#[derive(Debug, Default)]
pub struct KotlinFile {
    package: String,
    imports: BTreeSet<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl KotlinFile {
    /// Create a file in a package (empty for the default package).
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Import a fully qualified name. Duplicates collapse; output is sorted.
    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        self.imports.insert(qualified.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Kotlin indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::KOTLIN)
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        format!("{}\n\n{}", header, self.render())
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if !self.package.is_empty() {
            builder.push_line(&format!("package {}", self.package));
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.push_line(&format!("import {}", import));
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }
}
