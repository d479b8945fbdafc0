//! Kotlin function builder.

use wayfinder_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter of a Kotlin function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Kotlin functions with a block body.
#[derive(Debug, Clone)]
pub struct Fun {
    name: String,
    receiver: Option<String>,
    is_private: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            is_private: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Make this an extension function on `ty`.
    pub fn receiver(mut self, ty: impl Into<String>) -> Self {
        self.receiver = Some(ty.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a statement line to the body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add an `if (condition) { ... }` block to the body.
    pub fn if_block(mut self, condition: &str, lines: impl IntoIterator<Item = String>) -> Self {
        self.body.push(CodeFragment::Block {
            header: format!("if ({}) {{", condition),
            body: lines.into_iter().map(CodeFragment::Line).collect(),
            close: Some("}".to_string()),
        });
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_private { "private " } else { "" };
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("{}.", r))
            .unwrap_or_default();
        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}fun {}{}({}): {} {{",
                vis, receiver, self.name, params, ret
            ),
            None => format!("{}fun {}{}({}) {{", vis, receiver, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fun {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        }]
    }
}
