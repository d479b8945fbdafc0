//! Kotlin property builder.

use wayfinder_codegen::{CodeFragment, Renderable};

/// A read-only Kotlin property with an initializer.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    initializer: String,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        initializer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            initializer: initializer.into(),
        }
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "val {}: {} = {}",
            self.name, self.ty, self.initializer
        ))]
    }
}
