//! Kotlin object declaration builder.

use wayfinder_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{Fun, Property};

/// Builder for a Kotlin `object` declaration.
///
/// Properties render first as one group, then each function separated by a
/// blank line.
#[derive(Debug, Clone)]
pub struct Object {
    name: String,
    properties: Vec<Property>,
    functions: Vec<Fun>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn function(mut self, function: Fun) -> Self {
        self.functions.push(function);
        self
    }

    pub fn functions(mut self, functions: impl IntoIterator<Item = Fun>) -> Self {
        self.functions.extend(functions);
        self
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Object {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = self.properties.to_fragments();
        for function in &self.functions {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(function.to_fragments());
        }

        vec![CodeFragment::Block {
            header: format!("object {} {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}
