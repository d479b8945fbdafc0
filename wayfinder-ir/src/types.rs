//! Field type classification.

use serde::Serialize;

/// Kind of a field's declared type, which selects the typed read performed
/// on the runtime container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    String,
    Bool,
    Int,
    Float,
    Double,
    Long,
    /// Any type outside the supported primitives.
    Unsupported,
}

impl TypeKind {
    /// All kinds that have a typed container read.
    pub const SUPPORTED: [TypeKind; 6] = [
        TypeKind::String,
        TypeKind::Bool,
        TypeKind::Int,
        TypeKind::Float,
        TypeKind::Double,
        TypeKind::Long,
    ];

    /// Returns true if fields of this kind get an extractor.
    pub fn is_supported(&self) -> bool {
        !matches!(self, TypeKind::Unsupported)
    }

    /// Lowercase label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Bool => "bool",
            TypeKind::Int => "int",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Long => "long",
            TypeKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
