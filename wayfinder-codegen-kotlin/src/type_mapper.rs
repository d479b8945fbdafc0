//! Kotlin type mapper implementation.

use wayfinder_codegen::TypeMapper;
use wayfinder_ir::TypeKind;

/// Kotlin type mapper: Kotlin type names and `Bundle`-style typed reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn type_name(&self, kind: TypeKind) -> Option<&'static str> {
        match kind {
            TypeKind::String => Some("String"),
            TypeKind::Bool => Some("Boolean"),
            TypeKind::Int => Some("Int"),
            TypeKind::Float => Some("Float"),
            TypeKind::Double => Some("Double"),
            TypeKind::Long => Some("Long"),
            TypeKind::Unsupported => None,
        }
    }

    fn nullable(&self, ty: &str) -> String {
        if ty.ends_with('?') {
            ty.to_string()
        } else {
            format!("{}?", ty)
        }
    }

    fn read_call(&self, kind: TypeKind) -> Option<&'static str> {
        match kind {
            TypeKind::String => Some("getString"),
            TypeKind::Bool => Some("getBoolean"),
            TypeKind::Int => Some("getInt"),
            TypeKind::Float => Some("getFloat"),
            TypeKind::Double => Some("getDouble"),
            TypeKind::Long => Some("getLong"),
            TypeKind::Unsupported => None,
        }
    }
}
