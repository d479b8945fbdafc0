//! Declared type classification.

use wayfinder_ir::TypeKind;

/// Classify a host-declared type.
///
/// The simple name of the type (package qualifier, generic arguments and the
/// nullable marker removed) is matched exactly and case-sensitively against
/// the six primitive names. Anything else is [`TypeKind::Unsupported`].
///
/// ```
/// use wayfinder_codegen::map_type;
/// use wayfinder_ir::TypeKind;
///
/// assert_eq!(map_type("kotlin.Boolean"), TypeKind::Bool);
/// assert_eq!(map_type("string"), TypeKind::Unsupported);
/// ```
pub fn map_type(declared: &str) -> TypeKind {
    match simple_type_name(declared) {
        "String" => TypeKind::String,
        "Boolean" => TypeKind::Bool,
        "Int" => TypeKind::Int,
        "Float" => TypeKind::Float,
        "Double" => TypeKind::Double,
        "Long" => TypeKind::Long,
        _ => TypeKind::Unsupported,
    }
}

/// Simple name of a declared type (e.g. "kotlin.collections.List<kotlin.String>?" -> "List").
pub fn simple_type_name(declared: &str) -> &str {
    let declared = non_null_type(declared);
    let base = declared.split('<').next().unwrap_or(declared);
    base.rsplit('.').next().unwrap_or(base)
}

/// Declared type with the nullable marker removed, qualifier and generic
/// arguments kept (e.g. "kotlin.String?" -> "kotlin.String").
pub fn non_null_type(declared: &str) -> &str {
    declared.strip_suffix('?').unwrap_or(declared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names() {
        assert_eq!(map_type("String"), TypeKind::String);
        assert_eq!(map_type("Boolean"), TypeKind::Bool);
        assert_eq!(map_type("Int"), TypeKind::Int);
        assert_eq!(map_type("Float"), TypeKind::Float);
        assert_eq!(map_type("Double"), TypeKind::Double);
        assert_eq!(map_type("Long"), TypeKind::Long);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(map_type("string"), TypeKind::Unsupported);
        assert_eq!(map_type("INT"), TypeKind::Unsupported);
        assert_eq!(map_type("Bool"), TypeKind::Unsupported);
    }

    #[test]
    fn test_qualified_and_nullable() {
        assert_eq!(map_type("kotlin.String"), TypeKind::String);
        assert_eq!(map_type("kotlin.Long?"), TypeKind::Long);
    }

    #[test]
    fn test_whitespace_is_not_stripped() {
        assert_eq!(map_type(" Int "), TypeKind::Unsupported);
        assert_eq!(map_type("Int "), TypeKind::Unsupported);
    }

    #[test]
    fn test_unsupported_types() {
        assert_eq!(map_type("List<String>"), TypeKind::Unsupported);
        assert_eq!(map_type("com.app.UserId"), TypeKind::Unsupported);
        assert_eq!(map_type("Char"), TypeKind::Unsupported);
        assert_eq!(map_type(""), TypeKind::Unsupported);
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(
            simple_type_name("kotlin.collections.List<kotlin.String>?"),
            "List"
        );
        assert_eq!(simple_type_name("Map<String, Int>"), "Map");
        assert_eq!(simple_type_name("Double"), "Double");
    }

    #[test]
    fn test_non_null_type() {
        assert_eq!(non_null_type("kotlin.String?"), "kotlin.String");
        assert_eq!(non_null_type("List<Int?>?"), "List<Int?>");
        assert_eq!(non_null_type("Long"), "Long");
    }
}
