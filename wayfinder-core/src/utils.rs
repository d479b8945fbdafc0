//! Shared string utilities for code generation.

/// Name of the string constant generated for a field (e.g. "isAndroid" -> "ISANDROID").
pub fn to_constant_name(field: &str) -> String {
    field.to_uppercase()
}

/// Strip the package qualifier from a name (e.g. "com.example.Destination" -> "Destination").
pub fn short_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Convert a dotted package into a relative directory path (e.g. "com.example" -> "com/example").
pub fn package_to_path(package: &str) -> String {
    package
        .split('.')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
