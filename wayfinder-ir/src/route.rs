//! Route descriptor IR.
//!
//! ```text
//! @Destination("android_sample") data class Sample(name: String, ...)
//!     → RouteDescriptor { route_name: "android_sample", fields: [name, ...] }
//! ```

use serde::Serialize;

use crate::TypeKind;

/// Identity of the host declaration a descriptor was built from.
///
/// Used for dependency tracking and retry bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DeclarationId {
    /// Package the declaration lives in (may be empty).
    pub package: String,
    /// Simple name of the declaration.
    pub name: String,
}

impl DeclarationId {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// One stored field of a routed declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name, a valid identifier unique within the declaration.
    pub name: String,
    /// Declared type as written by the host (e.g. "String", "kotlin.Long?").
    pub declared_type: String,
    /// Classification of the declared type.
    pub kind: TypeKind,
    /// Whether the field carries the encode marker.
    pub encode: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            kind,
            encode: false,
        }
    }

    /// Mark the field for URL encoding.
    pub fn encoded(mut self) -> Self {
        self.encode = true;
        self
    }
}

/// Normalized representation of one routed declaration.
///
/// Equality compares the route name and fields; the source back-reference is
/// ignored.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    /// Route (screen) name, verbatim from the route annotation. Never empty.
    pub route_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Originating declaration.
    pub source: DeclarationId,
}

impl RouteDescriptor {
    /// Name of the generated container (e.g. "SampleDestination").
    pub fn unit_name(&self) -> String {
        format!("{}Destination", self.source.name)
    }

    /// Package of the generated container (same as the source declaration).
    pub fn package(&self) -> &str {
        &self.source.package
    }

    /// Fields that get a container extractor.
    pub fn extractable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.kind.is_supported())
    }
}

impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.route_name == other.route_name && self.fields == other.fields
    }
}

impl Eq for RouteDescriptor {}
