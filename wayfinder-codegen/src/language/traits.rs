//! Language-agnostic emission traits.

use wayfinder_ir::{RouteDescriptor, TypeKind};

use crate::host::{Dependencies, GeneratedUnit};

/// Trait for language-specific code emitters.
///
/// Implement this trait to render route units for a new target language.
/// Rendering must be deterministic: the same descriptor always yields
/// byte-identical text.
pub trait Emitter: Send + Sync {
    /// Language identifier (e.g., "kotlin")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "kt")
    fn file_extension(&self) -> &'static str;

    /// Render the full source text of the unit for one descriptor.
    fn render(&self, descriptor: &RouteDescriptor) -> String;

    /// Render a descriptor into a unit. The dependency set is left empty for
    /// the caller to fill in.
    fn emit(&self, descriptor: &RouteDescriptor) -> GeneratedUnit {
        GeneratedUnit {
            source: descriptor.source.clone(),
            package: descriptor.package().to_string(),
            name: descriptor.unit_name(),
            extension: self.file_extension(),
            content: self.render(descriptor),
            dependencies: Dependencies::default(),
        }
    }
}

/// Trait for mapping type kinds to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Type name of a supported kind, `None` for [`TypeKind::Unsupported`].
    fn type_name(&self, kind: TypeKind) -> Option<&'static str>;

    /// Nullable form of a type (e.g., `String?` in Kotlin)
    fn nullable(&self, ty: &str) -> String;

    /// Name of the typed container read for a kind, `None` if there is none.
    fn read_call(&self, kind: TypeKind) -> Option<&'static str>;
}
