//! Intermediate representation types for the wayfinder route generator.
//!
//! These types are the normalized form of a routed declaration, produced by
//! the descriptor builder and consumed by the emitters.
//!
//! # Architecture
//!
//! ```text
//! host declarations → wayfinder-manifest → wayfinder-ir (descriptors) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Kotlin-specific concerns)
//! - Immutable once built, one descriptor per declaration
//! - Self-contained (no external dependencies beyond serde)

mod route;
mod types;

pub use route::{DeclarationId, FieldSpec, RouteDescriptor};
pub use types::TypeKind;
