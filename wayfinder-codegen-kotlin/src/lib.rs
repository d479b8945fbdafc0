//! Kotlin emitter for wayfinder.
//!
//! Renders each [`RouteDescriptor`](wayfinder_ir::RouteDescriptor) into a
//! `<Name>Destination` object exposing the route key, a route builder, one
//! typed extractor per supported field, and a private URL-encoding helper.

pub mod ast;
mod emitter;
mod kotlin_file;
mod type_mapper;

pub use emitter::KotlinEmitter;
pub use kotlin_file::{GENERATED_HEADER, KotlinFile};
pub use type_mapper::KotlinTypeMapper;
pub use wayfinder_codegen::{Emitter, TypeMapper};
