//! Language-agnostic route generation for wayfinder.
//!
//! This crate turns host declarations into [`RouteDescriptor`]s, assembles
//! their route templates, and drives emission through a language
//! [`Emitter`](language::Emitter).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`descriptor`] - Declaration → descriptor normalization
//! - [`templates`] - Route key / route path assembly
//! - [`type_mapper`] - Declared type → [`TypeKind`](wayfinder_ir::TypeKind)
//! - [`host`] - Seams to the host compiler and its output writer
//! - [`language`] - Language-specific emitter and type mapping traits
//! - [`pipeline`] - Phase orchestration, diagnostics and retry classification
//!
//! [`RouteDescriptor`]: wayfinder_ir::RouteDescriptor

pub mod builder;
pub mod descriptor;
pub mod host;
pub mod language;
pub mod pipeline;
pub mod templates;
pub mod type_mapper;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use descriptor::{BuildError, build_descriptor, declaration_id};
pub use host::{Dependencies, FsWriter, GeneratedUnit, Host, MemoryWriter, UnitWriter};
pub use language::{Emitter, TypeMapper};
pub use pipeline::{Diagnostic, Pipeline, ProcessOutcome, Severity};
pub use templates::{RouteTemplate, route_key, route_path};
pub use type_mapper::{map_type, non_null_type};
