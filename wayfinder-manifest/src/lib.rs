//! Declaration manifest for the wayfinder route generator.
//!
//! A `wayfinder.toml` describes the declarations a host compiler resolved:
//! their packages, stored properties with resolved types, and the marker
//! annotations attached to both. It also carries the `[generator]` settings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Annotation, Declaration, GeneratorConfig, Manifest, ManifestFile, Property, parse_manifest,
};
pub use validate::{KOTLIN_KEYWORDS, ParseContext, is_kotlin_keyword, validate_identifier};
