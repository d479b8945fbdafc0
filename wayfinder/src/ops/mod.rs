//! Core operations.
//!
//! This module contains the business logic for wayfinder commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;
pub mod route;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};
pub use route::route;

use wayfinder_codegen::pipeline::CompilationContext;

/// Qualified names of the declarations deferred in a pass.
fn deferred_names(ctx: &CompilationContext<'_>) -> Vec<String> {
    ctx.retry.iter().map(ToString::to_string).collect()
}
