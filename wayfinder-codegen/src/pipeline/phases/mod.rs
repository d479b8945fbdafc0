//! Built-in pipeline phases.
//!
//! - [`DiscoverPhase`] - asks the host for route-marked declarations
//! - [`BuildPhase`] - builds descriptors, setting aside invalid declarations
//! - [`ValidatePhase`] - runs lints over the descriptors
//! - [`EmitPhase`] - renders one unit per descriptor
//! - [`ClassifyPhase`] - computes the retry set

mod build;
mod classify;
mod discover;
mod emit;
mod validate;

pub use build::BuildPhase;
pub use classify::ClassifyPhase;
pub use discover::DiscoverPhase;
pub use emit::EmitPhase;
pub use validate::{
    ConstantCollisionLint, DuplicateRouteLint, Lint, LintInfo, UnsupportedFieldTypeLint,
    ValidatePhase,
};
