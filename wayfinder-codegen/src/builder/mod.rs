//! Code emission building blocks.
//!
//! Language ASTs lower themselves to [`CodeFragment`]s through
//! [`Renderable`]; [`CodeBuilder`] writes the fragments out at the right
//! [`Indent`] depth.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
