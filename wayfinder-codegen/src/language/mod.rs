//! Language-specific abstractions.
//!
//! - [`Emitter`] - Renders a descriptor into one source unit
//! - [`TypeMapper`] - Maps type kinds to language type names and container reads

mod traits;

pub use traits::{Emitter, TypeMapper};
