//! Kotlin AST builders for generating objects, functions, and properties.
//!
//! These provide a high-level API for constructing Kotlin syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod literal;
mod object;
mod property;

pub use fns::{Fun, Param};
pub use literal::{escape_string, string_literal};
pub use object::Object;
pub use property::Property;
