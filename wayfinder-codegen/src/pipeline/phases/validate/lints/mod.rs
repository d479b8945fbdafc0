//! Built-in lints.

mod constant_collision;
mod duplicate_route;
mod unsupported_field_type;

pub use constant_collision::ConstantCollisionLint;
pub use duplicate_route::DuplicateRouteLint;
pub use unsupported_field_type::UnsupportedFieldTypeLint;
