//! Core utilities and types for the wayfinder route generator.
//!
//! This crate provides fundamental types and utilities used across
//! the wayfinder crates.

mod encode;
mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult, write_file};
// Runtime semantics shared with generated code
pub use encode::encode_url;
// String utilities
pub use utils::{package_to_path, short_name, to_constant_name};
