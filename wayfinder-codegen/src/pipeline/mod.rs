//! Route generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that drives one
//! processing pass over a [`Host`](crate::host::Host):
//!
//! - Explicit phase boundaries (discover → build → validate → emit → classify)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - The retry set handed back to the host
//!
//! # Example
//!
//! ```ignore
//! use wayfinder_codegen::{MemoryWriter, pipeline::Pipeline};
//!
//! let pipeline = Pipeline::new(KotlinEmitter::from_config(&manifest.generator));
//! let mut writer = MemoryWriter::new();
//! let outcome = pipeline.process(&manifest, &mut writer)?;
//!
//! for id in &outcome.retry {
//!     eprintln!("deferred: {}", id);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::{Pipeline, ProcessOutcome, WrittenUnit};
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
