//! Compilation context passed through pipeline phases.

use std::path::PathBuf;

use wayfinder_ir::{DeclarationId, RouteDescriptor};
use wayfinder_manifest::{Declaration, GeneratorConfig};

use super::diagnostic::{Diagnostic, Severity};
use crate::host::{GeneratedUnit, Host};

/// State of one processing pass.
///
/// Created fresh for every pass and dropped afterwards; nothing here is
/// carried into the next round.
pub struct CompilationContext<'h> {
    host: &'h dyn Host,
    /// Generator settings taken from the host.
    pub config: GeneratorConfig,
    /// Source files visible in this pass (populated by DiscoverPhase).
    pub source_files: Vec<PathBuf>,
    /// Declarations carrying the route marker (populated by DiscoverPhase).
    pub discovered: Vec<&'h Declaration>,
    /// Declarations that failed the host validity check.
    pub invalid: Vec<DeclarationId>,
    /// Declarations the descriptor builder refused.
    pub rejected: Vec<DeclarationId>,
    /// Descriptors of every processable declaration (populated by BuildPhase).
    pub descriptors: Vec<RouteDescriptor>,
    /// Rendered units (populated by EmitPhase).
    pub units: Vec<GeneratedUnit>,
    /// Declarations to hand back for a later round (populated by ClassifyPhase).
    pub retry: Vec<DeclarationId>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'h> CompilationContext<'h> {
    pub fn new(host: &'h dyn Host) -> Self {
        Self {
            host,
            config: host.config().clone(),
            source_files: Vec::new(),
            discovered: Vec::new(),
            invalid: Vec::new(),
            rejected: Vec::new(),
            descriptors: Vec::new(),
            units: Vec::new(),
            retry: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The host driving this pass.
    pub fn host(&self) -> &'h dyn Host {
        self.host
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

impl std::fmt::Debug for CompilationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilationContext")
            .field("config", &self.config)
            .field("discovered", &self.discovered.len())
            .field("invalid", &self.invalid)
            .field("rejected", &self.rejected)
            .field("descriptors", &self.descriptors)
            .field("units", &self.units.len())
            .field("retry", &self.retry)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use wayfinder_manifest::Manifest;

    use super::*;

    #[test]
    fn test_context_creation() {
        let manifest = Manifest::default();
        let ctx = CompilationContext::new(&manifest);

        assert!(ctx.discovered.is_empty());
        assert!(ctx.descriptors.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.config.route_annotation, "Destination");
    }

    #[test]
    fn test_context_diagnostics() {
        let manifest = Manifest::default();
        let mut ctx = CompilationContext::new(&manifest);

        ctx.add_diagnostic(Diagnostic::error("build", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("validate", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("validate", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }
}
