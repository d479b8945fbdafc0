//! Lint trait for descriptor validation.

use wayfinder_ir::RouteDescriptor;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks built descriptors for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (e.g., "duplicate-route").
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the descriptors and add any diagnostics.
    fn check(&self, descriptors: &[RouteDescriptor], diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
