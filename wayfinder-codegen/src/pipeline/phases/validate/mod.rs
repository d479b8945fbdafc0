//! Validate phase - runs lints on the built descriptors.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{ConstantCollisionLint, DuplicateRouteLint, UnsupportedFieldTypeLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks descriptors using configurable lints.
///
/// Lints only report. A failing lint never removes a descriptor from
/// emission, and this phase never aborts the pass.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnsupportedFieldTypeLint),
                Box::new(ConstantCollisionLint),
                Box::new(DuplicateRouteLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint route descriptors and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.descriptors, &mut ctx.diagnostics);
        }
        Ok(())
    }
}
