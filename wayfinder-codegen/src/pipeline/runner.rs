//! Pipeline orchestrator.

use std::path::PathBuf;

use eyre::Result;
use wayfinder_core::WriteResult;
use wayfinder_ir::DeclarationId;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{BuildPhase, ClassifyPhase, DiscoverPhase, EmitPhase, Lint, LintInfo, ValidatePhase},
};
use crate::{
    host::{Host, UnitWriter},
    language::Emitter,
};

/// The route generation pipeline.
///
/// Runs the built-in phases (discover, build, validate, emit, classify)
/// followed by any user phases, calling plugin hooks before and after each.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(KotlinEmitter::default())
///     .plugin(SnapshotPlugin::new())
///     .lint(MyLint);
///
/// let outcome = pipeline.process(&manifest, &mut FsWriter::new(out_dir))?;
/// ```
pub struct Pipeline {
    emitter: Box<dyn Emitter>,
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

/// A unit handed to the writer, and what the writer did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenUnit {
    /// Declaration the unit was generated from.
    pub source: DeclarationId,
    /// Path relative to the writer's output root.
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of one processing pass.
#[derive(Debug)]
pub struct ProcessOutcome<'h> {
    /// Final state of the pass.
    pub context: CompilationContext<'h>,
    /// Units handed to the writer, in emission order.
    pub written: Vec<WrittenUnit>,
    /// Declarations to process again in a later round.
    pub retry: Vec<DeclarationId>,
}

impl ProcessOutcome<'_> {
    /// Whether this pass completed processing for the route marker.
    pub fn is_complete(&self) -> bool {
        self.retry.is_empty()
    }
}

impl Pipeline {
    /// Create a pipeline rendering with the given emitter and the default lints.
    pub fn new(emitter: impl Emitter + 'static) -> Self {
        Self {
            emitter: Box::new(emitter),
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a lint to the validate phase.
    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.validate = self.validate.with_lint(lint);
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The emitter used by the emit phase.
    pub fn emitter(&self) -> &dyn Emitter {
        self.emitter.as_ref()
    }

    /// Names and descriptions of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let emit = EmitPhase::new(self.emitter.as_ref());
        let mut info = vec![
            DiscoverPhase.info(),
            BuildPhase.info(),
            self.validate.info(),
            emit.info(),
            ClassifyPhase.info(),
        ];
        info.extend(self.phases.iter().map(|p| p.info()));
        info
    }

    /// Lints run by the validate phase.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.validate.lint_info()
    }

    /// Run every phase over the host's declarations without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or plugin fails fatally. Problems with
    /// individual declarations are diagnostics, not errors.
    pub fn run<'h>(&self, host: &'h dyn Host) -> Result<CompilationContext<'h>> {
        let mut ctx = CompilationContext::new(host);

        let emit = EmitPhase::new(self.emitter.as_ref());
        // Built-in phases in execution order, then user phases
        let mut phases: Vec<&dyn Phase> = vec![
            &DiscoverPhase,
            &BuildPhase,
            &self.validate,
            &emit,
            &ClassifyPhase,
        ];
        phases.extend(self.phases.iter().map(|p| p.as_ref() as &dyn Phase));

        for phase in phases {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a full pass and hand every rendered unit to the writer.
    pub fn process<'h>(
        &self,
        host: &'h dyn Host,
        writer: &mut dyn UnitWriter,
    ) -> Result<ProcessOutcome<'h>> {
        let ctx = self.run(host)?;

        let written = ctx
            .units
            .iter()
            .map(|unit| {
                Ok(WrittenUnit {
                    source: unit.source.clone(),
                    path: unit.relative_path(),
                    result: writer.write(unit)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ProcessOutcome {
            retry: ctx.retry.clone(),
            context: ctx,
            written,
        })
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}
