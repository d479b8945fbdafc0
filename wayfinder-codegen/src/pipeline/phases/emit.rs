//! Emit phase - renders one unit per descriptor.

use eyre::Result;

use crate::{
    host::Dependencies,
    language::Emitter,
    pipeline::{CompilationContext, Phase},
};

/// Phase that renders every descriptor with a language [`Emitter`].
///
/// Each unit depends on every visible source file.
pub struct EmitPhase<'e> {
    emitter: &'e dyn Emitter,
}

impl<'e> EmitPhase<'e> {
    pub fn new(emitter: &'e dyn Emitter) -> Self {
        Self { emitter }
    }
}

impl Phase for EmitPhase<'_> {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Render one source unit per descriptor"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let units = ctx
            .descriptors
            .iter()
            .map(|descriptor| {
                let mut unit = self.emitter.emit(descriptor);
                unit.dependencies = Dependencies::all(ctx.source_files.iter().cloned());
                unit
            })
            .collect();
        ctx.units = units;
        Ok(())
    }
}
