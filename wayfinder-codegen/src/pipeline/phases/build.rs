//! Build phase - turns declarations into descriptors.

use eyre::Result;

use crate::{
    descriptor::{build_descriptor, declaration_id},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that builds a [`RouteDescriptor`](wayfinder_ir::RouteDescriptor)
/// for every valid discovered declaration.
///
/// Declarations failing the host check are set aside for a later round.
/// Declarations the builder refuses (e.g. a blank route name) are recorded
/// as errors and also set aside. Neither aborts the pass.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build route descriptors from valid declarations"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let host = ctx.host();
        let declarations = ctx.discovered.clone();

        for decl in declarations {
            let id = declaration_id(decl);

            if !host.is_valid(decl) {
                ctx.add_diagnostic(
                    Diagnostic::info(self.name(), format!("'{}' is not resolved yet, deferring", id))
                        .at(id.to_string()),
                );
                ctx.invalid.push(id);
                continue;
            }

            match build_descriptor(decl, &ctx.config) {
                Ok(descriptor) => ctx.descriptors.push(descriptor),
                Err(err) => {
                    ctx.add_diagnostic(
                        Diagnostic::error(self.name(), err.to_string()).at(id.to_string()),
                    );
                    ctx.rejected.push(id);
                }
            }
        }

        Ok(())
    }
}
