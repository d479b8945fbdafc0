//! Classify phase - computes the retry set.

use eyre::Result;

use crate::{
    descriptor::declaration_id,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that collects the discovered declarations still not processable.
///
/// A declaration is retried if the host still reports it invalid or if the
/// descriptor builder refused it. An empty retry set means processing is
/// complete.
pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn description(&self) -> &'static str {
        "Compute the declarations to retry in a later round"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let host = ctx.host();
        let retry: Vec<_> = ctx
            .discovered
            .iter()
            .filter_map(|decl| {
                let id = declaration_id(decl);
                (!host.is_valid(decl) || ctx.rejected.contains(&id)).then_some(id)
            })
            .collect();

        if !retry.is_empty() {
            ctx.add_diagnostic(Diagnostic::info(
                self.name(),
                format!("{} declaration(s) deferred to a later round", retry.len()),
            ));
        }
        ctx.retry = retry;
        Ok(())
    }
}
