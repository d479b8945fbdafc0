//! Discover phase - asks the host for route-marked declarations.

use eyre::Result;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that collects the declarations carrying the route marker.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "Collect route-marked declarations from the host"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let host = ctx.host();
        ctx.source_files = host.source_files();
        ctx.discovered = host.annotated(&ctx.config.route_annotation);

        ctx.add_diagnostic(Diagnostic::info(
            self.name(),
            format!(
                "found {} declaration(s) marked @{}",
                ctx.discovered.len(),
                ctx.config.route_annotation
            ),
        ));
        Ok(())
    }
}
