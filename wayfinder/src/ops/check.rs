//! Check operation - a pipeline pass without writing.

use std::path::Path;

use eyre::{Context, Result};
use wayfinder_codegen::{Pipeline, Severity};
use wayfinder_codegen_kotlin::KotlinEmitter;
use wayfinder_manifest::Manifest;

use super::deferred_names;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and returns its diagnostics and retry set.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new(KotlinEmitter::from_config(&manifest.generator));
    let ctx = pipeline.run(manifest).wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        declaration_count: ctx.discovered.len(),
        unit_count: ctx.units.len(),
        deferred: deferred_names(&ctx),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_reports_deferred_and_lints() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            annotations = [{ name = "Destination", args = ["home"] }]
            properties = [{ name = "tags", type = "List<String>" }]

            [[declaration]]
            name = "Other"
            annotations = [{ name = "Destination", args = ["home"] }]

            [[declaration]]
            name = "Pending"
            annotations = ["Destination"]
            "#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("wayfinder.toml")).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.deferred, vec!["Pending"]);
        assert_eq!(report.declaration_count, 3);
        assert_eq!(report.unit_count, 2);
        assert!(!report.warnings.is_empty());
        assert!(!report.infos.is_empty());
    }
}
