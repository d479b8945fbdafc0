//! Explain operation - pipeline and descriptor explanation.

use std::path::Path;

use eyre::{Context, Result};
use wayfinder_codegen::{Emitter, Pipeline, RouteTemplate};
use wayfinder_codegen_kotlin::KotlinEmitter;
use wayfinder_manifest::Manifest;

use super::deferred_names;
use crate::reports::{ExplainReport, FieldInfo, LintInfo, PhaseInfo, RouteInfo};

/// Execute the explain operation.
///
/// Runs the pipeline and describes every descriptor it built.
pub fn explain(manifest: &Manifest, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new(KotlinEmitter::from_config(&manifest.generator));

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = pipeline
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let ctx = pipeline.run(manifest).wrap_err("Pipeline failed")?;

    let routes = ctx
        .descriptors
        .iter()
        .zip(&ctx.units)
        .map(|(descriptor, unit)| {
            let template = RouteTemplate::from_descriptor(descriptor);
            RouteInfo {
                declaration: descriptor.source.to_string(),
                unit: unit.relative_path(),
                route_name: descriptor.route_name.clone(),
                fields: descriptor
                    .fields
                    .iter()
                    .map(|f| FieldInfo {
                        name: f.name.clone(),
                        declared_type: f.declared_type.clone(),
                        kind: f.kind.to_string(),
                        encode: f.encode,
                    })
                    .collect(),
                route_key: template.key(),
                route_path: template.path(),
            }
        })
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        language: pipeline.emitter().language().to_string(),
        route_annotation: manifest.generator.route_annotation.clone(),
        encode_annotation: manifest.generator.encode_annotation.clone(),
        phases,
        lints,
        routes,
        deferred: deferred_names(&ctx),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_explain_sample() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Sample"
            package = "com.guru.routeksp"
            annotations = [{ name = "Destination", args = ["android_sample"] }]
            properties = [
                { name = "name", type = "String", annotations = ["EncodeUrl"] },
                { name = "age", type = "Int" },
            ]
            "#,
        )
        .unwrap();

        let report = explain(&manifest, Path::new("wayfinder.toml")).unwrap();

        assert_eq!(report.language, "kotlin");
        assert_eq!(report.phases.len(), 5);
        assert_eq!(report.routes.len(), 1);

        let route = &report.routes[0];
        assert_eq!(route.declaration, "com.guru.routeksp.Sample");
        assert_eq!(route.route_key, "android_sample/{name}/{age}");
        assert_eq!(route.route_path, "android_sample/${name.encodeUrl()}/${age}");
        assert!(route.fields[0].encode);
        assert_eq!(route.fields[1].kind, "int");
    }
}
