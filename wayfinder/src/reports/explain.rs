//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data explaining the pipeline and what it derives from a manifest.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Target language of the emitter.
    pub language: String,
    /// Route marker annotation.
    pub route_annotation: String,
    /// Encode marker annotation.
    pub encode_annotation: String,
    /// Pipeline phases in execution order.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// One entry per built descriptor.
    pub routes: Vec<RouteInfo>,
    /// Declarations deferred to a later round.
    pub deferred: Vec<String>,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// A route descriptor and its templates.
#[derive(Debug)]
pub struct RouteInfo {
    /// Qualified declaration name.
    pub declaration: String,
    /// Generated unit path relative to the output directory.
    pub unit: PathBuf,
    pub route_name: String,
    pub fields: Vec<FieldInfo>,
    pub route_key: String,
    pub route_path: String,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub name: String,
    pub declared_type: String,
    pub kind: String,
    pub encode: bool,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Wayfinder Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Language", &self.language);
        out.key_value_indented("Route marker", &self.route_annotation);
        out.key_value_indented("Encode marker", &self.encode_annotation);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section(&format!("Routes ({})", self.routes.len()));
        for route in &self.routes {
            self.render_route(out, route);
        }

        if !self.deferred.is_empty() {
            out.section("Deferred to next round");
            for name in &self.deferred {
                out.list_item(name);
            }
        }
    }
}

impl ExplainReport {
    fn render_route(&self, out: &mut dyn Output, route: &RouteInfo) {
        out.divider(&route.declaration);
        out.key_value_indented("unit", &route.unit.display().to_string());
        out.key_value_indented("route name", &route.route_name);
        out.key_value_indented("routeKey", &route.route_key);
        out.key_value_indented("routePath", &route.route_path);

        if !route.fields.is_empty() {
            out.section("  fields");
            for field in &route.fields {
                let encode = if field.encode { ", encoded" } else { "" };
                out.list_item(&format!(
                    "{}: {} ({}{})",
                    field.name, field.declared_type, field.kind, encode
                ));
            }
        }
        out.newline();
    }
}
