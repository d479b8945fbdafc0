//! Route operation - concrete navigable path for one declaration.

use eyre::{Result, bail, eyre};
use wayfinder_codegen::{Host, RouteTemplate, build_descriptor};
use wayfinder_ir::{FieldSpec, TypeKind};
use wayfinder_manifest::Manifest;

use crate::reports::RouteReport;

/// Execute the route operation.
///
/// Expands the route path of `declaration` with the given `field=value`
/// pairs. Encode-marked fields are form-URL encoded.
pub fn route(
    manifest: &Manifest,
    declaration: &str,
    values: &[(String, String)],
) -> Result<RouteReport> {
    let decl = manifest
        .find(declaration)
        .ok_or_else(|| eyre!("no declaration named '{}'", declaration))?;
    if !manifest.is_valid(decl) {
        bail!("'{}' is not resolved yet", decl.qualified_name());
    }

    let descriptor = build_descriptor(decl, &manifest.generator)?;

    for (name, value) in values {
        let field = descriptor
            .fields
            .iter()
            .find(|f| &f.name == name)
            .ok_or_else(|| eyre!("'{}' has no field '{}'", decl.qualified_name(), name))?;
        check_value(field, value)?;
    }

    let path = RouteTemplate::from_descriptor(&descriptor).expand(|field| {
        values
            .iter()
            .rev()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    })?;

    Ok(RouteReport { path })
}

/// Reject values the field's type could not hold.
fn check_value(field: &FieldSpec, value: &str) -> Result<()> {
    let ok = match field.kind {
        TypeKind::Bool => matches!(value, "true" | "false"),
        TypeKind::Int => value.parse::<i32>().is_ok(),
        TypeKind::Long => value.parse::<i64>().is_ok(),
        TypeKind::Float => value.parse::<f32>().is_ok(),
        TypeKind::Double => value.parse::<f64>().is_ok(),
        TypeKind::String | TypeKind::Unsupported => true,
    };
    if !ok {
        bail!(
            "'{}' is not a valid value for '{}: {}'",
            value,
            field.name,
            field.declared_type
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [[declaration]]
            name = "Sample"
            package = "com.guru.routeksp"
            annotations = [{ name = "Destination", args = ["android_sample"] }]
            properties = [
                { name = "name", type = "String", annotations = ["EncodeUrl"] },
                { name = "age", type = "Int" },
            ]

            [[declaration]]
            name = "Pending"
            annotations = ["Destination"]
            "#,
        )
        .unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_route_encodes_marked_fields() {
        let report = route(
            &manifest(),
            "Sample",
            &pairs(&[("name", "Jane Doe/1"), ("age", "30")]),
        )
        .unwrap();
        assert_eq!(report.path, "android_sample/Jane+Doe%2F1/30");
    }

    #[test]
    fn test_route_by_qualified_name() {
        let report = route(
            &manifest(),
            "com.guru.routeksp.Sample",
            &pairs(&[("age", "1"), ("name", "")]),
        )
        .unwrap();
        assert_eq!(report.path, "android_sample//1");
    }

    #[test]
    fn test_route_errors() {
        let m = manifest();
        assert!(route(&m, "Missing", &[]).is_err());
        assert!(route(&m, "Pending", &[]).is_err());
        assert!(route(&m, "Sample", &pairs(&[("name", "a")])).is_err());
        assert!(route(&m, "Sample", &pairs(&[("name", "a"), ("age", "x")])).is_err());
        assert!(
            route(
                &m,
                "Sample",
                &pairs(&[("name", "a"), ("age", "1"), ("city", "b")])
            )
            .is_err()
        );
    }
}
