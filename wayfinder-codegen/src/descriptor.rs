//! Declaration → [`RouteDescriptor`] normalization.

use thiserror::Error;
use wayfinder_ir::{DeclarationId, FieldSpec, RouteDescriptor};
use wayfinder_manifest::{Declaration, GeneratorConfig};

use crate::type_mapper::map_type;

/// Why a declaration could not be turned into a descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("'{0}' has no route annotation")]
    NotRouted(DeclarationId),

    #[error("route annotation on '{0}' has no resolved argument")]
    UnresolvedRouteName(DeclarationId),

    #[error("route name of '{0}' is empty")]
    EmptyRouteName(DeclarationId),

    #[error("property '{field}' of '{id}' has no resolved type")]
    UnresolvedType { id: DeclarationId, field: String },
}

/// Identity of a host declaration.
pub fn declaration_id(decl: &Declaration) -> DeclarationId {
    DeclarationId::new(&decl.package, &decl.name)
}

/// Build the descriptor of one routed declaration.
///
/// The route name is the first argument of the route annotation, taken
/// verbatim. Fields are the declaration's own stored properties in
/// declaration order; a field is encode-marked iff it carries the encode
/// annotation. A declaration without qualifying fields yields an empty field
/// list.
pub fn build_descriptor(
    decl: &Declaration,
    config: &GeneratorConfig,
) -> Result<RouteDescriptor, BuildError> {
    let id = declaration_id(decl);

    let annotation = decl
        .annotation(&config.route_annotation)
        .ok_or_else(|| BuildError::NotRouted(id.clone()))?;
    let route_name = annotation
        .first_arg()
        .ok_or_else(|| BuildError::UnresolvedRouteName(id.clone()))?;
    if route_name.trim().is_empty() {
        return Err(BuildError::EmptyRouteName(id));
    }

    let fields = decl
        .stored_properties()
        .map(|prop| {
            let ty = prop.ty.as_deref().ok_or_else(|| BuildError::UnresolvedType {
                id: id.clone(),
                field: prop.name.clone(),
            })?;
            Ok(FieldSpec {
                name: prop.name.clone(),
                declared_type: ty.to_string(),
                kind: map_type(ty),
                encode: prop.has_annotation(&config.encode_annotation),
            })
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    Ok(RouteDescriptor {
        route_name: route_name.to_string(),
        fields,
        source: id,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use wayfinder_ir::TypeKind;
    use wayfinder_manifest::Manifest;

    use super::*;

    fn build(toml: &str) -> Result<RouteDescriptor, BuildError> {
        let manifest = Manifest::from_str(toml).expect("Failed to parse test manifest");
        build_descriptor(&manifest.declarations[0], &manifest.generator)
    }

    #[test]
    fn test_sample_declaration() {
        let d = build(
            r#"
            [[declaration]]
            name = "Sample"
            package = "com.guru.routeksp"
            annotations = [{ name = "com.guru.annonation.Destination", args = ["android_sample"] }]
            properties = [
                { name = "name", type = "String" },
                { name = "age", type = "Int" },
                { name = "address", type = "String" },
                { name = "isAndroid", type = "Boolean" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(d.route_name, "android_sample");
        assert_eq!(d.source, DeclarationId::new("com.guru.routeksp", "Sample"));
        let fields: Vec<_> = d.fields.iter().map(|f| (f.name.as_str(), f.kind)).collect();
        assert_eq!(
            fields,
            vec![
                ("name", TypeKind::String),
                ("age", TypeKind::Int),
                ("address", TypeKind::String),
                ("isAndroid", TypeKind::Bool),
            ]
        );
        assert!(d.fields.iter().all(|f| !f.encode));
    }

    #[test]
    fn test_route_name_taken_verbatim() {
        let d = build(
            r#"
            [[declaration]]
            name = "Search"
            annotations = [{ name = "Destination", args = [" Search Screen/v2 "] }]
            "#,
        )
        .unwrap();
        assert_eq!(d.route_name, " Search Screen/v2 ");
    }

    #[test]
    fn test_encode_marker_detected() {
        let d = build(
            r#"
            [[declaration]]
            name = "Profile"
            annotations = [{ name = "Destination", args = ["profile"] }]
            properties = [
                { name = "name", type = "String", annotations = ["com.guru.annonation.EncodeUrl"] },
                { name = "id", type = "Long", annotations = ["Deprecated"] },
            ]
            "#,
        )
        .unwrap();
        assert!(d.fields[0].encode);
        assert!(!d.fields[1].encode);
    }

    #[test]
    fn test_extension_and_inherited_excluded() {
        let d = build(
            r#"
            [[declaration]]
            name = "Detail"
            annotations = [{ name = "Destination", args = ["detail"] }]
            properties = [
                { name = "base", type = "String", inherited = true },
                { name = "id", type = "Int" },
                { name = "label", type = "String", extension = "Detail" },
                { name = "flag", type = "Boolean" },
            ]
            "#,
        )
        .unwrap();
        let names: Vec<_> = d.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "flag"]);
    }

    #[test]
    fn test_no_fields_is_legal() {
        let d = build(
            r#"
            [[declaration]]
            name = "Home"
            annotations = [{ name = "Destination", args = ["home"] }]
            "#,
        )
        .unwrap();
        assert!(d.fields.is_empty());
    }

    #[test]
    fn test_unsupported_type_kept() {
        let d = build(
            r#"
            [[declaration]]
            name = "Tags"
            annotations = [{ name = "Destination", args = ["tags"] }]
            properties = [{ name = "tags", type = "List<String>" }]
            "#,
        )
        .unwrap();
        assert_eq!(d.fields[0].kind, TypeKind::Unsupported);
        assert_eq!(d.fields[0].declared_type, "List<String>");
    }

    #[test]
    fn test_empty_route_name_rejected() {
        let err = build(
            r#"
            [[declaration]]
            name = "Blank"
            annotations = [{ name = "Destination", args = ["  "] }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::EmptyRouteName(_)));
    }

    #[test]
    fn test_unresolved_route_name_rejected() {
        let err = build(
            r#"
            [[declaration]]
            name = "Pending"
            annotations = ["Destination"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::UnresolvedRouteName(_)));
    }

    #[test]
    fn test_not_routed() {
        let err = build(
            r#"
            [[declaration]]
            name = "Plain"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::NotRouted(_)));
    }

    #[test]
    fn test_custom_annotation_names() {
        let d = build(
            r#"
            [generator]
            route_annotation = "Screen"
            encode_annotation = "Encoded"

            [[declaration]]
            name = "Article"
            annotations = [{ name = "Screen", args = ["article"] }]
            properties = [{ name = "slug", type = "String", annotations = ["Encoded"] }]
            "#,
        )
        .unwrap();
        assert_eq!(d.route_name, "article");
        assert!(d.fields[0].encode);
    }
}
