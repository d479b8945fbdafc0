//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use super::Manifest;
use crate::{Error, ParseContext, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "wayfinder.toml")
    }
}

impl Manifest {
    /// Parse a wayfinder.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a wayfinder.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate names and uniqueness after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.generator.route_annotation.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("generator.route_annotation cannot be empty", None));
    }
    ctx.validate_name(&manifest.generator.container_param, "container parameter")?;

    let mut seen = HashSet::new();
    for decl in &manifest.declarations {
        ctx.validate_name(&decl.name, "declaration")?;

        let qualified = decl.qualified_name();
        if !seen.insert(qualified.clone()) {
            return Err(ctx.duplicate_error(&decl.name, "declaration"));
        }

        let decl_ctx = ctx.push(&decl.name);
        if !decl.package.is_empty() {
            for segment in decl.package.split('.') {
                decl_ctx.validate_name(segment, "package segment")?;
            }
        }

        let mut props = HashSet::new();
        for prop in &decl.properties {
            decl_ctx.validate_name(&prop.name, "property")?;
            if !props.insert(prop.name.as_str()) {
                return Err(decl_ctx.duplicate_error(&prop.name, "property"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.declarations.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Manifest::from_str("[[declaration]]\nname = ").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_property_rejected() {
        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Sample"

            [[declaration.properties]]
            name = "object"
            type = "String"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_declaration_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "My Screen"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_package_rejected() {
        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com.my app"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));

        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com.object.x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));

        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com..app"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Sample"

            [[declaration.properties]]
            name = "id"
            type = "Int"

            [[declaration.properties]]
            name = "id"
            type = "Long"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
    }

    #[test]
    fn test_same_name_in_other_package_allowed() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com.a"

            [[declaration]]
            name = "Home"
            package = "com.b"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.declarations.len(), 2);
    }

    #[test]
    fn test_duplicate_declaration_rejected() {
        let err = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com.a"

            [[declaration]]
            name = "Home"
            package = "com.a"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
    }
}
