//! Manifest types and parsing for wayfinder.toml files.

mod file;
mod parse;

use std::path::PathBuf;

pub use file::ManifestFile;
pub use parse::parse_manifest;
use serde::Deserialize;
use wayfinder_core::short_name;

/// Root manifest for wayfinder.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declarations resolved by the host, in source order
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<Declaration>,
}

impl Manifest {
    /// Declarations carrying an annotation with the given short name, in manifest order.
    pub fn annotated<'a, 'b>(
        &'a self,
        annotation: &'b str,
    ) -> impl Iterator<Item = &'a Declaration> {
        self.declarations
            .iter()
            .filter(move |d| d.annotation(annotation).is_some())
    }

    /// Every source file referenced by a declaration, deduplicated, in first-seen order.
    pub fn source_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Vec::new();
        for decl in &self.declarations {
            if let Some(file) = &decl.file
                && !files.contains(file)
            {
                files.push(file.clone());
            }
        }
        files
    }

    /// Find a declaration by simple or qualified name.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.name == name || d.qualified_name() == name)
    }
}

/// `[generator]` settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Short name of the route marker annotation.
    pub route_annotation: String,
    /// Short name of the per-field encode marker annotation.
    pub encode_annotation: String,
    /// Fully qualified runtime container type read by extractors.
    pub container: String,
    /// Parameter name of the container in extractors.
    pub container_param: String,
    /// Output root for generated sources.
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            route_annotation: "Destination".into(),
            encode_annotation: "EncodeUrl".into(),
            container: "android.os.Bundle".into(),
            container_param: "bundle".into(),
            out_dir: PathBuf::from("build/generated/wayfinder"),
        }
    }
}

/// A class-like declaration as resolved by the host compiler.
#[derive(Debug, Clone, Deserialize)]
pub struct Declaration {
    /// Simple name
    pub name: String,
    /// Package (may be empty for the default package)
    #[serde(default)]
    pub package: String,
    /// Source file the declaration lives in
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Annotations on the declaration
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Properties in declaration order, including inherited and extension ones
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Declaration {
    /// Fully qualified name (e.g. "com.app.Sample").
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// First annotation whose short name matches.
    pub fn annotation(&self, short: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.short_name() == short)
    }

    /// Properties with a backing value declared on this type itself.
    pub fn stored_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_stored())
    }

    /// Whether every referenced type and annotation argument resolved.
    ///
    /// A route annotation without an argument, or any property without a
    /// resolved type, makes the declaration invalid for this pass.
    pub fn is_resolved(&self, route_annotation: &str) -> bool {
        let route_resolved = self
            .annotation(route_annotation)
            .is_none_or(|a| !a.args.is_empty());
        route_resolved && self.properties.iter().all(Property::is_resolved)
    }
}

/// A property of a declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Resolved type; absent when the host could not resolve it
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Marker annotations on the property
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Receiver type if this is an extension property
    #[serde(default)]
    pub extension: Option<String>,
    /// Whether the property is inherited from a supertype
    #[serde(default)]
    pub inherited: bool,
}

impl Property {
    /// Own, non-extension property.
    pub fn is_stored(&self) -> bool {
        self.extension.is_none() && !self.inherited
    }

    /// Whether the property's type resolved.
    pub fn is_resolved(&self) -> bool {
        self.ty.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Whether the property carries an annotation with this short name.
    pub fn has_annotation(&self, short: &str) -> bool {
        self.annotations.iter().any(|a| a.short_name() == short)
    }
}

/// An annotation use: `"EncodeUrl"` or `{ name = "Destination", args = ["home"] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnnotation")]
pub struct Annotation {
    /// Simple or qualified annotation name
    pub name: String,
    /// Resolved argument values, in order
    pub args: Vec<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Annotation name without its package.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }

    /// First argument, if resolved.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnnotation {
    Marker(String),
    Full {
        name: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl From<RawAnnotation> for Annotation {
    fn from(raw: RawAnnotation) -> Self {
        match raw {
            RawAnnotation::Marker(name) => Self {
                name,
                args: Vec::new(),
            },
            RawAnnotation::Full { name, args } => Self { name, args },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SAMPLE: &str = r#"
        [[declaration]]
        name = "Sample"
        package = "com.guru.routeksp"
        file = "app/src/main/java/com/guru/routeksp/Sample.kt"
        annotations = [{ name = "com.guru.annonation.Destination", args = ["android_sample"] }]

        [[declaration.properties]]
        name = "name"
        type = "String"
        annotations = ["EncodeUrl"]

        [[declaration.properties]]
        name = "age"
        type = "Int"

        [[declaration.properties]]
        name = "label"
        type = "String"
        extension = "Sample"

        [[declaration]]
        name = "Plain"
        package = "com.guru.routeksp"
        file = "app/src/main/java/com/guru/routeksp/Sample.kt"
    "#;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.generator.route_annotation, "Destination");
        assert_eq!(manifest.generator.encode_annotation, "EncodeUrl");
        assert_eq!(manifest.generator.container, "android.os.Bundle");
    }

    #[test]
    fn test_annotated_matches_short_name() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        let routed: Vec<_> = manifest.annotated("Destination").map(|d| &d.name).collect();
        assert_eq!(routed, vec!["Sample"]);
    }

    #[test]
    fn test_stored_properties_skip_extensions() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        let decl = manifest.find("Sample").unwrap();
        let names: Vec<_> = decl.stored_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_marker_annotation_shorthand() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        let decl = manifest.find("com.guru.routeksp.Sample").unwrap();
        assert!(decl.properties[0].has_annotation("EncodeUrl"));
        assert!(!decl.properties[1].has_annotation("EncodeUrl"));
        assert_eq!(
            decl.annotation("Destination").and_then(Annotation::first_arg),
            Some("android_sample")
        );
    }

    #[test]
    fn test_source_files_deduplicated() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.source_files().len(), 1);
    }

    #[test]
    fn test_unresolved_type_is_invalid() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Broken"
            annotations = [{ name = "Destination", args = ["broken"] }]

            [[declaration.properties]]
            name = "id"
            "#,
        )
        .unwrap();
        assert!(!manifest.declarations[0].is_resolved("Destination"));
    }

    #[test]
    fn test_unresolved_route_argument_is_invalid() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Pending"
            annotations = ["Destination"]
            "#,
        )
        .unwrap();
        assert!(!manifest.declarations[0].is_resolved("Destination"));
    }
}
