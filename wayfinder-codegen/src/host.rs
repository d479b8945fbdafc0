//! Seams to the host compiler and its output writer.
//!
//! The host owns declaration discovery, semantic validation, and file
//! emission. The pipeline only reads declarations through [`Host`] and hands
//! rendered units to a [`UnitWriter`].

use std::path::{Path, PathBuf};

use eyre::Result;
use wayfinder_core::{GeneratedFile, WriteResult, package_to_path};
use wayfinder_ir::DeclarationId;
use wayfinder_manifest::{Declaration, GeneratorConfig, Manifest};

/// Declaration model supplied by the host for one processing pass.
pub trait Host {
    /// Generator settings in effect for this pass.
    fn config(&self) -> &GeneratorConfig;

    /// Declarations carrying an annotation with the given short name, in
    /// source order.
    fn annotated(&self, annotation: &str) -> Vec<&Declaration>;

    /// Every source file currently visible to the host.
    fn source_files(&self) -> Vec<PathBuf>;

    /// The host's semantic validity check.
    fn is_valid(&self, declaration: &Declaration) -> bool;
}

impl Host for Manifest {
    fn config(&self) -> &GeneratorConfig {
        &self.generator
    }

    fn annotated(&self, annotation: &str) -> Vec<&Declaration> {
        Manifest::annotated(self, annotation).collect()
    }

    fn source_files(&self) -> Vec<PathBuf> {
        Manifest::source_files(self)
    }

    fn is_valid(&self, declaration: &Declaration) -> bool {
        declaration.is_resolved(&self.generator.route_annotation)
    }
}

/// Build dependency set declared for a generated unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// Source files whose change invalidates the unit.
    pub files: Vec<PathBuf>,
    /// Whether the unit aggregates information from every visible file.
    pub aggregating: bool,
}

impl Dependencies {
    /// Depend on every visible source file.
    pub fn all(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            files: files.into_iter().collect(),
            aggregating: true,
        }
    }
}

/// One rendered source unit, ready for the host writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Declaration the unit was generated from.
    pub source: DeclarationId,
    /// Package of the unit (same as its source declaration).
    pub package: String,
    /// File name without extension (e.g. "SampleDestination").
    pub name: String,
    /// File extension (e.g. "kt").
    pub extension: &'static str,
    /// Full source text.
    pub content: String,
    /// Dependency set handed to the host alongside the text.
    pub dependencies: Dependencies,
}

impl GeneratedUnit {
    /// Path of the unit relative to an output root (e.g. "com/app/HomeDestination.kt").
    pub fn relative_path(&self) -> PathBuf {
        let file = format!("{}.{}", self.name, self.extension);
        let dir = package_to_path(&self.package);
        if dir.is_empty() {
            PathBuf::from(file)
        } else {
            Path::new(&dir).join(file)
        }
    }
}

impl GeneratedFile for GeneratedUnit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Append-only sink for generated units.
pub trait UnitWriter {
    /// Hand one unit to the host.
    fn write(&mut self, unit: &GeneratedUnit) -> Result<WriteResult>;
}

/// Writes units under an output root, skipping files whose content is unchanged.
#[derive(Debug)]
pub struct FsWriter {
    base: PathBuf,
    dependencies: Vec<(PathBuf, Dependencies)>,
}

impl FsWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            dependencies: Vec::new(),
        }
    }

    /// Output root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Dependency sets recorded for every unit written so far, keyed by file path.
    pub fn dependencies(&self) -> &[(PathBuf, Dependencies)] {
        &self.dependencies
    }
}

impl UnitWriter for FsWriter {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<WriteResult> {
        let result = GeneratedFile::write(unit, &self.base)?;
        self.dependencies
            .push((unit.path(&self.base), unit.dependencies.clone()));
        Ok(result)
    }
}

/// Collects units in memory instead of writing them.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub units: Vec<GeneratedUnit>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnitWriter for MemoryWriter {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<WriteResult> {
        self.units.push(unit.clone());
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    fn unit(package: &str, content: &str) -> GeneratedUnit {
        GeneratedUnit {
            source: DeclarationId::new(package, "Home"),
            package: package.to_string(),
            name: "HomeDestination".to_string(),
            extension: "kt",
            content: content.to_string(),
            dependencies: Dependencies::all([PathBuf::from("Home.kt")]),
        }
    }

    #[test]
    fn test_relative_path_follows_package() {
        assert_eq!(
            unit("com.guru.app", "").relative_path(),
            PathBuf::from("com/guru/app/HomeDestination.kt")
        );
        assert_eq!(
            unit("", "").relative_path(),
            PathBuf::from("HomeDestination.kt")
        );
    }

    #[test]
    fn test_fs_writer_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut writer = FsWriter::new(temp.path());

        let u = unit("com.app", "object HomeDestination\n");
        assert_eq!(writer.write(&u).unwrap(), WriteResult::Written);
        assert_eq!(writer.write(&u).unwrap(), WriteResult::Unchanged);

        let path = temp.path().join("com/app/HomeDestination.kt");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "object HomeDestination\n"
        );
        assert_eq!(writer.dependencies().len(), 2);
        assert!(writer.dependencies()[0].1.aggregating);
    }

    #[test]
    fn test_fs_writer_rewrites_changed() {
        let temp = TempDir::new().unwrap();
        let mut writer = FsWriter::new(temp.path());

        writer.write(&unit("com.app", "old")).unwrap();
        let result = writer.write(&unit("com.app", "new")).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("com/app/HomeDestination.kt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_memory_writer_collects() {
        let mut writer = MemoryWriter::new();
        writer.write(&unit("a", "x")).unwrap();
        assert_eq!(writer.units.len(), 1);
    }

    #[test]
    fn test_manifest_host() {
        let manifest = Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            file = "Home.kt"
            annotations = [{ name = "Destination", args = ["home"] }]

            [[declaration]]
            name = "Pending"
            file = "Pending.kt"
            annotations = ["Destination"]

            [[declaration]]
            name = "Model"
            file = "Home.kt"
            "#,
        )
        .unwrap();

        let routed = Host::annotated(&manifest, "Destination");
        assert_eq!(routed.len(), 2);
        assert!(manifest.is_valid(routed[0]));
        assert!(!manifest.is_valid(routed[1]));
        assert_eq!(
            Host::source_files(&manifest),
            vec![PathBuf::from("Home.kt"), PathBuf::from("Pending.kt")]
        );
    }
}
