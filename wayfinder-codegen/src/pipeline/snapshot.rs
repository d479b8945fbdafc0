//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the pass state after each phase so the pipeline can be inspected
//! phase by phase.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use eyre::{Result, eyre};
use serde::Serialize;
use wayfinder_ir::{DeclarationId, RouteDescriptor};

use super::{CompilationContext, Diagnostic, Plugin};
use crate::descriptor::declaration_id;

/// A snapshot of the pass state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discovered: Vec<DeclarationId>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<RouteDescriptor>,

    /// Relative paths of the rendered units.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<PathBuf>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub retry: Vec<DeclarationId>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &CompilationContext<'_>) -> Self {
        Self {
            phase: phase.to_string(),
            discovered: ctx.discovered.iter().map(|d| declaration_id(d)).collect(),
            descriptors: ctx.descriptors.clone(),
            units: ctx.units.iter().map(|u| u.relative_path()).collect(),
            retry: ctx.retry.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }
}

/// A plugin that captures pass state after each phase.
///
/// Backs the `--visualize` flag of `wayfinder generate`.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(emitter).plugin(SnapshotPlugin::with_output_dir(".wayfinder/debug"));
/// pipeline.run(&manifest)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes `<phase>.json` files as phases complete.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Result<Vec<PhaseSnapshot>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| eyre!("snapshot lock poisoned"))?;
        Ok(snapshots.clone())
    }

    /// Write all snapshots to a directory.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots()? {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .map_err(|_| eyre!("snapshot lock poisoned"))?
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;
    use wayfinder_manifest::Manifest;

    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [[declaration]]
            name = "Home"
            package = "com.app"
            annotations = [{ name = "Destination", args = ["home"] }]
            properties = [{ name = "id", type = "Long" }]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().unwrap().is_empty());
    }

    #[test]
    fn test_captures_each_phase() {
        let manifest = manifest();
        let mut ctx = CompilationContext::new(&manifest);
        let plugin = SnapshotPlugin::new();

        plugin.on_after_phase("discover", &mut ctx).unwrap();
        ctx.retry.push(DeclarationId::new("com.app", "Home"));
        plugin.on_after_phase("classify", &mut ctx).unwrap();

        let snapshots = plugin.snapshots().unwrap();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].retry.is_empty());
        assert_eq!(snapshots[1].retry.len(), 1);
    }

    #[test]
    fn test_writes_json_per_phase() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest();
        let mut ctx = CompilationContext::new(&manifest);
        let plugin = SnapshotPlugin::with_output_dir(temp.path());

        plugin.on_after_phase("build", &mut ctx).unwrap();

        let json = fs::read_to_string(temp.path().join("build.json")).unwrap();
        assert!(json.contains("\"phase\": \"build\""));
        assert!(!json.contains("\"retry\""));
    }
}
