//! Generate command report data structures.

use std::path::PathBuf;

use wayfinder_core::WriteResult;

use super::output::{Output, Report};

/// Report data from route generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Number of routed declarations found.
    pub declaration_count: usize,

    /// Declarations deferred to a later round.
    pub deferred: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files handed to the writer.
    pub files: Vec<WrittenFile>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// A file handed to the writer.
#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
        self.render_deferred(out);
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Routes", &self.declaration_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        let (changed, unchanged): (Vec<_>, Vec<_>) = written
            .files
            .iter()
            .partition(|f| f.result == WriteResult::Written);

        if !changed.is_empty() {
            out.newline();
            out.section("Written");
            for file in changed {
                out.added_item(&file.path.display().to_string());
            }
        }

        if !unchanged.is_empty() {
            out.newline();
            out.section("Unchanged");
            for file in unchanged {
                out.list_item(&file.path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for file in &preview.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }

    fn render_deferred(&self, out: &mut dyn Output) {
        if self.deferred.is_empty() {
            return;
        }

        out.newline();
        out.section("Deferred to next round");
        for name in &self.deferred {
            out.list_item(name);
        }
    }
}
