//! Generate operation - route unit generation from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use wayfinder_codegen::{
    FsWriter, MemoryWriter, Pipeline, Severity, UnitWriter, pipeline::SnapshotPlugin,
};
use wayfinder_codegen_kotlin::KotlinEmitter;
use wayfinder_manifest::Manifest;

use super::deferred_names;
use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenFile, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output root for generated units.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output per-phase debug snapshots. Ignored for a dry run.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs one processing pass over the manifest and hands every unit to a
/// writer: the filesystem, or memory for a dry run.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".wayfinder/debug");
    let visualize = opts.visualize && !opts.dry_run;

    let mut pipeline = Pipeline::new(KotlinEmitter::from_config(&manifest.generator));
    if visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }

    let mut fs_writer = FsWriter::new(opts.output_dir);
    let mut memory_writer = MemoryWriter::new();
    let writer: &mut dyn UnitWriter = if opts.dry_run {
        &mut memory_writer
    } else {
        &mut fs_writer
    };

    let outcome = pipeline
        .process(manifest, writer)
        .wrap_err("Failed to generate routes")?;
    let ctx = &outcome.context;

    let warnings = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: memory_writer
                .units
                .into_iter()
                .map(|unit| PreviewFile {
                    path: unit.relative_path(),
                    content: unit.content,
                })
                .collect(),
        })
    } else {
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: outcome
                .written
                .iter()
                .map(|w| WrittenFile {
                    path: w.path.clone(),
                    result: w.result,
                })
                .collect(),
            debug_dir: visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        warnings,
        declaration_count: ctx.discovered.len(),
        deferred: deferred_names(ctx),
        result,
    })
}
