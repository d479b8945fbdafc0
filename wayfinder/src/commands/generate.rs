use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wayfinder_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to wayfinder.toml (defaults to ./wayfinder.toml)
    #[arg(short, long, default_value = "wayfinder.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [generator] out_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write per-phase pipeline snapshots to <output>/.wayfinder/debug
    #[arg(long, conflicts_with = "dry_run")]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let output_dir = self.output.clone().unwrap_or_else(|| file.out_dir());

        let report = ops::generate(
            file.manifest(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
