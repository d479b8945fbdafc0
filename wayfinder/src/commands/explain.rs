use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wayfinder_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to wayfinder.toml (defaults to ./wayfinder.toml)
    #[arg(short, long, default_value = "wayfinder.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let report = ops::explain(file.manifest(), &self.config)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
