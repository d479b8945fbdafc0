//! Writing generated sources to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;

/// A source file produced by the generator.
pub trait GeneratedFile {
    /// Destination of the file under an output root.
    fn path(&self, base: &Path) -> PathBuf;

    /// Full file content.
    fn render(&self) -> String;

    /// When an existing file at the destination is replaced.
    fn overwrite(&self) -> Overwrite {
        Overwrite::IfChanged
    }

    /// Write the file under `base`, creating parent directories.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&self.path(base), &self.render(), self.overwrite())
    }
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already held identical content and was left untouched,
    /// preserving its modification time for incremental builds.
    Unchanged,
}

/// Policy for a destination that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    /// Replace only when the content differs.
    #[default]
    IfChanged,
}

/// Write `content` to `path` under the given policy.
pub fn write_file(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    if overwrite == Overwrite::IfChanged
        && path.exists()
        && fs::read_to_string(path)? == content
    {
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(WriteResult::Written)
}
