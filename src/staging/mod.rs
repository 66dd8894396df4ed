//! Temporary script staging.
//!
//! Cell text arrives as strings; the interpreter wants files on disk. Each
//! batch gets a private temporary directory holding one `.edp` file per
//! script. Dropping the handle removes the directory and everything in it,
//! whether the run succeeded, failed, or panicked.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};
use tracing::debug;

use crate::error::Result;

/// A staged batch of scripts. Paths in `files` are valid exactly as long as
/// this value lives.
#[derive(Debug)]
pub struct StagedScripts {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl StagedScripts {
    /// Write each script into a fresh temporary directory, one `.edp` file
    /// per entry, preserving order. Script contents are written verbatim.
    pub fn stage<S: AsRef<str>>(scripts: &[S]) -> Result<Self> {
        let dir = Builder::new().prefix("ffmagic-").tempdir()?;
        let mut files = Vec::with_capacity(scripts.len());

        for script in scripts {
            let mut file = Builder::new()
                .prefix("cell-")
                .suffix(".edp")
                .tempfile_in(dir.path())?;
            file.write_all(script.as_ref().as_bytes())?;
            file.flush()?;
            // Detach from the NamedTempFile deleter; the directory owns cleanup.
            let (_, path) = file.keep().map_err(|e| e.error)?;
            debug!(path = %path.display(), "staged script");
            files.push(path);
        }

        Ok(Self { dir, files })
    }

    /// Stage a single script and hand back its path with the batch handle.
    pub fn stage_one(script: &str) -> Result<(Self, PathBuf)> {
        let staged = Self::stage(&[script])?;
        let path = staged.files[0].clone();
        Ok((staged, path))
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
