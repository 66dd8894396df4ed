//! Error taxonomy shared by the library and the binary.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result alias for ffmagic operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A referenced script or image path was absent. Raised before any
    /// process is spawned; never retried.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An external tool exited non-zero. The Display payload is the tool's
    /// captured standard output, verbatim.
    #[error("{stdout}")]
    ToolFailure {
        tool: String,
        status: ExitStatus,
        stdout: String,
    },

    /// The child process could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Spawn { program: String, source: io::Error },

    /// A display conversion was requested while the image backend is
    /// unavailable.
    #[error("image converter '{0}' was not found; install it or point INKSCAPE_BINARY at it")]
    ConverterUnavailable(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
