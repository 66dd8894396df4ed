//! External tool invocation: the FreeFem++ interpreter and the image
//! converter. All calls block until the child exits and capture its full
//! output.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

/// Batch-mode flags handed to every interpreter run: no window pauses, no
/// graphics windows, no banner echo of the script.
const INTERPRETER_FLAGS: &[&str] = &["-nowait", "-nw", "-ne"];

/// Runs the configured external tools against staged or user files.
#[derive(Debug, Clone)]
pub struct ToolRunner {
    interpreter: String,
    converter: String,
}

impl ToolRunner {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interpreter: config.interpreter().to_string(),
            converter: config.converter().to_string(),
        }
    }

    /// Execute one script through the interpreter and return its captured
    /// stdout. The script file must already exist.
    pub fn run_script(&self, script: &Path) -> Result<String> {
        ensure_exists(script)?;
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(INTERPRETER_FLAGS).arg(script);
        self.capture(&self.interpreter, cmd)
    }

    /// Convert a plot file to PNG next to the input (`plot.eps` becomes
    /// `plot.eps.png`) and return the output path.
    pub fn convert_raster(&self, image: &Path) -> Result<PathBuf> {
        self.convert(image, "-e", "png")
    }

    /// Convert a plot file to SVG next to the input and return the output
    /// path.
    pub fn convert_vector(&self, image: &Path) -> Result<PathBuf> {
        self.convert(image, "-l", "svg")
    }

    fn convert(&self, image: &Path, out_flag: &str, ext: &str) -> Result<PathBuf> {
        ensure_exists(image)?;
        let out = appended_extension(image, ext);
        let mut cmd = Command::new(&self.converter);
        cmd.arg("-z").arg("-f").arg(image).arg(out_flag).arg(&out);
        self.capture(&self.converter, cmd)?;
        Ok(out)
    }

    fn capture(&self, program: &str, mut cmd: Command) -> Result<String> {
        debug!(command = ?cmd, "running external tool");
        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            debug!(stderr = %String::from_utf8_lossy(&output.stderr), "tool stderr");
        }

        if !output.status.success() {
            return Err(Error::ToolFailure {
                tool: program.to_string(),
                status: output.status,
                stdout,
            });
        }
        if !stdout.is_empty() {
            info!(tool = %program, transcript = %stdout, "tool output");
        }
        Ok(stdout)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound(path.to_path_buf()))
    }
}

/// `plot.eps` + `png` -> `plot.eps.png`. The original extension is kept so
/// distinct plots never collide after conversion.
fn appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
