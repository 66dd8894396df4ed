//! Tool configuration: interpreter/converter binaries and the probed
//! image-backend capability.

use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::debug;

const DEFAULT_INTERPRETER: &str = "FreeFem++";
const DEFAULT_CONVERTER: &str = "inkscape";

/// Whether the external image converter was found at load time. Probed once;
/// display requests made while `Unavailable` fail up front with a clear error
/// instead of a spawn failure mid-pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBackend {
    Available,
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Config {
    interpreter: String,
    converter: String,
    image_backend: ImageBackend,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .ffmagicrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        let interpreter = map
            .remove("FREEFEM_BINARY")
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());
        let converter = map
            .remove("INKSCAPE_BINARY")
            .unwrap_or_else(|| DEFAULT_CONVERTER.to_string());

        Self::assemble(interpreter, converter, config_path)
    }

    /// Build a configuration with explicit tool names, bypassing the rc file
    /// and environment. Runs the same backend probe as `load`.
    pub fn with_tools(interpreter: impl Into<String>, converter: impl Into<String>) -> Self {
        Self::assemble(interpreter.into(), converter.into(), default_config_path())
    }

    fn assemble(interpreter: String, converter: String, config_path: PathBuf) -> Self {
        let image_backend = match resolve_program(&converter) {
            Some(found) => {
                debug!(converter = %found.display(), "image backend available");
                ImageBackend::Available
            }
            None => {
                debug!(converter = %converter, "image backend unavailable");
                ImageBackend::Unavailable
            }
        };
        Self {
            interpreter,
            converter,
            image_backend,
            config_path,
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn converter(&self) -> &str {
        &self.converter
    }

    pub fn image_backend(&self) -> ImageBackend {
        self.image_backend
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or FFMAGIC_* for forward-compat
    const KEYS: &[&str] = &["FREEFEM_BINARY", "INKSCAPE_BINARY"];

    KEYS.contains(&k) || k.starts_with("FFMAGIC_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("ffmagic").join(".ffmagicrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("FREEFEM_BINARY".into(), DEFAULT_INTERPRETER.into());
    m.insert("INKSCAPE_BINARY".into(), DEFAULT_CONVERTER.into());
    m
}

/// Locate `name` the way a shell would: a value containing a path separator
/// is checked directly, a bare name is searched on `PATH`.
fn resolve_program(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }
    let path_env = env::var_os("PATH")?;
    for dir in env::split_paths(&path_env) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
