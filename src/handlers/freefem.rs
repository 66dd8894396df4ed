//! The FreeFem++ cell handler: decide what to run, run it, and pick the
//! display artifact.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{Config, ImageBackend};
use crate::display::DisplayHandle;
use crate::error::{Error, Result};
use crate::process::ToolRunner;
use crate::staging::StagedScripts;

/// Name reported when neither a cell body nor a script path was given.
const DEFAULT_SCRIPT: &str = "temp.edp";

/// Run one invocation end to end.
///
/// Source resolution: an explicit `ff_file` wins; otherwise the cell body is
/// staged (or written to `<write>.edp` when requested); with neither, the
/// invocation fails. The staged copy is removed before returning.
pub fn run(args: &Cli, cell: Option<&str>, config: &Config) -> Result<Option<DisplayHandle>> {
    let wants_image = args.display.is_some() || args.displaysvg.is_some();
    if wants_image && config.image_backend() == ImageBackend::Unavailable {
        return Err(Error::ConverterUnavailable(config.converter().to_string()));
    }

    let runner = ToolRunner::from_config(config);
    let mut staged: Option<StagedScripts> = None;

    // The body is persisted or staged first; an explicit script file still
    // overrides which path actually runs, but a requested save happens
    // either way.
    let mut candidate: Option<PathBuf> = None;
    match (cell, &args.write) {
        (Some(body), Some(root)) => {
            let path = PathBuf::from(format!("{root}.edp"));
            fs::write(&path, body)?;
            info!(path = %path.display(), "wrote cell body");
            candidate = Some(path);
        }
        (Some(body), None) if args.ff_file.is_none() => {
            let (batch, path) = StagedScripts::stage_one(body)?;
            staged = Some(batch);
            candidate = Some(path);
        }
        (Some(_), None) => debug!("cell body ignored, script file given"),
        (None, Some(_)) => debug!("--write given without a cell body, nothing to save"),
        (None, None) => {}
    }

    let script: PathBuf = match (&args.ff_file, candidate) {
        (Some(file), _) => file.clone(),
        (None, Some(path)) => path,
        (None, None) => return Err(Error::FileNotFound(PathBuf::from(DEFAULT_SCRIPT))),
    };

    let transcript = runner.run_script(&script)?;
    if !transcript.is_empty() {
        debug!(transcript = %transcript, "interpreter transcript");
    }
    drop(staged);

    // -dp takes precedence when both display flags are present.
    if let Some(image) = &args.display {
        let out = runner.convert_raster(image)?;
        return Ok(Some(DisplayHandle::Raster(out)));
    }
    if let Some(image) = &args.displaysvg {
        let out = runner.convert_vector(image)?;
        return Ok(Some(DisplayHandle::Vector(out)));
    }
    Ok(None)
}
