use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use ffmagic::config::Config;
use ffmagic::{cli, handlers, DisplayHandle};

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    init_tracing();

    match run(&args) {
        Ok(Some(handle)) => {
            info!(mime = handle.mime(), "display ready");
            println!("{}", handle.path().display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Cli) -> Result<Option<DisplayHandle>> {
    // stdin carries the cell body when piped; a terminal means no body.
    let mut cell = None;
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading the cell body from stdin")?;
        if !buf.is_empty() {
            cell = Some(buf);
        }
    }

    let cfg = Config::load();
    debug!(config = %cfg.config_path.display(), "configuration loaded");
    Ok(handlers::freefem::run(args, cell.as_deref(), &cfg)?)
}

fn init_tracing() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
