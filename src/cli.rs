use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ffmagic", about = "Run FreeFem++ cell scripts and display their plots", version)]
pub struct Cli {
    /// Execute an existing .edp script instead of the piped cell body.
    #[arg(value_name = "FF_FILE")]
    pub ff_file: Option<PathBuf>,

    /// Convert the named plot file to PNG and display it.
    #[arg(short = 'd', long, visible_alias = "dp", value_name = "IMAGE")]
    pub display: Option<PathBuf>,

    /// Convert the named plot file to SVG and display it.
    #[arg(long, visible_alias = "dsvg", value_name = "IMAGE")]
    pub displaysvg: Option<PathBuf>,

    /// Save the cell body as <NAME>.edp instead of a temporary file.
    #[arg(short = 'w', long, value_name = "NAME")]
    pub write: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_alias_forms_parse_alike() {
        let long = Cli::try_parse_from(["ffmagic", "--display", "plot.eps"]).expect("long flag");
        let alias = Cli::try_parse_from(["ffmagic", "--dp", "plot.eps"]).expect("alias flag");
        assert_eq!(long.display, Some(PathBuf::from("plot.eps")));
        assert_eq!(alias.display, long.display);

        let svg = Cli::try_parse_from(["ffmagic", "--dsvg", "mesh.eps"]).expect("svg alias");
        assert_eq!(svg.displaysvg, Some(PathBuf::from("mesh.eps")));
    }

    #[test]
    fn positional_write_and_shorts_parse() {
        let args =
            Cli::try_parse_from(["ffmagic", "poisson.edp", "-w", "session", "-d", "plot.eps"])
                .expect("full invocation");
        assert_eq!(args.ff_file, Some(PathBuf::from("poisson.edp")));
        assert_eq!(args.write.as_deref(), Some("session"));
        assert_eq!(args.display, Some(PathBuf::from("plot.eps")));
        assert_eq!(args.displaysvg, None);
    }

    #[test]
    fn bare_invocation_has_no_source_or_flags() {
        let args = Cli::try_parse_from(["ffmagic"]).expect("no args");
        assert!(args.ff_file.is_none());
        assert!(args.display.is_none());
        assert!(args.displaysvg.is_none());
        assert!(args.write.is_none());
    }
}
