// crates/pf_cli/src/args.rs
//
// Offline CLI argument surface.
// - Input is a local file or `-` for stdin; any scheme:// is refused.
// - Output: --out dir, --render [json|html] (up to 2, duplicates collapse).
// - --validate-only loads and converts the document without writing anything.

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "profiler",
    disable_help_subcommand = true,
    about = "Project a profile document into dashboard views, offline"
)]
pub struct Args {
    /// Profile document JSON path, or `-` to read stdin.
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory (default: current directory).
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Dashboard renderer(s) to emit. Choose up to 2 (json, html). Omit to skip rendering.
    #[arg(long, value_parser = ["json", "html"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Load and convert the document only; write nothing.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress the summary line on stderr.
    #[arg(long)]
    pub quiet: bool,

    /// Log verbosity: -v info, -vv debug (RUST_LOG overrides).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl Args {
    pub fn source(&self) -> InputSource {
        if self.input.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(self.input.clone())
        }
    }
}

#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local (no scheme): {p}"),
        }
    }
}
impl std::error::Error for CliError {}

#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    let s = p.to_string_lossy();
    if has_scheme(&s) {
        return Err(CliError::NonLocalPath(s.into_owned()));
    }
    Ok(())
}

pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// Path locality checks and renderer de-duplication. File existence is left to
/// the loader so a missing input maps to the I/O exit code.
pub fn validate(mut args: Args) -> Result<Args, CliError> {
    ensure_local_path(&args.input)?;
    ensure_local_path(&args.out)?;

    let mut seen: Vec<String> = Vec::with_capacity(2);
    for r in args.render.drain(..) {
        if !seen.contains(&r) {
            seen.push(r);
        }
    }
    args.render = seen;
    Ok(args)
}
