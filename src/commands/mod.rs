use std::io;
use std::path::PathBuf;

use clap::Args;

use renamer::{Mode, RunConfig, RunSummary, DEFAULT_SKIP};

pub type CmdResult<T> = renamer::Result<(T, i32)>;

pub mod iterate;
pub mod replace;

/// Options shared by every rename mode.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Execution directory (and sub-directories)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Preview the change: show before and after names without renaming
    #[arg(long)]
    pub dry_run: bool,

    /// Comma-separated folder names to skip
    #[arg(long, value_name = "NAMES", default_value = DEFAULT_SKIP)]
    pub skip: String,
}

impl TreeArgs {
    pub fn into_config(self, mode: Mode) -> renamer::Result<RunConfig> {
        RunConfig::new(&self.dir, self.dry_run, &self.skip, mode)
    }
}

/// Run a validated configuration against the real stdout/stderr.
fn execute(config: &RunConfig) -> CmdResult<RunSummary> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = renamer::run(config, &mut stdout.lock(), &mut stderr.lock())?;
    Ok((summary, 0))
}

pub(crate) fn run(command: crate::Commands) -> CmdResult<RunSummary> {
    match command {
        crate::Commands::Replace(args) => replace::run(args),
        crate::Commands::Iterate(args) => iterate::run(args),
    }
}
