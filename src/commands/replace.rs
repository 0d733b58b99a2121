use clap::Args;

use renamer::{Mode, RunSummary};

use super::{execute, CmdResult, TreeArgs};

#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Search text - text to be replaced
    #[arg(allow_hyphen_values = true)]
    pub search: String,

    /// Replacement text - text to replace with
    #[arg(allow_hyphen_values = true)]
    pub replace: String,

    #[command(flatten)]
    pub tree: TreeArgs,
}

pub fn run(args: ReplaceArgs) -> CmdResult<RunSummary> {
    let mode = Mode::replace(&args.search, &args.replace)?;
    let config = args.tree.into_config(mode)?;
    execute(&config)
}
