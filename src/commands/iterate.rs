use clap::builder::RangedU64ValueParser;
use clap::Args;

use renamer::{Mode, RunSummary, DEFAULT_PAD, MAX_PAD};

use super::{execute, CmdResult, TreeArgs};

#[derive(Args, Debug)]
pub struct IterateArgs {
    /// Text marking where the generated prefix ends; it and everything after it is kept
    #[arg(long, allow_hyphen_values = true)]
    pub pivot: String,

    /// Prefix template; %i% is the file number within its folder, %j% the folder number
    #[arg(long, allow_hyphen_values = true)]
    pub phrase: String,

    /// Zero-padding width for %i% and %j%
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PAD,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PAD as u64)
    )]
    pub pad: usize,

    #[command(flatten)]
    pub tree: TreeArgs,
}

pub fn run(args: IterateArgs) -> CmdResult<RunSummary> {
    let mode = Mode::iterate(&args.pivot, &args.phrase, args.pad)?;
    let config = args.tree.into_config(mode)?;
    execute(&config)
}
