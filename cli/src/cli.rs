use std::path::PathBuf;

/// School catchment rebalancing CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "catchment", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Rebalance catchment areas and write the best plan found
    Optimize(OptimizeArgs),

    /// Summarize the input districts without optimizing
    Inspect(InputArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Block GeoJSON (block_id, school_id, lang_majority, lang_other, student_base, contains_school)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub blocks: PathBuf,

    /// Walking-distance CSV (school_id, block_id, walk_d)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub distances: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// JSON search configuration; unspecified fields keep their defaults
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of trials
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Base random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run trials on a single thread
    #[arg(long)]
    pub serial: bool,
}
