mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{inspect, optimize};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init_logger(cli.verbose)?;

    match &cli.command {
        Commands::Optimize(args) => optimize::run(&cli, args),
        Commands::Inspect(args) => inspect::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
