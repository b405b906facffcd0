use std::io::Write;

use anyhow::Result;
use env_logger::{Builder, Target, fmt::Formatter};
use log::LevelFilter;

/// Install the stderr logger. Warnings are always shown; each `-v` adds a level.
pub fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{:<5} {}", record.level(), record.args())
        });

    builder.try_init()?;
    Ok(())
}
