use std::io::Write;

use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

/// Compact `LEVEL message` lines on stderr, so stdout carries only the tour.
pub fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()))
        .try_init()?;
    Ok(())
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
