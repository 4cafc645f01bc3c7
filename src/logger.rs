use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

// stdout carries the rendered feed, so the console only gets stderr
fn add_console_sink(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .build()?);

    builder.sink(stderr);

    Ok(())
}

fn console_logger() -> spdlog::Result<Logger> {
    let mut builder = Logger::builder();
    add_console_sink(&mut builder)?;
    let logger = builder.build()?;
    logger.set_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    Ok(logger)
}

/// Info and above to stderr
pub fn use_console_logger() -> spdlog::Result<()> {
    spdlog::set_default_logger(Arc::new(console_logger()?));
    Ok(())
}

/// Without a `[log]` section logs go to stderr at info level
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        return use_console_logger();
    };

    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(30)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }

    if log.log_to_console {
        add_console_sink(&mut builder)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.into()));

    spdlog::set_default_logger(logger);

    Ok(())
}
