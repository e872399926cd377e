// Fri Oct 16 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let logger = Box::new(ColoredLogger::new(level));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn level_from_verbosity(verbosity: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Error;
        }
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                format!("[{}]", record.target())
            } else {
                String::new()
            };

            eprintln!("{} {} {}", self.format_level(record.level()), target.dimmed(), record.args());
        }
    }

    fn flush(&self) {}
}

/// `RUST_LOG` wins over the command-line verbosity when it is set.
pub fn init(verbosity: u8, quiet: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        init_from_env();
    } else {
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(verbosity, quiet));
    }
}

pub fn init_from_env() {
    env_logger::init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LoggingUtils::level_from_verbosity(0, false), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_verbosity(1, false), LevelFilter::Info);
        assert_eq!(LoggingUtils::level_from_verbosity(2, false), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_verbosity(7, false), LevelFilter::Trace);
        assert_eq!(LoggingUtils::level_from_verbosity(3, true), LevelFilter::Error);
    }
}
