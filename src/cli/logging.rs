//! Log level configuration and subscriber setup.
//!
//! Logs go to stderr so they never mix with the JSON written to stdout.

use std::{env, str::FromStr};

use tracing_subscriber::EnvFilter;

use super::CliError;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_LEVEL_ENV: &str = "PROSEL_LOG_LEVEL";

/// Log level, matching the tracing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Picks the level from the flag, then [`LOG_LEVEL_ENV`], then the default.
pub fn resolve_log_level(flag: Option<LogLevel>) -> Result<LogLevel, CliError> {
    if let Some(level) = flag {
        return Ok(level);
    }
    match env::var(LOG_LEVEL_ENV) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(LogLevel::default()),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter_str()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // The first subscriber wins; later calls (tests, embedding) are ignored.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(resolve_log_level(Some(LogLevel::Trace)).unwrap(), LogLevel::Trace);
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(LogLevel::Error);
        init_logging(LogLevel::Debug);
    }
}
