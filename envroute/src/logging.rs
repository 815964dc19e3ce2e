//! Logging infrastructure for envroute tools.
//!
//! A small stderr logger with three verbosity levels, used by the CLI and the
//! build hook. The generation core itself never logs.

use std::env;
use std::fmt;

/// Environment variable selecting the default log level.
pub const LOG_MODE_VARIABLE: &str = "ENVROUTE_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use envroute::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use envroute::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// Messages below the configured level are dropped. An optional prefix is
/// prepended to every line, e.g. `[envroute]` when running inside a build.
///
/// # Examples
///
/// ```
/// use envroute::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal).with_prefix("[envroute]");
/// logger.warn("No config file found, skipping");
/// logger.info("not printed at Normal level");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    prefix: Option<String>,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level,
            prefix: None,
        }
    }

    /// Returns a logger that prefixes every line with `prefix`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether messages at `level` would be printed.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level >= level
    }

    /// Logs an error message. Suppressed only at Quiet level.
    pub fn error(&self, message: &str) {
        if self.enabled(LogLevel::Normal) {
            eprintln!("{}", self.line("ERROR", message));
        }
    }

    /// Logs a warning message. Suppressed only at Quiet level.
    pub fn warn(&self, message: &str) {
        if self.enabled(LogLevel::Normal) {
            eprintln!("{}", self.line("WARN", message));
        }
    }

    /// Logs an informational message. Verbose level only.
    pub fn info(&self, message: &str) {
        if self.enabled(LogLevel::Verbose) {
            eprintln!("{}", self.line("INFO", message));
        }
    }

    /// Logs a debug message. Verbose level only.
    pub fn debug(&self, message: &str) {
        if self.enabled(LogLevel::Verbose) {
            eprintln!("{}", self.line("DEBUG", message));
        }
    }

    fn line(&self, tag: &str, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix} {tag}: {message}"),
            None => format!("{tag}: {message}"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `ENVROUTE_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use envroute::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_VARIABLE) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_default() {
        let logger = Logger::default();
        assert_eq!(logger.level(), LogLevel::Normal);
        assert!(logger.enabled(LogLevel::Normal));
        assert!(!logger.enabled(LogLevel::Verbose));
    }

    #[test]
    fn test_logger_prefix() {
        let logger = Logger::new(LogLevel::Verbose).with_prefix("[envroute]");
        assert_eq!(logger.line("INFO", "hello"), "[envroute] INFO: hello");
        assert_eq!(Logger::default().line("WARN", "x"), "WARN: x");
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    fn test_init_logger_from_env() {
        let saved_env = env::var(LOG_MODE_VARIABLE).ok();

        env::set_var(LOG_MODE_VARIABLE, "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var(LOG_MODE_VARIABLE, "invalid");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        env::set_var(LOG_MODE_VARIABLE, "normal");
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);

        match saved_env {
            Some(val) => env::set_var(LOG_MODE_VARIABLE, val),
            None => env::remove_var(LOG_MODE_VARIABLE),
        }
    }
}
