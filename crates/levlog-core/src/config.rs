//! # Configuration
//!
//! Logger settings gathered from the environment (or any key/value source).
//!
//! ## Environment Variables
//!
//! - `LEVLOG_LEVEL`: initial threshold (`none`, `fatal`, `error`, `warn`, `info`, `debug`)
//! - `LEVLOG_PREFIX`: text placed in front of every line
//! - `LEVLOG_FLAGS`: comma-separated decorations (e.g. `date,time,shortfile`)
//! - `LEVLOG_OUTPUT`: `stderr` (default), `stdout` or `-`, or a file path opened for append
//!
//! Unset variables keep their defaults. A variable that is set but invalid is
//! an error rather than being silently ignored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use levlog_core::config::LoggerConfig;
//!
//! let logger = LoggerConfig::from_env()?.build()?;
//! logger.info("configured from the environment");
//! # Ok::<(), levlog_core::LevlogError>(())
//! ```

use std::env;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{LevlogError, Result};
use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;

/// Environment variable holding the initial threshold
pub const ENV_LEVEL: &str = "LEVLOG_LEVEL";
/// Environment variable holding the line prefix
pub const ENV_PREFIX: &str = "LEVLOG_PREFIX";
/// Environment variable holding the decoration flags
pub const ENV_FLAGS: &str = "LEVLOG_FLAGS";
/// Environment variable holding the output destination
pub const ENV_OUTPUT: &str = "LEVLOG_OUTPUT";

/// Where emitted lines go
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination
{
    /// Standard error (default)
    #[default]
    Stderr,
    /// Standard output
    Stdout,
    /// A file, created if missing and appended to
    File(PathBuf),
}

impl Destination
{
    /// Parse `stderr`, `stdout`, `-` (stdout) or a file path
    ///
    /// Keywords are matched ignoring case and surrounding whitespace; a file
    /// path is kept exactly as given.
    ///
    /// ## Errors
    ///
    /// [`LevlogError::InvalidDestination`] for an empty or all-whitespace string.
    pub fn parse(s: &str) -> Result<Self>
    {
        let keyword = s.trim();
        if keyword.is_empty() {
            return Err(LevlogError::InvalidDestination(s.to_string()));
        }
        Ok(match keyword.to_ascii_lowercase().as_str() {
            "stderr" => Destination::Stderr,
            "stdout" | "-" => Destination::Stdout,
            _ => Destination::File(PathBuf::from(s)),
        })
    }

    /// Open the destination for writing
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`] if a file destination cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Write + Send>>
    {
        let writer: Box<dyn Write + Send> = match self {
            Destination::Stderr => Box::new(io::stderr()),
            Destination::Stdout => Box::new(io::stdout()),
            Destination::File(path) => Box::new(OpenOptions::new().create(true).append(true).open(path)?),
        };
        Ok(writer)
    }
}

impl FromStr for Destination
{
    type Err = LevlogError;

    fn from_str(s: &str) -> Result<Self>
    {
        Destination::parse(s)
    }
}

impl fmt::Display for Destination
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Destination::Stderr => f.write_str("stderr"),
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything needed to construct a [`Logger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig
{
    /// Initial threshold
    pub level: Level,
    /// Line prefix
    pub prefix: String,
    /// Header decorations
    pub flags: Flags,
    /// Output destination
    pub destination: Destination,
    /// Return from terminate-on-write instead of exiting
    pub test_mode: bool,
}

impl Default for LoggerConfig
{
    fn default() -> Self
    {
        Self {
            level: Level::Info,
            prefix: String::new(),
            flags: Flags::STD,
            destination: Destination::Stderr,
            test_mode: false,
        }
    }
}

impl LoggerConfig
{
    /// Read the `LEVLOG_*` environment variables over the defaults
    ///
    /// ## Errors
    ///
    /// Returns the parse error of the first invalid variable.
    pub fn from_env() -> Result<Self>
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`LoggerConfig::from_env`], reading values from `lookup`
    ///
    /// ## Errors
    ///
    /// Returns the parse error of the first invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level.parse()?;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            config.prefix = prefix;
        }
        if let Some(flags) = lookup(ENV_FLAGS) {
            config.flags = flags.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.destination = output.parse()?;
        }
        tracing::debug!(
            level = %config.level,
            flags = %config.flags,
            destination = %config.destination,
            "logger configuration loaded"
        );
        Ok(config)
    }

    /// Open the destination and build the logger
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`] if the destination cannot be opened.
    pub fn build(&self) -> Result<Logger>
    {
        let writer = self.destination.open()?;
        Ok(Logger::builder()
            .boxed_writer(writer)
            .prefix(self.prefix.clone())
            .flags(self.flags)
            .level(self.level)
            .test_mode(self.test_mode)
            .build())
    }
}

#[cfg(test)]
mod tests
{
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String>
    {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset()
    {
        let config = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.flags, Flags::STD);
    }

    #[test]
    fn test_values_applied()
    {
        let config = LoggerConfig::from_lookup(lookup(&[
            (ENV_LEVEL, "Debug"),
            (ENV_PREFIX, "svc "),
            (ENV_FLAGS, "time,utc"),
            (ENV_OUTPUT, "-"),
        ]))
        .unwrap();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.prefix, "svc ");
        assert_eq!(config.flags, Flags::TIME | Flags::UTC);
        assert_eq!(config.destination, Destination::Stdout);
    }

    #[test]
    fn test_invalid_values_are_errors()
    {
        assert!(matches!(
            LoggerConfig::from_lookup(lookup(&[(ENV_LEVEL, "loud")])),
            Err(LevlogError::InvalidLevel(_))
        ));
        assert!(matches!(
            LoggerConfig::from_lookup(lookup(&[(ENV_FLAGS, "date,sparkles")])),
            Err(LevlogError::InvalidFlag(_))
        ));
        assert!(matches!(
            LoggerConfig::from_lookup(lookup(&[(ENV_OUTPUT, "  ")])),
            Err(LevlogError::InvalidDestination(_))
        ));
    }

    #[test]
    fn test_destination_parse()
    {
        assert_eq!(Destination::parse("STDERR").unwrap(), Destination::Stderr);
        assert_eq!(Destination::parse("stdout").unwrap(), Destination::Stdout);
        assert_eq!(
            Destination::parse("/var/log/app.log").unwrap(),
            Destination::File(PathBuf::from("/var/log/app.log"))
        );
        assert_eq!(Destination::parse(" stdout\n").unwrap(), Destination::Stdout);
        assert_eq!(
            Destination::parse(" spaced name.log ").unwrap(),
            Destination::File(PathBuf::from(" spaced name.log "))
        );
    }

    #[test]
    fn test_build_appends_to_file()
    {
        let path = env::temp_dir().join(format!("levlog-config-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = LoggerConfig {
            flags: Flags::NONE,
            destination: Destination::File(path.clone()),
            ..LoggerConfig::default()
        };
        config.build().unwrap().info("first");
        config.build().unwrap().warn("second");

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "INFO first\nWARN second\n");
        std::fs::remove_file(&path).unwrap();
    }
}
