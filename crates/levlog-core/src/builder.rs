//! # Logger Builder
//!
//! Builder pattern for configuring a logger before first use.
//!
//! Everything a [`Logger`] can be constructed with (writer, prefix,
//! decoration flags, initial threshold, test mode) can be set fluently here.
//! Unset fields fall back to the standard logger's settings: standard error,
//! no prefix, [`Flags::STD`], [`Level::Info`], production mode.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Output;

/// Builder for [`Logger<Output>`]
///
/// ## Example
///
/// ```rust
/// use levlog_core::sink::SharedBuffer;
/// use levlog_core::{Flags, Level, Logger};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .writer(buffer.clone())
///     .prefix("worker: ")
///     .flags(Flags::NONE)
///     .level(Level::Debug)
///     .test_mode(true)
///     .build();
///
/// logger.debug("ready");
/// assert_eq!(buffer.contents(), "worker: DEBUG ready\n");
/// ```
pub struct LoggerBuilder
{
    writer: Option<Box<dyn Write + Send>>,
    prefix: String,
    flags: Flags,
    level: Level,
    test_mode: bool,
}

impl fmt::Debug for LoggerBuilder
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("LoggerBuilder")
            .field("writer", &self.writer.is_some())
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("level", &self.level)
            .field("test_mode", &self.test_mode)
            .finish()
    }
}

impl Default for LoggerBuilder
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl LoggerBuilder
{
    /// Create a builder with the standard logger's settings
    #[must_use]
    pub fn new() -> Self
    {
        Self {
            writer: None,
            prefix: String::new(),
            flags: Flags::STD,
            level: Level::Info,
            test_mode: false,
        }
    }

    /// Destination for emitted lines (default: standard error)
    #[must_use]
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Destination for emitted lines, already boxed
    #[must_use]
    pub fn boxed_writer(mut self, writer: Box<dyn Write + Send>) -> Self
    {
        self.writer = Some(writer);
        self
    }

    /// Text placed in front of every line
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self
    {
        self.prefix = prefix.into();
        self
    }

    /// Header decorations
    #[must_use]
    pub fn flags(mut self, flags: Flags) -> Self
    {
        self.flags = flags;
        self
    }

    /// Initial threshold
    #[must_use]
    pub fn level(mut self, level: Level) -> Self
    {
        self.level = level;
        self
    }

    /// Return from terminate-on-write instead of exiting the process
    #[must_use]
    pub fn test_mode(mut self, enabled: bool) -> Self
    {
        self.test_mode = enabled;
        self
    }

    /// Build the logger
    #[must_use]
    pub fn build(self) -> Logger<Output>
    {
        let writer = self.writer.unwrap_or_else(|| Box::new(io::stderr()));
        let output = Output::new(writer, self.prefix, self.flags);
        Logger::from_sink(Arc::new(output))
            .with_level(self.level)
            .with_test_mode(self.test_mode)
    }
}
