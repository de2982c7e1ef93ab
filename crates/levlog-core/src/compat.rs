//! # Compatibility Traits
//!
//! Capability sets for code that should not depend on [`Logger`] directly.
//!
//! - [`LeveledLogger`]: debug/info/warn/error writes, filtered by threshold
//!   (`warning`/`warning_fmt` are accepted as aliases of the WARN pair)
//! - [`UnleveledLogger`]: a single always-on `log` operation, the shape
//!   expected by generic logging adapters
//! - [`StdLogger`]: the fatal/panic/print families of a conventional
//!   standard logging utility
//!
//! All three are object-safe, so collaborators can hold `&dyn LeveledLogger`
//! and tests can hand them any implementation.
//!
//! ## Example
//!
//! ```rust
//! use levlog_core::compat::LeveledLogger;
//! use levlog_core::sink::SharedBuffer;
//! use levlog_core::{Flags, Logger};
//!
//! fn connect(log: &dyn LeveledLogger)
//! {
//!     log.info_fmt(format_args!("connecting to {}", "db:5432"));
//! }
//!
//! let buffer = SharedBuffer::new();
//! connect(&Logger::new(buffer.clone(), "", Flags::NONE));
//! assert_eq!(buffer.contents(), "INFO connecting to db:5432\n");
//! ```

use std::fmt::{self, Display};

use crate::logger::Logger;
use crate::sink::LineSink;

/// Leveled write operations
pub trait LeveledLogger
{
    /// Write at DEBUG
    fn debug(&self, message: &dyn Display);
    /// Formatted write at DEBUG
    fn debug_fmt(&self, args: fmt::Arguments<'_>);
    /// Write at INFO
    fn info(&self, message: &dyn Display);
    /// Formatted write at INFO
    fn info_fmt(&self, args: fmt::Arguments<'_>);
    /// Write at WARN
    fn warn(&self, message: &dyn Display);
    /// Formatted write at WARN
    fn warn_fmt(&self, args: fmt::Arguments<'_>);
    /// Alias of [`LeveledLogger::warn`] for adapters using the long name
    #[track_caller]
    fn warning(&self, message: &dyn Display)
    {
        self.warn(message);
    }
    /// Alias of [`LeveledLogger::warn_fmt`]
    #[track_caller]
    fn warning_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.warn_fmt(args);
    }
    /// Write at ERROR
    fn error(&self, message: &dyn Display);
    /// Formatted write at ERROR
    fn error_fmt(&self, args: fmt::Arguments<'_>);
}

/// Always-on write with no level
pub trait UnleveledLogger
{
    /// Write `values` joined by single spaces
    fn log(&self, values: &[&dyn Display]);
}

/// Terminate, abort and print families
pub trait StdLogger
{
    /// Write `FATAL <message>`, then exit
    fn fatal(&self, message: &dyn Display);
    /// Formatted [`StdLogger::fatal`]
    fn fatal_fmt(&self, args: fmt::Arguments<'_>);
    /// [`StdLogger::fatal`] with space-joined values plus newline
    fn fatal_ln(&self, values: &[&dyn Display]);
    /// Write `PANIC <message>`, then panic with the message
    fn panic(&self, message: &dyn Display) -> !;
    /// Formatted [`StdLogger::panic`]
    fn panic_fmt(&self, args: fmt::Arguments<'_>) -> !;
    /// [`StdLogger::panic`] with space-joined values plus newline
    fn panic_ln(&self, values: &[&dyn Display]) -> !;
    /// Write the message with no tag
    fn print(&self, message: &dyn Display);
    /// Formatted [`StdLogger::print`]
    fn print_fmt(&self, args: fmt::Arguments<'_>);
    /// [`StdLogger::print`] with space-joined values plus newline
    fn print_ln(&self, values: &[&dyn Display]);
}

impl<S: LineSink + ?Sized> LeveledLogger for Logger<S>
{
    #[track_caller]
    fn debug(&self, message: &dyn Display)
    {
        Logger::debug(self, message);
    }

    #[track_caller]
    fn debug_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::debug_fmt(self, args);
    }

    #[track_caller]
    fn info(&self, message: &dyn Display)
    {
        Logger::info(self, message);
    }

    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::info_fmt(self, args);
    }

    #[track_caller]
    fn warn(&self, message: &dyn Display)
    {
        Logger::warn(self, message);
    }

    #[track_caller]
    fn warn_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::warn_fmt(self, args);
    }

    #[track_caller]
    fn error(&self, message: &dyn Display)
    {
        Logger::error(self, message);
    }

    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::error_fmt(self, args);
    }
}

impl<S: LineSink + ?Sized> UnleveledLogger for Logger<S>
{
    #[track_caller]
    fn log(&self, values: &[&dyn Display])
    {
        Logger::log(self, values);
    }
}

impl<S: LineSink + ?Sized> StdLogger for Logger<S>
{
    #[track_caller]
    fn fatal(&self, message: &dyn Display)
    {
        Logger::fatal(self, message);
    }

    #[track_caller]
    fn fatal_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::fatal_fmt(self, args);
    }

    #[track_caller]
    fn fatal_ln(&self, values: &[&dyn Display])
    {
        Logger::fatal_ln(self, values);
    }

    #[track_caller]
    fn panic(&self, message: &dyn Display) -> !
    {
        Logger::panic(self, message)
    }

    #[track_caller]
    fn panic_fmt(&self, args: fmt::Arguments<'_>) -> !
    {
        Logger::panic_fmt(self, args)
    }

    #[track_caller]
    fn panic_ln(&self, values: &[&dyn Display]) -> !
    {
        Logger::panic_ln(self, values)
    }

    #[track_caller]
    fn print(&self, message: &dyn Display)
    {
        Logger::print(self, message);
    }

    #[track_caller]
    fn print_fmt(&self, args: fmt::Arguments<'_>)
    {
        Logger::print_fmt(self, args);
    }

    #[track_caller]
    fn print_ln(&self, values: &[&dyn Display])
    {
        Logger::print_ln(self, values);
    }
}
