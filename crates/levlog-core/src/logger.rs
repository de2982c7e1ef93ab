//! # Logger
//!
//! The level-filtering and dispatch pipeline.
//!
//! Every write goes through one of four paths:
//!
//! | Path                   | Filtered | Tag      | Afterwards                 |
//! |------------------------|----------|----------|----------------------------|
//! | leveled (`info`, ...)  | yes      | level    | returns                    |
//! | unconditional (`print`)| no       | none     | returns                    |
//! | terminate (`fatal`)    | no       | `FATAL`  | `process::exit(1)`         |
//! | abort (`panic`)        | no       | `PANIC`  | unwinds with the message   |
//!
//! A leveled message at `level` is written iff `threshold.rank() >= level.rank()`.
//! The logger renders `<TAG> <message>` and hands it to its [`LineSink`]; the
//! sink owns prefixing, decorations and line termination.
//!
//! ## Call shapes
//!
//! Each family comes in four shapes:
//!
//! - `info(value)`: one `Display` value
//! - `info_fmt(format_args!(..))`: a bound format template (see [`infof!`](crate::infof))
//! - `info_values(&[..])`: values joined by single spaces
//! - `info_ln(&[..])`: values joined by single spaces, plus a newline
//!
//! ## Example
//!
//! ```rust
//! use levlog_core::sink::SharedBuffer;
//! use levlog_core::{Flags, Level, Logger};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone(), "", Flags::NONE).with_level(Level::Warn);
//!
//! logger.info("not written");
//! logger.warn_values(&[&"disk", &93, &"percent full"]);
//! assert_eq!(buffer.contents(), "WARN disk 93 percent full\n");
//! ```

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::builder::LoggerBuilder;
use crate::error::Result;
use crate::flags::Flags;
use crate::level::Level;
use crate::render::Message;
use crate::sink::{LineSink, Output};

/// Tag written in front of abort-with-diagnostic messages
pub const PANIC_TAG: &str = "PANIC";

/// Exit status used by the terminate-on-write family
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger over a [`LineSink`]
///
/// The threshold is the only mutable state. It is stored atomically, so
/// `set_level` takes `&self` and a logger can be shared between threads
/// (e.g. behind an `Arc`) while its level is changed.
///
/// `S` defaults to [`Output`]; any [`LineSink`] works, including
/// `dyn LineSink`.
pub struct Logger<S: LineSink + ?Sized = Output>
{
    threshold: AtomicU8,
    test_mode: bool,
    sink: Arc<S>,
}

impl Logger<Output>
{
    /// Create a logger writing to `writer`
    ///
    /// `prefix` starts every line (or precedes the message with
    /// [`Flags::MSG_PREFIX`]); `flags` selects the header decorations. The
    /// threshold starts at [`Level::Info`].
    pub fn new<W>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_sink(Arc::new(Output::new(writer, prefix, flags)))
    }

    /// Start configuring a logger
    #[must_use]
    pub fn builder() -> LoggerBuilder
    {
        LoggerBuilder::new()
    }
}

impl<S: LineSink + ?Sized> Logger<S>
{
    /// Create a logger over an existing, possibly shared, sink
    pub fn from_sink(sink: Arc<S>) -> Self
    {
        tracing::debug!(level = %Level::Info, "logger created");
        Self {
            threshold: AtomicU8::new(Level::Info.rank()),
            test_mode: false,
            sink,
        }
    }

    /// The sink this logger writes to
    #[must_use]
    pub fn sink(&self) -> &Arc<S>
    {
        &self.sink
    }

    /// Current threshold
    #[must_use]
    pub fn level(&self) -> Level
    {
        // Only valid ranks are ever stored.
        Level::from_rank(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Change the threshold for all subsequent calls
    pub fn set_level(&self, level: Level)
    {
        let previous = self.threshold.swap(level.rank(), Ordering::Relaxed);
        tracing::trace!(from = previous, to = level.rank(), "logger threshold changed");
    }

    /// Fluent variant of [`Logger::set_level`]
    #[must_use]
    pub fn with_level(self, level: Level) -> Self
    {
        self.set_level(level);
        self
    }

    /// Keep control after terminate-on-write instead of exiting
    #[must_use]
    pub fn with_test_mode(mut self, enabled: bool) -> Self
    {
        self.test_mode = enabled;
        self
    }

    /// Whether terminate-on-write returns instead of exiting
    #[must_use]
    pub fn is_test_mode(&self) -> bool
    {
        self.test_mode
    }

    /// Whether a leveled write at `level` would be emitted right now
    ///
    /// Always `false` for [`Level::None`], which never tags a message.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool
    {
        level != Level::None && self.level().admits(level)
    }

    /// Leveled write of a bound format template
    ///
    /// Returns `Ok(true)` if the line was written, `Ok(false)` if the
    /// threshold suppressed it. Emitting at [`Level::None`] never writes.
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`](crate::LevlogError::Io) if the sink rejects the line.
    #[track_caller]
    pub fn emit(&self, level: Level, args: fmt::Arguments<'_>) -> Result<bool>
    {
        self.dispatch(level, Message::Args(args))
    }

    /// Leveled write of space-joined values
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`](crate::LevlogError::Io) if the sink rejects the line.
    #[track_caller]
    pub fn emit_values(&self, level: Level, values: &[&dyn Display]) -> Result<bool>
    {
        self.dispatch(level, Message::Values(values))
    }

    /// Leveled write of space-joined values plus newline
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`](crate::LevlogError::Io) if the sink rejects the line.
    #[track_caller]
    pub fn emit_ln(&self, level: Level, values: &[&dyn Display]) -> Result<bool>
    {
        self.dispatch(level, Message::Line(values))
    }

    /// Unconditional write of a bound format template, no level tag
    ///
    /// ## Errors
    ///
    /// [`LevlogError::Io`](crate::LevlogError::Io) if the sink rejects the line.
    #[track_caller]
    pub fn write(&self, args: fmt::Arguments<'_>) -> Result<()>
    {
        self.write_untagged(&Message::Args(args))?;
        Ok(())
    }

    #[track_caller]
    fn dispatch(&self, level: Level, message: Message<'_>) -> Result<bool>
    {
        if !self.is_enabled(level) {
            return Ok(false);
        }
        self.write_tagged(level.as_str(), &message)?;
        Ok(true)
    }

    #[track_caller]
    fn leveled(&self, level: Level, message: Message<'_>)
    {
        if let Err(error) = self.dispatch(level, message) {
            tracing::error!(%error, %level, "failed to write log line");
        }
    }

    #[track_caller]
    fn unleveled(&self, message: Message<'_>)
    {
        if let Err(error) = self.write_untagged(&message) {
            tracing::error!(%error, "failed to write log line");
        }
    }

    #[track_caller]
    fn terminate(&self, message: Message<'_>)
    {
        if let Err(error) = self.write_tagged(Level::Fatal.as_str(), &message) {
            tracing::error!(%error, "failed to write fatal log line");
        }
        if self.test_mode {
            return;
        }
        tracing::debug!(code = FATAL_EXIT_CODE, "fatal message logged, exiting");
        process::exit(FATAL_EXIT_CODE);
    }

    #[track_caller]
    fn abort(&self, message: Message<'_>) -> !
    {
        let rendered = message.to_string();
        let line = format!("{PANIC_TAG} {rendered}");
        if let Err(error) = self.sink.write_line(&line, Location::caller()) {
            tracing::error!(%error, "failed to write panic log line");
        }
        std::panic::panic_any(rendered)
    }

    #[track_caller]
    fn write_tagged(&self, tag: &str, message: &Message<'_>) -> io::Result<()>
    {
        let line = format!("{tag} {message}");
        self.sink.write_line(&line, Location::caller())
    }

    #[track_caller]
    fn write_untagged(&self, message: &Message<'_>) -> io::Result<()>
    {
        let line = message.to_string();
        self.sink.write_line(&line, Location::caller())
    }
}

// Four call shapes for one family, all funnelled into `$sink`.
macro_rules! family {
    ($doc:literal, $sink:ident $(, $level:expr)? => $plain:ident, $fmt:ident, $values:ident, $ln:ident $(-> $ret:ty)?) => {
        #[doc = concat!($doc, ": one value")]
        #[track_caller]
        pub fn $plain(&self, message: impl Display) $(-> $ret)?
        {
            self.$sink($($level,)? Message::Args(format_args!("{message}")))
        }

        #[doc = concat!($doc, ": bound format template")]
        #[track_caller]
        pub fn $fmt(&self, args: fmt::Arguments<'_>) $(-> $ret)?
        {
            self.$sink($($level,)? Message::Args(args))
        }

        #[doc = concat!($doc, ": values joined by single spaces")]
        #[track_caller]
        pub fn $values(&self, values: &[&dyn Display]) $(-> $ret)?
        {
            self.$sink($($level,)? Message::Values(values))
        }

        #[doc = concat!($doc, ": values joined by single spaces, plus newline")]
        #[track_caller]
        pub fn $ln(&self, values: &[&dyn Display]) $(-> $ret)?
        {
            self.$sink($($level,)? Message::Line(values))
        }
    };
}

impl<S: LineSink + ?Sized> Logger<S>
{
    family!("Leveled write at DEBUG", leveled, Level::Debug => debug, debug_fmt, debug_values, debug_ln);
    family!("Leveled write at INFO", leveled, Level::Info => info, info_fmt, info_values, info_ln);
    family!("Leveled write at WARN", leveled, Level::Warn => warn, warn_fmt, warn_values, warn_ln);
    family!("Leveled write at ERROR", leveled, Level::Error => error, error_fmt, error_values, error_ln);

    family!("Unconditional write without a level tag", unleveled => print, print_fmt, print_values, print_ln);

    family!(
        "Write `FATAL <message>` regardless of threshold, then exit with status 1 unless in test mode",
        terminate => fatal, fatal_fmt, fatal_values, fatal_ln
    );

    family!(
        "Write `PANIC <message>` regardless of threshold, then panic with the rendered message as payload",
        abort => panic, panic_fmt, panic_values, panic_ln -> !
    );

    /// Unleveled write for generic logging adapters
    ///
    /// Same as [`Logger::print_values`]: always written, no level tag.
    #[track_caller]
    pub fn log(&self, values: &[&dyn Display])
    {
        self.unleveled(Message::Values(values));
    }

    /// Formatted variant of [`Logger::log`]
    #[track_caller]
    pub fn log_fmt(&self, args: fmt::Arguments<'_>)
    {
        self.unleveled(Message::Args(args));
    }
}

impl<S: LineSink + ?Sized> fmt::Debug for Logger<S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests
{
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder
    {
        lines: Mutex<Vec<String>>,
    }

    impl LineSink for Recorder
    {
        fn write_line(&self, line: &str, _caller: &'static Location<'static>) -> io::Result<()>
        {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl LineSink for Broken
    {
        fn write_line(&self, _line: &str, _caller: &'static Location<'static>) -> io::Result<()>
        {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn recorded() -> (Arc<Recorder>, Logger<Recorder>)
    {
        let sink = Arc::new(Recorder::default());
        (Arc::clone(&sink), Logger::from_sink(sink))
    }

    #[test]
    fn test_default_threshold_is_info()
    {
        let (_, logger) = recorded();
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.is_test_mode());
    }

    #[test]
    fn test_emit_reports_whether_written()
    {
        let (sink, logger) = recorded();
        assert!(logger.emit(Level::Info, format_args!("test")).unwrap());
        assert!(!logger.emit(Level::Debug, format_args!("hidden")).unwrap());
        assert!(!logger.emit(Level::None, format_args!("never")).unwrap());
        assert_eq!(*sink.lines.lock().unwrap(), vec!["INFO test"]);
    }

    #[test]
    fn test_shapes()
    {
        let (sink, logger) = recorded();
        logger.info(42);
        logger.info_fmt(format_args!("{}-{}", "a", "b"));
        logger.info_values(&[&"x", &1]);
        logger.info_ln(&[&"y", &2]);
        assert_eq!(*sink.lines.lock().unwrap(), vec!["INFO 42", "INFO a-b", "INFO x 1", "INFO y 2\n"]);
    }

    #[test]
    fn test_print_and_log_have_no_tag()
    {
        let (sink, logger) = recorded();
        logger.set_level(Level::None);
        logger.print("plain");
        logger.log(&[&"a", &"b"]);
        logger.log_fmt(format_args!("n={}", 3));
        logger.write(format_args!("w")).unwrap();
        assert_eq!(*sink.lines.lock().unwrap(), vec!["plain", "a b", "n=3", "w"]);
    }

    #[test]
    fn test_sink_error_is_returned_from_emit()
    {
        let logger = Logger::from_sink(Arc::new(Broken));
        assert!(matches!(
            logger.emit(Level::Error, format_args!("x")),
            Err(crate::LevlogError::Io(_))
        ));
        // Suppressed messages never touch the sink.
        assert!(!logger.emit(Level::Debug, format_args!("x")).unwrap());
        // Convenience methods swallow the error after reporting it.
        logger.error("x");
        logger.print("x");
    }

    #[test]
    fn test_dyn_sink()
    {
        let recorder = Arc::new(Recorder::default());
        let sink: Arc<dyn LineSink> = recorder.clone();
        let logger: Logger<dyn LineSink> = Logger::from_sink(sink).with_test_mode(true);
        logger.warn("w");
        logger.fatal("f");
        assert_eq!(*recorder.lines.lock().unwrap(), vec!["WARN w", "FATAL f"]);
    }
}
