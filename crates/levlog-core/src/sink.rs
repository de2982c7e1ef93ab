//! # Sinks
//!
//! The byte destination a [`Logger`](crate::Logger) writes to.
//!
//! The logger only knows the narrow [`LineSink`] trait: "accept one finished
//! line". Everything about *where* the bytes go and *how* the line is
//! decorated lives on the sink side:
//!
//! - [`Output`] wraps any `io::Write`, applies the prefix and the
//!   [`Flags`] header, and serializes concurrent writers with a lock
//! - [`SharedBuffer`] is a cloneable in-memory writer for tests and capture
//!
//! ## Why a trait?
//!
//! The logger core stays independent of any concrete writer, so sinks can be
//! shared between loggers, swapped, or replaced by a recording double in tests.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDateTime, Utc};

use crate::flags::Flags;

/// Destination for finished log lines
///
/// One call is one logical line. Implementations must make each call atomic
/// with respect to other calls on the same sink: the bytes of two lines never
/// interleave.
pub trait LineSink: Send + Sync
{
    /// Write one line
    ///
    /// `line` is the rendered message including any level tag. It may or may
    /// not end with `'\n'`; sinks that terminate lines add the newline only
    /// when it is missing. `caller` is the source location of the logging
    /// call, for sinks that decorate with file references.
    ///
    /// ## Errors
    ///
    /// Any I/O error from the underlying destination. Callers do not retry.
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()>;
}

impl<T: LineSink + ?Sized> LineSink for Arc<T>
{
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()>
    {
        (**self).write_line(line, caller)
    }
}

impl<T: LineSink + ?Sized> LineSink for Box<T>
{
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()>
    {
        (**self).write_line(line, caller)
    }
}

/// Decorating writer
///
/// `Output` owns a boxed `io::Write` plus the line prefix and decoration
/// flags. Each line is assembled in a scratch buffer and handed to the writer
/// with a single `write_all` while the internal lock is held, so loggers that
/// share an `Output` never split each other's lines.
///
/// ## Example
///
/// ```rust
/// use levlog_core::sink::{LineSink, Output, SharedBuffer};
/// use levlog_core::Flags;
///
/// let buffer = SharedBuffer::new();
/// let output = Output::new(buffer.clone(), "app: ", Flags::NONE);
/// output.write_line("hello", std::panic::Location::caller())?;
/// assert_eq!(buffer.contents(), "app: hello\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Output
{
    state: Mutex<OutputState>,
}

struct OutputState
{
    writer: Box<dyn Write + Send>,
    prefix: String,
    flags: Flags,
    scratch: Vec<u8>,
}

impl Output
{
    /// Wrap `writer` with the given prefix and flags
    pub fn new<W>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            state: Mutex::new(OutputState {
                writer: Box::new(writer),
                prefix: prefix.into(),
                flags,
                scratch: Vec::with_capacity(128),
            }),
        }
    }

    /// Standard error with no prefix and [`Flags::STD`]
    #[must_use]
    pub fn stderr() -> Self
    {
        Self::new(io::stderr(), "", Flags::STD)
    }

    /// Current prefix
    #[must_use]
    pub fn prefix(&self) -> String
    {
        self.lock().prefix.clone()
    }

    /// Replace the prefix for subsequent lines
    pub fn set_prefix(&self, prefix: impl Into<String>)
    {
        self.lock().prefix = prefix.into();
    }

    /// Current decoration flags
    #[must_use]
    pub fn flags(&self) -> Flags
    {
        self.lock().flags
    }

    /// Replace the decoration flags for subsequent lines
    pub fn set_flags(&self, flags: Flags)
    {
        self.lock().flags = flags;
    }

    /// Redirect subsequent lines to `writer`
    ///
    /// The previous writer is dropped once the swap is done.
    pub fn set_writer<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        let previous = std::mem::replace(&mut self.lock().writer, Box::new(writer));
        drop(previous);
    }

    // A panic while the lock is held (e.g. a panicking writer) must not
    // disable logging for every other thread.
    fn lock(&self) -> MutexGuard<'_, OutputState>
    {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LineSink for Output
{
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()>
    {
        let mut state = self.lock();
        let now = timestamp(state.flags);

        let OutputState {
            writer,
            prefix,
            flags,
            scratch,
        } = &mut *state;

        scratch.clear();
        format_line(scratch, prefix, *flags, now, caller, line)?;
        writer.write_all(&scratch[..])?;
        writer.flush()
    }
}

impl fmt::Debug for Output
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let state = self.lock();
        f.debug_struct("Output")
            .field("prefix", &state.prefix)
            .field("flags", &state.flags)
            .finish_non_exhaustive()
    }
}

fn timestamp(flags: Flags) -> Option<NaiveDateTime>
{
    if !flags.contains(Flags::DATE) && !flags.wants_time() {
        return None;
    }
    if flags.contains(Flags::UTC) {
        Some(Utc::now().naive_utc())
    } else {
        Some(Local::now().naive_local())
    }
}

/// Assemble `[prefix][header][prefix if MSG_PREFIX]line\n` into `buf`
pub(crate) fn format_line(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    now: Option<NaiveDateTime>,
    caller: &Location<'_>,
    line: &str,
) -> io::Result<()>
{
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    if let Some(now) = now {
        if flags.contains(Flags::DATE) {
            write!(buf, "{} ", now.format("%Y/%m/%d"))?;
        }
        if flags.contains(Flags::MICROSECONDS) {
            write!(buf, "{} ", now.format("%H:%M:%S%.6f"))?;
        } else if flags.contains(Flags::TIME) {
            write!(buf, "{} ", now.format("%H:%M:%S"))?;
        }
    }

    if flags.wants_file() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(caller.file())
        } else {
            caller.file()
        };
        write!(buf, "{file}:{}: ", caller.line())?;
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    buf.extend_from_slice(line.as_bytes());
    if !line.ends_with('\n') {
        buf.push(b'\n');
    }
    Ok(())
}

fn short_file(file: &str) -> &str
{
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Cloneable in-memory writer
///
/// All clones share one buffer, so a test can hand one clone to an
/// [`Output`] and inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer
{
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer
{
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    #[must_use]
    pub fn contents(&self) -> String
    {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written lines without their terminators
    #[must_use]
    pub fn lines(&self) -> Vec<String>
    {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self)
    {
        self.lock().clear();
    }

    /// Number of bytes written
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.lock().len()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>>
    {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedBuffer
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()>
    {
        Ok(())
    }
}
