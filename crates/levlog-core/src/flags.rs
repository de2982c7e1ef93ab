//! Line decoration flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::{LevlogError, Result};

/// Bit-set of decorations applied by [`crate::sink::Output`]
///
/// The flags control the header written before each message:
///
/// ```text
/// [prefix]2009/01/23 01:23:23.123123 main.rs:23: [prefix with MSG_PREFIX]message
/// ```
///
/// `SHORT_FILE` wins over `LONG_FILE`, and `MICROSECONDS` implies `TIME`.
///
/// ## Example
///
/// ```rust
/// use levlog_core::Flags;
///
/// let flags = Flags::DATE | Flags::SHORT_FILE;
/// assert!(flags.contains(Flags::DATE));
/// assert!(!flags.contains(Flags::TIME));
/// assert_eq!("date,shortfile".parse::<Flags>()?, flags);
/// # Ok::<(), levlog_core::LevlogError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags
{
    /// No decorations
    pub const NONE: Self = Flags(0);
    /// Local date: `2009/01/23`
    pub const DATE: Self = Flags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: Self = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`
    pub const MICROSECONDS: Self = Flags(1 << 2);
    /// Full caller path and line: `/a/b/c/main.rs:23`
    pub const LONG_FILE: Self = Flags(1 << 3);
    /// Final path element and line: `main.rs:23`
    pub const SHORT_FILE: Self = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Self = Flags(1 << 5);
    /// Move the prefix from the start of the line to just before the message
    pub const MSG_PREFIX: Self = Flags(1 << 6);
    /// Initial values for the standard logger
    pub const STD: Self = Flags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Flags); 7] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
        ("msgprefix", Flags::MSG_PREFIX),
    ];

    /// Create flags from raw bits; unknown bits are kept but ignored
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self
    {
        Flags(bits)
    }

    /// Raw bit value
    #[must_use]
    pub const fn bits(self) -> u32
    {
        self.0
    }

    /// Whether every bit in `other` is set
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool
    {
        self.0 & other.0 == other.0
    }

    /// Whether no bits are set
    #[must_use]
    pub const fn is_empty(self) -> bool
    {
        self.0 == 0
    }

    /// Whether the header carries a time of day
    pub(crate) const fn wants_time(self) -> bool
    {
        self.0 & (Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// Whether the header carries a caller location
    pub(crate) const fn wants_file(self) -> bool
    {
        self.0 & (Self::SHORT_FILE.0 | Self::LONG_FILE.0) != 0
    }
}

impl BitOr for Flags
{
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Self::Output
    {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags
{
    fn bitor_assign(&mut self, rhs: Flags)
    {
        self.0 |= rhs.0;
    }
}

impl From<u32> for Flags
{
    fn from(bits: u32) -> Self
    {
        Flags(bits)
    }
}

impl From<Flags> for u32
{
    fn from(flags: Flags) -> Self
    {
        flags.0
    }
}

/// Comma-separated flag names, e.g. `date,time,shortfile`
///
/// `std` expands to `date,time` and `none` (or an empty string) yields no
/// flags. Names are case-insensitive; whitespace around names is ignored.
impl FromStr for Flags
{
    type Err = LevlogError;

    fn from_str(s: &str) -> Result<Self>
    {
        let mut flags = Flags::NONE;
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let lower = name.to_ascii_lowercase();
            match lower.as_str() {
                "std" => flags |= Flags::STD,
                "none" => {}
                _ => {
                    let (_, flag) = Flags::NAMED
                        .iter()
                        .find(|(known, _)| *known == lower)
                        .ok_or_else(|| LevlogError::InvalidFlag(name.to_string()))?;
                    flags |= *flag;
                }
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in Flags::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
