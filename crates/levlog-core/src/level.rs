//! # Severity Levels
//!
//! The closed, ordered set of severity levels used for filtering.
//!
//! Levels are ordered from least to most verbose:
//!
//! ```text
//! NONE < FATAL < ERROR < WARN < INFO < DEBUG
//! ```
//!
//! A logger admits a message when its threshold rank is greater than or equal
//! to the message's rank, so raising the threshold toward `DEBUG` lets more
//! messages through. `NONE` is only ever a threshold; it never tags a message.

use std::fmt;
use std::str::FromStr;

use crate::error::{LevlogError, Result};

/// Severity level
///
/// The discriminant is the level's rank. Ranks are dense and start at 0,
/// which lets the logger keep its threshold in a single atomic byte.
///
/// ## Example
///
/// ```rust
/// use levlog_core::Level;
///
/// assert!(Level::Debug > Level::Info);
/// assert_eq!(Level::Warn.rank(), 3);
/// assert_eq!(Level::parse("error")?, Level::Error);
/// # Ok::<(), levlog_core::LevlogError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level
{
    /// Suppress every leveled message
    None = 0,
    /// Unrecoverable failures; the least verbose message level
    Fatal = 1,
    /// Errors the program can continue past
    Error = 2,
    /// Potentially harmful situations
    Warn = 3,
    /// Progress messages (default threshold)
    #[default]
    Info = 4,
    /// Developer detail; the most verbose level
    Debug = 5,
}

impl Level
{
    /// Every level in rank order, `None` first.
    pub const ALL: [Level; 6] = [Level::None, Level::Fatal, Level::Error, Level::Warn, Level::Info, Level::Debug];

    /// Levels that may tag an emitted message.
    pub const MESSAGE_LEVELS: [Level; 5] = [Level::Fatal, Level::Error, Level::Warn, Level::Info, Level::Debug];

    /// Numeric rank used for threshold comparison
    #[must_use]
    pub const fn rank(self) -> u8
    {
        self as u8
    }

    /// Look up a level by rank, `None` (the Option) for ranks above `DEBUG`
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self>
    {
        match rank {
            0 => Some(Level::None),
            1 => Some(Level::Fatal),
            2 => Some(Level::Error),
            3 => Some(Level::Warn),
            4 => Some(Level::Info),
            5 => Some(Level::Debug),
            _ => None,
        }
    }

    /// Canonical uppercase display name
    #[must_use]
    pub const fn as_str(self) -> &'static str
    {
        match self {
            Level::None => "NONE",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Parse a level name
    ///
    /// Matching is exact and case-insensitive over the six canonical names.
    /// Prefixes, aliases (`warning`, `err`) and surrounding whitespace are not
    /// accepted.
    ///
    /// ## Errors
    ///
    /// Returns [`LevlogError::InvalidLevel`] for anything that is not a level
    /// name, including the empty string.
    pub fn parse(name: &str) -> Result<Self>
    {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LevlogError::InvalidLevel(name.to_string()))
    }

    /// Whether a logger at this threshold admits a message at `message`
    #[must_use]
    pub const fn admits(self, message: Level) -> bool
    {
        self.rank() >= message.rank()
    }
}

impl fmt::Display for Level
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.pad(self.as_str())
    }
}

impl FromStr for Level
{
    type Err = LevlogError;

    fn from_str(s: &str) -> Result<Self>
    {
        Level::parse(s)
    }
}

impl From<Level> for u8
{
    fn from(level: Level) -> Self
    {
        level.rank()
    }
}

impl TryFrom<u8> for Level
{
    type Error = LevlogError;

    fn try_from(rank: u8) -> Result<Self>
    {
        Level::from_rank(rank).ok_or_else(|| LevlogError::InvalidLevel(rank.to_string()))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_ranks_are_dense_from_zero()
    {
        for (index, level) in Level::ALL.iter().enumerate() {
            assert_eq!(usize::from(level.rank()), index);
            assert_eq!(Level::from_rank(level.rank()), Some(*level));
        }
        assert_eq!(Level::from_rank(6), None);
    }

    #[test]
    fn test_parse_is_case_insensitive()
    {
        assert_eq!(Level::parse("wArN").unwrap(), Level::Warn);
        assert_eq!(Level::parse("debug").unwrap(), Level::Debug);
        assert_eq!(Level::parse("FATAL").unwrap(), Level::Fatal);
        assert_eq!(Level::parse("None").unwrap(), Level::None);
    }

    #[test]
    fn test_parse_rejects_non_names()
    {
        for input in ["bogus", "", "warning", "inf", " info", "DEBUG\n"] {
            match Level::parse(input) {
                Err(LevlogError::InvalidLevel(name)) => assert_eq!(name, input),
                other => panic!("expected InvalidLevel for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_uses_canonical_name()
    {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(format!("{:<5}|", Level::Warn), "WARN |");
    }

    #[test]
    fn test_default_is_info()
    {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_admits()
    {
        assert!(Level::Debug.admits(Level::Fatal));
        assert!(Level::Warn.admits(Level::Warn));
        assert!(!Level::Warn.admits(Level::Info));
        assert!(!Level::None.admits(Level::Fatal));
    }
}
