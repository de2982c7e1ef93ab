//! # Error Types
//!
//! Errors surfaced by the logging facade.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Suppressed messages are never errors. The abort-with-diagnostic family
//! (`Logger::panic*`) is not represented here either: it unwinds with the
//! rendered message as the panic payload.

use thiserror::Error;

/// Main error type for logger operations
///
/// ## Error Categories
///
/// 1. **Parse errors**: InvalidLevel, InvalidFlag, InvalidDestination
/// 2. **Sink errors**: Io (returned from [`crate::Logger::emit`] and friends)
#[derive(Error, Debug)]
pub enum LevlogError
{
    /// The string is not one of the six level names
    ///
    /// Level names are matched exactly and case-insensitively, so this is
    /// returned for aliases like `warning` as well as for empty input.
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    /// The string is not a known decoration flag name
    #[error("invalid log flag '{0}'")]
    InvalidFlag(String),

    /// The output destination could not be understood or opened
    #[error("invalid log destination '{0}'")]
    InvalidDestination(String),

    /// The sink failed to accept a line
    ///
    /// The logger does not retry; the error is passed through as-is.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, LevlogError>`
///
/// ```rust
/// use levlog_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LevlogError>;
