//! # Standard Logger
//!
//! A process-wide default logger for code that has no logger passed to it.
//!
//! Prefer constructing a [`Logger`] and passing it explicitly. When a global
//! is more convenient, [`std_logger`] provides one with this lifecycle:
//!
//! - constructed once, on first use: standard error, no prefix,
//!   [`Flags::STD`], threshold [`Level::Info`], production mode
//! - mutated only through explicit calls (`set_level`, or the
//!   [`Output`](crate::sink::Output) setters via `sink()`)
//! - never implicitly reset
//!
//! ## Example
//!
//! ```rust,no_run
//! use levlog_core::global::std_logger;
//! use levlog_core::Level;
//!
//! std_logger().set_level(Level::Debug);
//! std_logger().debug("verbose output enabled");
//! ```

use std::io;

use once_cell::sync::Lazy;

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;

static STD_LOGGER: Lazy<Logger> = Lazy::new(|| {
    tracing::debug!("standard logger initialized");
    Logger::builder()
        .writer(io::stderr())
        .prefix("")
        .flags(Flags::STD)
        .level(Level::Info)
        .build()
});

/// The process-wide standard logger
#[must_use]
pub fn std_logger() -> &'static Logger
{
    &STD_LOGGER
}
