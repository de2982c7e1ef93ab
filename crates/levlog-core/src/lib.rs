//! # levlog-core
//!
//! Leveled logging facade over an arbitrary byte sink.
//!
//! This crate provides:
//! - A closed, ordered set of severity levels (`NONE < FATAL < ERROR < WARN < INFO < DEBUG`)
//! - A [`Logger`] that filters messages against a runtime threshold and tags
//!   them with their level
//! - Unconditional (`print`/`log`), terminate-on-write (`fatal`) and
//!   abort-with-diagnostic (`panic`) escape hatches
//! - A decorating [`Output`](sink::Output) sink (prefix, date/time, caller file)
//!
//! Writes are synchronous: one call, one line, one sink write.
//!
//! ## Quick Start
//!
//! ```rust
//! use levlog_core::sink::SharedBuffer;
//! use levlog_core::{infof, Flags, Level, Logger};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone(), "", Flags::NONE);
//!
//! logger.set_level(Level::Debug);
//! infof!(logger, "{} workers started", 4);
//! logger.debug("queue empty");
//!
//! assert_eq!(buffer.lines(), vec!["INFO 4 workers started", "DEBUG queue empty"]);
//! ```
//!
//! ## Testing code that calls `fatal`
//!
//! Build the logger with `test_mode(true)`; `fatal` then writes its line and
//! returns instead of exiting the process.

pub mod builder;
pub mod compat;
pub mod config;
pub mod error;
pub mod flags;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod prelude;
pub mod render;
pub mod sink;

pub use builder::LoggerBuilder;
// Re-export commonly used types
pub use error::{LevlogError, Result};
pub use flags::Flags;
pub use level::Level;
pub use logger::Logger;
