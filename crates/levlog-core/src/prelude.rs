//! Common module for library exports

pub use crate::compat::{LeveledLogger, StdLogger, UnleveledLogger};
pub use crate::config::{Destination, LoggerConfig};
pub use crate::error::{LevlogError, Result};
pub use crate::flags::Flags;
pub use crate::global::std_logger;
pub use crate::level::Level;
pub use crate::logger::Logger;
pub use crate::sink::{LineSink, Output, SharedBuffer};
pub use crate::{debugf, errorf, fatalf, infof, logf, panicf, printf, warnf};
