//! # levlog Utilities
//!
//! Shared helpers for the levlog workspace.
//!
//! This crate sets up the `tracing` subscriber that receives levlog's own
//! diagnostics, and maps logger thresholds onto `tracing` filters.

pub mod diagnostics;

// Re-export commonly used diagnostics functions for convenience
pub use diagnostics::{
    DiagnosticsError, DiagnosticsFormat, init_diagnostics, init_diagnostics_with_level, level_filter,
};
pub use tracing::{debug, error, info, trace, warn};
pub use tracing_appender::non_blocking::WorkerGuard;
