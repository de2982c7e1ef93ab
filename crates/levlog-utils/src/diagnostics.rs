//! # Diagnostics
//!
//! Internal diagnostics for the levlog crates, built on `tracing`.
//!
//! `levlog-core` reports its own events (logger construction, threshold
//! changes, sink failures, fatal exits) through `tracing` macros. Nothing is
//! printed unless a subscriber is installed; this module installs one.
//! Diagnostics always go to standard error (or a file), never to the stream a
//! logger writes to.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: filter directives (e.g. `RUST_LOG=levlog_core=trace`)
//! - `LEVLOG_DIAG_FORMAT`: `pretty` (default) or `json`
//! - `LEVLOG_DIAG_FILE`: optional path of a file receiving a copy of the diagnostics
//!
//! ## Example
//!
//! ```rust,no_run
//! use levlog_utils::init_diagnostics;
//!
//! // Keep the guard alive so buffered file output is flushed on exit.
//! let _guard = init_diagnostics().expect("Failed to initialize diagnostics");
//! tracing::debug!("diagnostics ready");
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use levlog_core::{Level, LevlogError};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the diagnostics format
pub const ENV_DIAG_FORMAT: &str = "LEVLOG_DIAG_FORMAT";
/// Environment variable naming an optional diagnostics file
pub const ENV_DIAG_FILE: &str = "LEVLOG_DIAG_FILE";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Diagnostics output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagnosticsFormat
{
    /// Pretty-printed, human-readable format (default)
    #[default]
    Pretty,
    /// JSON format, one object per event
    Json,
}

impl FromStr for DiagnosticsFormat
{
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(DiagnosticsFormat::Pretty),
            "json" | "prod" | "production" => Ok(DiagnosticsFormat::Json),
            _ => Err(DiagnosticsError::InvalidFormat(s.to_string())),
        }
    }
}

/// Map a logger threshold onto a `tracing` filter
///
/// `FATAL` has no `tracing` counterpart and shares `ERROR`; `NONE` disables
/// everything.
#[must_use]
pub fn level_filter(level: Level) -> LevelFilter
{
    match level {
        Level::None => LevelFilter::OFF,
        Level::Fatal | Level::Error => LevelFilter::ERROR,
        Level::Warn => LevelFilter::WARN,
        Level::Info => LevelFilter::INFO,
        Level::Debug => LevelFilter::DEBUG,
    }
}

/// Initialize diagnostics from the environment
///
/// Reads `RUST_LOG` (default: `warn`), `LEVLOG_DIAG_FORMAT` and
/// `LEVLOG_DIAG_FILE`. Returns the file writer's guard when a file is
/// configured; dropping it flushes and stops the background writer.
///
/// ## Errors
///
/// Returns an error if:
/// - A global subscriber is already installed
/// - `LEVLOG_DIAG_FORMAT` holds an unknown format
/// - The diagnostics file cannot be created
pub fn init_diagnostics() -> Result<Option<WorkerGuard>, DiagnosticsError>
{
    let format = match env::var(ENV_DIAG_FORMAT) {
        Ok(value) => value.parse()?,
        Err(_) => DiagnosticsFormat::Pretty,
    };
    let file = env::var(ENV_DIAG_FILE).ok().map(PathBuf::from);

    init_diagnostics_internal(format, file.as_deref(), || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LevelFilter::WARN.to_string()))
    })
}

/// Initialize diagnostics at an explicit threshold
///
/// The level takes precedence over `RUST_LOG`; `LEVLOG_DIAG_FILE` is still
/// honoured.
///
/// ## Example
///
/// ```rust,no_run
/// use levlog_core::Level;
/// use levlog_utils::{DiagnosticsFormat, init_diagnostics_with_level};
///
/// let _guard = init_diagnostics_with_level(Level::Debug, DiagnosticsFormat::Pretty)
///     .expect("Failed to initialize diagnostics");
/// ```
///
/// ## Errors
///
/// Returns an error if a subscriber is already installed or the diagnostics
/// file cannot be created.
pub fn init_diagnostics_with_level(
    level: Level,
    format: DiagnosticsFormat,
) -> Result<Option<WorkerGuard>, DiagnosticsError>
{
    let file = env::var(ENV_DIAG_FILE).ok().map(PathBuf::from);
    let filter = level_filter(level);
    init_diagnostics_internal(format, file.as_deref(), move || EnvFilter::new(filter.to_string()))
}

/// Internal initialization function
fn init_diagnostics_internal<F>(
    format: DiagnosticsFormat,
    file: Option<&Path>,
    make_filter: F,
) -> Result<Option<WorkerGuard>, DiagnosticsError>
where
    F: Fn() -> EnvFilter,
{
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(format, io::stderr, true, make_filter())];

    let guard = match file {
        Some(path) => {
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .ok_or_else(|| DiagnosticsError::InitializationFailed(format!("not a file path: {}", path.display())))?;
            std::fs::create_dir_all(directory)?;

            // rolling::never: one file, no rotation
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            layers.push(fmt_layer(format, non_blocking, false, make_filter()));
            Some(guard)
        }
        None => None,
    };

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| DiagnosticsError::InitializationFailed(e.to_string()))?;

    tracing::debug!(?format, file = ?file, "diagnostics initialized");
    Ok(guard)
}

fn fmt_layer<W>(format: DiagnosticsFormat, writer: W, ansi: bool, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        DiagnosticsFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        DiagnosticsFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    }
}

/// Diagnostics initialization error
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError
{
    /// Invalid diagnostics format
    #[error("Invalid diagnostics format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// Invalid level name
    #[error(transparent)]
    InvalidLevel(#[from] LevlogError),

    /// Failed to install the subscriber
    #[error("Failed to initialize diagnostics: {0}")]
    InitializationFailed(String),

    /// Diagnostics file error
    #[error("Diagnostics file error: {0}")]
    FileError(#[from] io::Error),
}
