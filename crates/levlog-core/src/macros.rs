//! Format-template shorthands.
//!
//! `infof!(logger, "{} of {}", done, total)` expands to
//! `logger.info_fmt(format_args!("{} of {}", done, total))`. Nothing is
//! rendered unless the logger admits the level.

/// Formatted leveled write at DEBUG
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted leveled write at INFO
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted leveled write at WARN
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted leveled write at ERROR
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted terminate-on-write
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted abort-with-diagnostic
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted unconditional write
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print_fmt(::std::format_args!($($arg)+))
    };
}

/// Formatted unleveled write for logging adapters
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_fmt(::std::format_args!($($arg)+))
    };
}
