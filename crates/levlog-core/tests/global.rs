//! Tests for the process-wide standard logger
//!
//! Everything touching `std_logger()` lives in one test so the shared state
//! is never observed half-configured by another test thread.

use levlog_core::global::std_logger;
use levlog_core::sink::SharedBuffer;
use levlog_core::{Flags, Level};

#[test]
fn test_std_logger_lifecycle()
{
    let logger = std_logger();

    // Constructed with the standard settings.
    assert_eq!(logger.level(), Level::Info);
    assert_eq!(logger.sink().flags(), Flags::STD);
    assert_eq!(logger.sink().prefix(), "");
    assert!(!logger.is_test_mode());

    // Same instance on every call.
    assert!(std::ptr::eq(logger, std_logger()));

    let buffer = SharedBuffer::new();
    logger.sink().set_writer(buffer.clone());
    logger.sink().set_flags(Flags::NONE);

    logger.set_level(Level::Debug);
    logger.debug("test");
    assert_eq!(buffer.contents(), "DEBUG test\n");

    // Mutations persist until changed explicitly.
    buffer.clear();
    assert_eq!(std_logger().level(), Level::Debug);
    std_logger().set_level(Level::Warn);
    logger.info("test");
    assert!(buffer.is_empty());
    logger.warn("test");
    assert_eq!(buffer.contents(), "WARN test\n");

    logger.set_level(Level::Info);
    logger.sink().set_flags(Flags::STD);
}
