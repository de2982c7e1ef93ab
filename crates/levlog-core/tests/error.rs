//! Tests for error handling

use std::io;

use levlog_core::error::{LevlogError, Result};
use levlog_core::{Flags, Level};

#[test]
fn test_invalid_level_display()
{
    let error = LevlogError::InvalidLevel("bogus".to_string());
    let message = format!("{}", error);
    assert_eq!(message, "invalid log level 'bogus'");
}

#[test]
fn test_invalid_level_from_parse()
{
    let error = Level::parse("bogus").unwrap_err();
    assert!(matches!(error, LevlogError::InvalidLevel(ref name) if name == "bogus"));
    assert!(format!("{}", error).contains("bogus"));
}

#[test]
fn test_invalid_level_empty_string()
{
    let error = "".parse::<Level>().unwrap_err();
    assert!(matches!(error, LevlogError::InvalidLevel(ref name) if name.is_empty()));
}

#[test]
fn test_invalid_flag_display()
{
    let error = "date,glitter".parse::<Flags>().unwrap_err();
    let message = format!("{}", error);
    assert!(message.contains("invalid log flag"));
    assert!(message.contains("glitter"));
}

#[test]
fn test_io_error_conversion()
{
    let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let error: LevlogError = io_error.into();

    match error {
        LevlogError::Io(ref inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
        _ => panic!("Expected Io variant"),
    }
    assert!(format!("{}", error).contains("pipe closed"));
}

#[test]
fn test_result_type()
{
    // Test that Result type is properly aliased
    let _result: Result<()> = Ok(());
    let _error_result: Result<()> = Err(LevlogError::InvalidLevel(String::new()));
}
