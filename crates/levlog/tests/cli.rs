//! End-to-end tests for the `levlog` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn levlog() -> Command
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_levlog"));
    for key in [
        "LEVLOG_LEVEL",
        "LEVLOG_PREFIX",
        "LEVLOG_FLAGS",
        "LEVLOG_OUTPUT",
        "LEVLOG_DIAG_FORMAT",
        "LEVLOG_DIAG_FILE",
        "RUST_LOG",
    ] {
        command.env_remove(key);
    }
    command
}

fn run(args: &[&str]) -> Output
{
    levlog().args(args).output().expect("failed to run levlog")
}

fn stdout(output: &Output) -> String
{
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_emit_admitted()
{
    let output = run(&["-o", "stdout", "-f", "none", "emit", "info", "hello", "world"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "INFO hello world\n");
}

#[test]
fn test_emit_suppressed_by_default_threshold()
{
    let output = run(&["-o", "stdout", "-f", "none", "emit", "debug", "hidden"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_emit_level_from_environment_and_override()
{
    let output = levlog()
        .env("LEVLOG_LEVEL", "debug")
        .env("LEVLOG_PREFIX", "job: ")
        .args(["-o", "-", "-f", "none", "emit", "DEBUG", "visible"])
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "job: DEBUG visible\n");

    let output = levlog()
        .env("LEVLOG_LEVEL", "debug")
        .args(["-l", "error", "-o", "-", "-f", "none", "emit", "warn", "hidden"])
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_emit_none_rejected()
{
    let output = run(&["-o", "stdout", "emit", "none", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_print_ignores_threshold()
{
    let output = run(&["-l", "none", "-o", "stdout", "-f", "none", "print", "plain", "text"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "plain text\n");
}

#[test]
fn test_fatal_exits_with_status_one()
{
    let output = run(&["-l", "none", "-o", "stdout", "-f", "none", "fatal", "fatal", "log", "message"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "FATAL fatal log message\n");
}

#[test]
fn test_pipe_emits_each_line()
{
    let mut child = levlog()
        .args(["-l", "warn", "-o", "stdout", "-f", "none", "pipe", "warn"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"first\nsecond\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "WARN first\nWARN second\n");
}

#[test]
fn test_check()
{
    let output = run(&["check", "wArN"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "WARN (rank 3)\n");

    let output = run(&["check", "bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid log level 'bogus'"));
}

#[test]
fn test_levels_marks_admitted()
{
    let output = run(&["-l", "warn", "levels"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Threshold: WARN\n    0 NONE\n  * 1 FATAL\n  * 2 ERROR\n  * 3 WARN\n    4 INFO\n    5 DEBUG\n"
    );
}

#[test]
fn test_invalid_environment_is_an_error()
{
    let output = levlog().env("LEVLOG_FLAGS", "sparkles").args(["levels"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid log flag 'sparkles'"));
}

#[test]
fn test_file_output_appends()
{
    let path = std::env::temp_dir().join(format!("levlog-cli-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let target = path.to_str().unwrap();

    run(&["-o", target, "-f", "none", "emit", "error", "one"]);
    run(&["-o", target, "-f", "none", "-p", "[x] ", "print", "two"]);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "ERROR one\n[x] two\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_pipe_survives_invalid_utf8()
{
    let mut child = levlog()
        .args(["-o", "stdout", "-f", "none", "pipe", "info"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"first\n\xff\xfe bad\r\nthird").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "INFO first\nINFO \u{FFFD}\u{FFFD} bad\nINFO third\n");
}

#[test]
fn test_fatal_flushes_diagnostics_file()
{
    let path = std::env::temp_dir().join(format!("levlog-diag-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let output = levlog()
        .env("LEVLOG_DIAG_FILE", &path)
        .args(["-v", "-o", "stdout", "-f", "none", "fatal", "boom"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "FATAL boom\n");
    let diagnostics = std::fs::read_to_string(&path).unwrap();
    assert!(diagnostics.contains("fatal message logged, exiting"));
    std::fs::remove_file(&path).unwrap();
}
