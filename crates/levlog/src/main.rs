use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand};
use levlog_core::config::{Destination, LoggerConfig};
use levlog_core::logger::FATAL_EXIT_CODE;
use levlog_core::{Flags, Level, LevlogError, Logger};
use levlog_utils::{DiagnosticsFormat, debug, init_diagnostics, init_diagnostics_with_level};

/// Leveled logging from the shell.
#[derive(Parser, Debug)]
#[command(name = "levlog")]
#[command(version)]
#[command(about = "Write leveled, prefixed log lines from shell scripts", long_about = None)]
struct Cli
{
    /// Threshold: none, fatal, error, warn, info or debug (overrides LEVLOG_LEVEL)
    #[arg(short, long)]
    level: Option<Level>,
    /// Text placed in front of every line (overrides LEVLOG_PREFIX)
    #[arg(short, long)]
    prefix: Option<String>,
    /// Comma-separated decorations, e.g. date,time,shortfile (overrides LEVLOG_FLAGS)
    #[arg(short, long)]
    flags: Option<Flags>,
    /// stderr, stdout, - or a file path to append to (overrides LEVLOG_OUTPUT)
    #[arg(short, long)]
    output: Option<Destination>,
    /// Show levlog's own diagnostics at DEBUG
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Write a message at LEVEL if the threshold admits it
    Emit
    {
        /// Message level (fatal, error, warn, info or debug)
        level: Level,
        /// Message words, joined by single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Write a message without a level tag, regardless of the threshold
    Print
    {
        /// Message words, joined by single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Write a FATAL message regardless of the threshold, then exit with status 1
    Fatal
    {
        /// Message words, joined by single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Read standard input and write each line at LEVEL
    Pipe
    {
        /// Message level (fatal, error, warn, info or debug)
        level: Level,
    },
    /// List the levels and whether the threshold admits them
    Levels,
    /// Validate a level name
    Check
    {
        /// Name to parse
        name: String,
    },
}

fn main()
{
    let cli = Cli::parse();

    // Diagnostics go to stderr; RUST_LOG applies unless --verbose is given
    let diagnostics = if cli.verbose {
        init_diagnostics_with_level(Level::Debug, DiagnosticsFormat::Pretty)
    } else {
        init_diagnostics()
    };
    let guard = match diagnostics {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize diagnostics: {}", e);
            process::exit(1);
        }
    };

    let result = run_command(cli);
    // Flush the diagnostics file before any exit; process::exit skips destructors
    drop(guard);
    match result {
        Ok(Completion::Done) => {}
        Ok(Completion::Fatal) => process::exit(FATAL_EXIT_CODE),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// How a successfully run command wants the process to end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion
{
    Done,
    /// A FATAL line was written; exit with [`FATAL_EXIT_CODE`]
    Fatal,
}

fn run_command(cli: Cli) -> Result<Completion, Box<dyn Error>>
{
    let config = resolve_config(&cli)?;
    debug!(?config, "resolved logger configuration");

    match cli.command {
        Commands::Emit { level, words } => {
            let message_level = require_message_level(level)?;
            let logger = config.build()?;
            logger.emit_values(message_level, &as_display(&words))?;
            Ok(Completion::Done)
        }
        Commands::Print { words } => {
            let logger = config.build()?;
            logger.write(format_args!("{}", words.join(" ")))?;
            Ok(Completion::Done)
        }
        Commands::Fatal { words } => {
            // Test mode makes fatal return, so main can flush diagnostics before exiting
            let logger = config.build()?.with_test_mode(true);
            logger.fatal_values(&as_display(&words));
            debug!(code = FATAL_EXIT_CODE, "fatal message logged, exiting");
            Ok(Completion::Fatal)
        }
        Commands::Pipe { level } => {
            let message_level = require_message_level(level)?;
            let logger = config.build()?;
            pipe_lines(&logger, message_level, io::stdin().lock())?;
            Ok(Completion::Done)
        }
        Commands::Levels => {
            print_levels(config.level);
            Ok(Completion::Done)
        }
        Commands::Check { name } => {
            let level = Level::parse(&name)?;
            println!("{} (rank {})", level, level.rank());
            Ok(Completion::Done)
        }
    }
}

/// Environment first, then command-line overrides
fn resolve_config(cli: &Cli) -> Result<LoggerConfig, LevlogError>
{
    let mut config = LoggerConfig::from_env()?;
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(prefix) = &cli.prefix {
        config.prefix.clone_from(prefix);
    }
    if let Some(flags) = cli.flags {
        config.flags = flags;
    }
    if let Some(output) = &cli.output {
        config.destination = output.clone();
    }
    Ok(config)
}

fn require_message_level(level: Level) -> Result<Level, LevlogError>
{
    if level == Level::None {
        return Err(LevlogError::InvalidLevel(format!("{level} cannot tag a message")));
    }
    Ok(level)
}

fn as_display(words: &[String]) -> Vec<&dyn Display>
{
    words.iter().map(|word| word as &dyn Display).collect()
}

/// Emit every stdin line at `level`; invalid UTF-8 is replaced, not fatal
fn pipe_lines<R: BufRead>(logger: &Logger, level: Level, mut input: R) -> Result<(), Box<dyn Error>>
{
    let mut written = 0_usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if logger.emit(level, format_args!("{line}"))? {
            written += 1;
        }
    }
    debug!(written, %level, "stdin drained");
    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8]
{
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn print_levels(threshold: Level)
{
    println!("Threshold: {}", threshold);
    for level in Level::ALL {
        let marker = if level != Level::None && threshold.admits(level) { "*" } else { " " };
        println!("  {} {} {}", marker, level.rank(), level);
    }
}
