//! CLI module for the B+ translator
//!
//! ## Commands
//!
//! - `translate <file>` - Translate to Python, write `output.py` (or `-o`), report diagnostics
//! - `check <file>` - Report diagnostics only
//! - `example [name]` - Print a bundled sample program
//! - `reference` - Print the language reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod reference;
pub mod samples;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::version::BPLUS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// ASCII art logo - embedded at compile time from assets/logo.txt
const LOGO: &str = include_str!("../../assets/logo.txt");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiagnosticFormat {
    /// Rendered with source context
    #[default]
    Human,
    /// One JSON array
    Json,
}

/// The B+ to Python translator
#[derive(Parser, Debug)]
#[command(name = "bplus")]
#[command(version = BPLUS_VERSION)]
#[command(about = "Translate B+ pseudocode into Python", long_about = None)]
#[command(before_help = LOGO)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a B+ file to Python
    Translate {
        /// Source file to translate
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output file (default: output.py, unless --stdout is given alone)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Print the translation to stdout
        #[arg(long)]
        stdout: bool,
        /// Exit with failure if any line was dropped or left unbalanced
        #[arg(long)]
        strict: bool,
        /// Diagnostic output format
        #[arg(long, value_enum, default_value_t)]
        format: DiagnosticFormat,
    },

    /// Report diagnostics without writing any output
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Diagnostic output format
        #[arg(long, value_enum, default_value_t)]
        format: DiagnosticFormat,
    },

    /// Print a bundled sample program (lists samples when no name is given)
    Example {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Print the B+ language reference
    Reference,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    if env::args().len() == 1 || env::args().any(|a| a == "--version" || a == "-V") {
        print_logo();
    }

    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Translate {
            file,
            output,
            stdout,
            strict,
            format,
        }) => commands::translate_file(&file, output.as_deref(), stdout, strict, format),
        Some(Command::Check { file, format }) => commands::check_file(&file, format),
        Some(Command::Example { name }) => commands::print_example(name.as_deref()),
        Some(Command::Reference) => {
            print!("{}", reference::render_reference());
            Ok(ExitCode::SUCCESS)
        }
        // No command - show help
        None => Err(CliError::new("run `bplus --help` for usage", ExitCode::FAILURE)),
    }
}

/// Print colored logo to stderr
fn print_logo() {
    let blue = "\x1b[1;34m";
    let dim = "\x1b[2;37m";
    let reset = "\x1b[0m";

    for line in LOGO.lines() {
        let mut colored_line = String::new();
        for ch in line.chars() {
            colored_line.push_str(if ch == '█' { blue } else { dim });
            colored_line.push(ch);
        }
        eprintln!("{}{}", colored_line, reset);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_translate_defaults() {
        let cli = Cli::try_parse_from(["bplus", "translate", "prog.bp"]).unwrap();
        if let Some(Command::Translate {
            file,
            output,
            stdout,
            strict,
            format,
        }) = cli.command
        {
            assert_eq!(file, PathBuf::from("prog.bp"));
            assert!(output.is_none());
            assert!(!stdout);
            assert!(!strict);
            assert_eq!(format, DiagnosticFormat::Human);
        } else {
            panic!("Expected Translate command");
        }
    }

    #[test]
    fn test_cli_parse_translate_flags() {
        let cli = Cli::try_parse_from([
            "bplus", "translate", "prog.bp", "-o", "out.py", "--stdout", "--strict", "--format", "json",
        ])
        .unwrap();
        if let Some(Command::Translate {
            output,
            stdout,
            strict,
            format,
            ..
        }) = cli.command
        {
            assert_eq!(output, Some(PathBuf::from("out.py")));
            assert!(stdout);
            assert!(strict);
            assert_eq!(format, DiagnosticFormat::Json);
        } else {
            panic!("Expected Translate command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["bplus", "check", "prog.bp"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { .. })));
    }

    #[test]
    fn test_cli_parse_example() {
        let cli = Cli::try_parse_from(["bplus", "example", "fibonacci"]).unwrap();
        if let Some(Command::Example { name }) = cli.command {
            assert_eq!(name.as_deref(), Some("fibonacci"));
        } else {
            panic!("Expected Example command");
        }

        let cli = Cli::try_parse_from(["bplus", "example"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Example { name: None })));
    }

    #[test]
    fn test_cli_parse_reference() {
        let cli = Cli::try_parse_from(["bplus", "reference"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Reference)));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["bplus", "check", "prog.bp", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_no_command_is_failure() {
        let err = execute(Cli { command: None }).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
