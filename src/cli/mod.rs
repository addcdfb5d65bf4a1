//! CLI Module
//!
//! Provides command-line interface functionality including:
//! - Command implementations and report rendering
//! - Exit codes for automation
//! - Pipe support for stdin input

pub mod commands;
pub mod exit_codes;
pub mod pipe;

pub use commands::{CommandError, Report};
pub use exit_codes::{exit_code_description, print_exit_codes, CliResult, ExitCodes};
pub use pipe::{input_or_stdin, PipeMode};
