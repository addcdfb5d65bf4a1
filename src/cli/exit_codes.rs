//! CLI Exit Codes
//!
//! Exit codes for scripted use of the command-line tool.

use std::process::ExitCode;

/// Exit code constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes;

impl ExitCodes {
    /// Success
    pub const SUCCESS: u8 = 0;

    /// General error
    pub const ERROR: u8 = 1;

    /// Invalid arguments (bad hex, bad bit string, bad number)
    pub const INVALID_ARGS: u8 = 2;

    /// Configuration error
    pub const CONFIG_ERROR: u8 = 8;

    /// Malformed frame
    pub const PROTOCOL_ERROR: u8 = 9;

    /// Checksum mismatch
    pub const VALIDATION_FAILED: u8 = 17;

    /// Internal error
    pub const INTERNAL_ERROR: u8 = 127;
}

/// CLI operation result
#[derive(Debug)]
pub enum CliResult {
    /// Success with optional message
    Success(Option<String>),

    /// Error with code and message
    Error(u8, String),
}

impl CliResult {
    /// Plain success
    pub fn success() -> Self {
        Self::Success(None)
    }

    /// Success carrying output
    pub fn success_with_message(msg: impl Into<String>) -> Self {
        Self::Success(Some(msg.into()))
    }

    /// Error with explicit code
    pub fn error(code: u8, msg: impl Into<String>) -> Self {
        Self::Error(code, msg.into())
    }

    /// Checksum did not match
    pub fn validation_failed(msg: impl Into<String>) -> Self {
        Self::Error(ExitCodes::VALIDATION_FAILED, msg.into())
    }

    /// Get exit code
    pub fn code(&self) -> u8 {
        match self {
            Self::Success(_) => ExitCodes::SUCCESS,
            Self::Error(code, _) => *code,
        }
    }

    /// Get message
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(Some(msg)) => Some(msg),
            Self::Error(_, msg) => Some(msg),
            _ => None,
        }
    }

    /// Convert to ExitCode
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Is success?
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<std::io::Error> for CliResult {
    fn from(err: std::io::Error) -> Self {
        Self::Error(ExitCodes::ERROR, err.to_string())
    }
}

impl From<crate::config::ConfigError> for CliResult {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Error(ExitCodes::CONFIG_ERROR, err.to_string())
    }
}

/// Exit code description
pub fn exit_code_description(code: u8) -> &'static str {
    match code {
        0 => "Success",
        1 => "General error",
        2 => "Invalid arguments",
        8 => "Configuration error",
        9 => "Malformed frame",
        17 => "Checksum mismatch",
        127 => "Internal error",
        _ => "Unknown error",
    }
}

/// Print exit code table
pub fn print_exit_codes() {
    println!("Exit Codes:");
    for code in [0, 1, 2, 8, 9, 17, 127] {
        println!("  {:>3}  {}", code, exit_code_description(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_result() {
        let success = CliResult::success();
        assert!(success.is_success());
        assert_eq!(success.code(), 0);

        let error = CliResult::validation_failed("CRC mismatch");
        assert!(!error.is_success());
        assert_eq!(error.code(), 17);
        assert_eq!(error.message(), Some("CRC mismatch"));
    }

    #[test]
    fn test_descriptions_cover_constants() {
        for code in [
            ExitCodes::SUCCESS,
            ExitCodes::ERROR,
            ExitCodes::INVALID_ARGS,
            ExitCodes::CONFIG_ERROR,
            ExitCodes::PROTOCOL_ERROR,
            ExitCodes::VALIDATION_FAILED,
            ExitCodes::INTERNAL_ERROR,
        ] {
            assert_ne!(exit_code_description(code), "Unknown error");
        }
    }

    #[test]
    fn test_from_config_error() {
        let result = CliResult::from(crate::config::ConfigError::NoConfigDir);
        assert_eq!(result.code(), ExitCodes::CONFIG_ERROR);
    }
}
