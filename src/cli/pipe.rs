//! CLI Pipe Support
//!
//! Lets frame data arrive on stdin when it is not given as an argument.

use std::io::{self, Read};

/// Pipe mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeMode {
    /// No piping, interactive mode
    Interactive,
    /// Read from stdin
    StdinOnly,
    /// Write to stdout
    StdoutOnly,
    /// Full pipe mode (stdin -> process -> stdout)
    Full,
}

impl PipeMode {
    /// Detect pipe mode from environment
    pub fn detect() -> Self {
        let stdin_is_tty = atty::is(atty::Stream::Stdin);
        let stdout_is_tty = atty::is(atty::Stream::Stdout);

        match (stdin_is_tty, stdout_is_tty) {
            (true, true) => Self::Interactive,
            (false, true) => Self::StdinOnly,
            (true, false) => Self::StdoutOnly,
            (false, false) => Self::Full,
        }
    }

    /// Is receiving from stdin?
    pub fn has_stdin(&self) -> bool {
        matches!(self, Self::StdinOnly | Self::Full)
    }
}

/// Use `arg` if given, otherwise read all of stdin when it is piped.
///
/// Returns `Ok(None)` when there is neither an argument nor piped input.
pub fn input_or_stdin(arg: Option<&str>, mode: PipeMode) -> io::Result<Option<String>> {
    if let Some(text) = arg {
        return Ok(Some(text.to_string()));
    }
    if !mode.has_stdin() {
        return Ok(None);
    }

    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text)?;
    tracing::debug!(bytes = text.len(), "read input from stdin");
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let input = input_or_stdin(Some("01 03"), PipeMode::Full).unwrap();
        assert_eq!(input.as_deref(), Some("01 03"));
    }

    #[test]
    fn test_no_input_when_interactive() {
        assert_eq!(input_or_stdin(None, PipeMode::Interactive).unwrap(), None);
        assert_eq!(input_or_stdin(None, PipeMode::StdoutOnly).unwrap(), None);
    }

    #[test]
    fn test_pipe_modes() {
        assert!(PipeMode::StdinOnly.has_stdin());
        assert!(PipeMode::Full.has_stdin());
        assert!(!PipeMode::Interactive.has_stdin());
    }
}
