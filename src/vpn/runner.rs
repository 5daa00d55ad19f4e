//! Process execution for dispatched commands.

use std::io;
use std::process::Command;

use tracing::debug;

use super::command::Invocation;

/// Runs an [`Invocation`] to completion.
///
/// Implementations block until the child exits and report `Some(code)` for
/// a normal exit or `None` when the child was terminated by a signal.
pub trait CommandRunner {
    /// Run the command, inheriting the caller's standard streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the process could not be spawned or waited on.
    fn run(&mut self, invocation: &Invocation) -> io::Result<Option<i32>>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<Option<i32>> {
        debug!(program = invocation.program(), args = ?invocation.args(), "spawning");
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .status()?;
        debug!(%status, "child exited");
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(words: &[&str]) -> Invocation {
        Invocation::new(words[0], words[1..].iter().copied())
    }

    #[test]
    fn test_system_runner_reports_exit_codes() {
        let mut runner = SystemRunner;
        assert_eq!(runner.run(&invocation(&["true"])).unwrap(), Some(0));
        assert_eq!(runner.run(&invocation(&["false"])).unwrap(), Some(1));
        assert_eq!(runner.run(&invocation(&["sh", "-c", "exit 7"])).unwrap(), Some(7));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let mut runner = SystemRunner;
        let err = runner
            .run(&invocation(&["vpnctl-definitely-not-installed"]))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
