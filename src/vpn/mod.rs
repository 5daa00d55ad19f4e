//! Tunnel dispatch.
//!
//! A [`Dispatcher`] turns a `(protocol, action)` pair typed by the user into
//! exactly one privileged command, runs it, and interprets its exit status.
//! Nothing is remembered between calls.

mod command;
mod runner;

use std::io::{self, Stdout, Write};

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::DispatchError;
use crate::state::{Action, Protocol};

pub use command::{command_for, Invocation};
pub use runner::{CommandRunner, SystemRunner};

/// Validates requests and runs the matching external command.
///
/// Progress and result lines go to `out`; diagnostics go through `tracing`.
pub struct Dispatcher<R, W = Stdout> {
    config: AppConfig,
    runner: R,
    out: W,
}

impl Dispatcher<SystemRunner, Stdout> {
    /// Dispatcher that spawns real processes and reports on stdout.
    #[must_use]
    pub fn system(config: AppConfig) -> Self {
        Self::new(config, SystemRunner, io::stdout())
    }
}

impl<R: CommandRunner, W: Write> Dispatcher<R, W> {
    #[must_use]
    pub fn new(config: AppConfig, runner: R, out: W) -> Self {
        Self {
            config,
            runner,
            out,
        }
    }

    /// Configuration this dispatcher was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consume the dispatcher, returning its runner and output sink.
    pub fn into_parts(self) -> (R, W) {
        (self.runner, self.out)
    }

    /// Start or stop a tunnel.
    ///
    /// `protocol` and `action` are matched case-insensitively. Every outcome,
    /// success or failure, is also written to the output sink as one line.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if either name is unknown, if a `start`
    /// finds no configuration file, or if the external command cannot be
    /// launched or exits unsuccessfully.
    pub fn execute(&mut self, protocol: &str, action: &str) -> Result<(), DispatchError> {
        let result = self.dispatch(protocol, action);
        if let Err(err) = &result {
            let _ = writeln!(self.out, "{err}");
        }
        result
    }

    fn dispatch(&mut self, protocol: &str, action: &str) -> Result<(), DispatchError> {
        let Some(protocol) = Protocol::parse(protocol) else {
            warn!(protocol, "unknown protocol");
            return Err(DispatchError::InvalidProtocol {
                given: protocol.to_string(),
            });
        };
        let Some(action) = Action::parse(action) else {
            warn!(%protocol, action, "unknown action");
            return Err(DispatchError::InvalidAction {
                protocol,
                given: action.to_string(),
            });
        };

        let _ = writeln!(self.out, "{} {protocol}...", action.progressive());

        // Only start needs the configuration; stop tears down whatever is running.
        if action == Action::Start {
            let path = self.config.paths.for_protocol(protocol);
            if !path.exists() {
                warn!(%protocol, path = %path.display(), "configuration file missing");
                return Err(DispatchError::ConfigMissing {
                    protocol,
                    path: path.to_path_buf(),
                });
            }
            debug!(%protocol, path = %path.display(), "configuration file present");
        }

        let invocation =
            command_for(protocol, action, &self.config.paths).elevated(&self.config.elevation);
        info!(%protocol, %action, command = %invocation, "running");

        let exit_code = self
            .runner
            .run(&invocation)
            .map_err(|source| DispatchError::Launch {
                protocol,
                action,
                program: invocation.program().to_string(),
                source,
            })?;

        match exit_code {
            Some(0) => {
                info!(%protocol, %action, "command succeeded");
                let _ = writeln!(self.out, "{protocol} {} successfully!", action.past());
                Ok(())
            }
            exit_code => {
                warn!(%protocol, %action, ?exit_code, "command failed");
                Err(DispatchError::ExternalCommandFailed {
                    protocol,
                    action,
                    command: invocation.to_string(),
                    exit_code,
                })
            }
        }
    }
}
