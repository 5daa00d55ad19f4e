//! The (protocol, action) command table.

use std::fmt;

use crate::config::ConfigPaths;
use crate::constants;
use crate::state::{Action, Protocol};

/// A fully built command line: program followed by its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Prefix the command with the privilege elevation words.
    ///
    /// With an empty prefix the command runs as-is.
    #[must_use]
    pub fn elevated(self, prefix: &[String]) -> Self {
        let Some((first, rest)) = prefix.split_first() else {
            return self;
        };
        let mut args = Vec::with_capacity(rest.len() + 1 + self.args.len());
        args.extend(rest.iter().cloned());
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: first.clone(),
            args,
        }
    }

    /// Program to spawn.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The whole argument vector, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(&self.program)
            .chain(&self.args)
            .cloned()
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// Unprivileged command line for a protocol and action.
///
/// The tables are fixed apart from the `OpenVPN` config path, which comes
/// from `paths`. The `WireGuard` and `IKEv2` paths are only checked for
/// existence; `wg-quick` and `ipsec` always get the `wg0` interface and the
/// `ikev2` connection.
#[must_use]
pub fn command_for(protocol: Protocol, action: Action, paths: &ConfigPaths) -> Invocation {
    match (protocol, action) {
        (Protocol::WireGuard, Action::Start) => {
            Invocation::new("wg-quick", ["up", constants::WIREGUARD_INTERFACE])
        }
        (Protocol::WireGuard, Action::Stop) => {
            Invocation::new("wg-quick", ["down", constants::WIREGUARD_INTERFACE])
        }
        (Protocol::OpenVPN, Action::Start) => Invocation::new(
            "openvpn",
            ["--config".to_string(), paths.openvpn.to_string_lossy().into_owned()],
        ),
        (Protocol::OpenVPN, Action::Stop) => Invocation::new("killall", ["openvpn"]),
        (Protocol::IKEv2, Action::Start) => {
            Invocation::new("ipsec", ["up", constants::IKEV2_CONNECTION])
        }
        (Protocol::IKEv2, Action::Stop) => {
            Invocation::new("ipsec", ["down", constants::IKEV2_CONNECTION])
        }
    }
}
