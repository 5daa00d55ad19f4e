//! Error types for tunnel dispatch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants;
use crate::state::{Action, Protocol};

/// Every way a single dispatch can fail.
///
/// The `Display` output of each variant is the line shown to the user.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The protocol is not one of `wireguard`, `openvpn` or `ikev2`.
    #[error("{}", constants::ERR_INVALID_PROTOCOL)]
    InvalidProtocol { given: String },

    /// The action is not `start` or `stop`.
    #[error("Invalid action for {}", invalid_action_subject(*.protocol))]
    InvalidAction { protocol: Protocol, given: String },

    /// `start` was requested but the protocol's configuration file is absent.
    #[error("{} config not found!", .protocol.name())]
    ConfigMissing { protocol: Protocol, path: PathBuf },

    /// The external command ran and reported failure.
    #[error(
        "Error {} {protocol}: command `{command}` {}",
        .action.progressive().to_lowercase(),
        describe_exit(*.exit_code)
    )]
    ExternalCommandFailed {
        protocol: Protocol,
        action: Action,
        command: String,
        /// `None` when the child was terminated by a signal.
        exit_code: Option<i32>,
    },

    /// The external command could not be spawned at all.
    #[error(
        "Error {} {protocol}: failed to launch `{program}`: {source}",
        .action.progressive().to_lowercase()
    )]
    Launch {
        protocol: Protocol,
        action: Action,
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Subject of the invalid-action line. `WireGuard` keeps its "VPN" suffix
/// here while `IKEv2` drops it, matching the long-standing wording.
fn invalid_action_subject(protocol: Protocol) -> &'static str {
    match protocol {
        Protocol::WireGuard => "WireGuard VPN",
        Protocol::OpenVPN | Protocol::IKEv2 => protocol.name(),
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
