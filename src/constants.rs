//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout vpnctl, including
//! default configuration paths, the fixed tunnel names passed to the
//! underlying tools, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Default `WireGuard` interface configuration.
pub const WIREGUARD_CONFIG_PATH: &str = "/etc/wireguard/wg0.conf";
/// Default `OpenVPN` client configuration.
pub const OPENVPN_CONFIG_PATH: &str = "/etc/openvpn/client.ovpn";
/// Default strongSwan configuration used for `IKEv2`.
pub const IKEV2_CONFIG_PATH: &str = "/etc/ipsec.conf";
/// Name of the user configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that points at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "VPNCTL_CONFIG";

// === External Tools ===

/// Default privilege elevation prefix.
pub const DEFAULT_ELEVATION: &str = "sudo";
/// `WireGuard` interface brought up and down by `wg-quick`.
pub const WIREGUARD_INTERFACE: &str = "wg0";
/// strongSwan connection name for `IKEv2`.
pub const IKEV2_CONNECTION: &str = "ikev2";

// === Logging ===

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";
/// Filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Messages: CLI Output ===

pub const CLI_MSG_USAGE: &str = "Usage: vpnctl <protocol> <action>";
pub const CLI_MSG_USAGE_PROTOCOL: &str =
    "<protocol> should be one of: 'wireguard', 'openvpn', 'ikev2'";
pub const CLI_MSG_USAGE_ACTION: &str = "<action> should be either 'start' or 'stop'";

// === Error Messages ===

pub const ERR_INVALID_PROTOCOL: &str =
    "Invalid protocol. Choose from 'wireguard', 'openvpn', or 'ikev2'.";
pub const ERR_EMPTY_ELEVATION: &str = "elevation entries must not be empty";
