//! Start and stop `WireGuard`, `OpenVPN` and `IKEv2` tunnels.
//!
//! Each run maps one `(protocol, action)` pair to one privileged call of the
//! system tool that owns the tunnel (`wg-quick`, `openvpn`/`killall`,
//! `ipsec`) and reports the result.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod state;
pub mod vpn;

pub use config::{AppConfig, ConfigPaths, ConfigSource};
pub use error::DispatchError;
pub use state::{Action, Protocol};
pub use vpn::{CommandRunner, Dispatcher, Invocation, SystemRunner};
