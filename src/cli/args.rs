//! Command-line argument definitions.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::constants;

/// vpnctl - start and stop WireGuard, OpenVPN and IKEv2 tunnels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tunnel protocol: wireguard, openvpn or ikev2
    pub protocol: String,

    /// Action to perform: start or stop
    pub action: String,

    /// Configuration file overriding the built-in paths and elevation prefix
    #[arg(long, value_name = "PATH", env = constants::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Result of reading the command line.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are usable.
    Run(Args),
    /// Wrong argument count or unknown flag.
    Usage,
    /// `--help` or `--version`; clap renders and exits.
    Info(clap::Error),
}

impl Args {
    /// Parse arguments, separating usage errors from help/version requests.
    pub fn parse_from_env() -> Parsed {
        Self::classify(Self::try_parse())
    }

    /// Same as [`Args::parse_from_env`] for an explicit argument list.
    pub fn parse_from_iter<I, T>(args: I) -> Parsed
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::classify(Self::try_parse_from(args))
    }

    fn classify(result: Result<Self, clap::Error>) -> Parsed {
        match result {
            Ok(args) => Parsed::Run(args),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Parsed::Info(err),
                _ => Parsed::Usage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let Parsed::Run(args) = Args::parse_from_iter(["vpnctl", "WireGuard", "Start"]) else {
            panic!("expected arguments to parse");
        };
        // Case is preserved here; the dispatcher normalizes it.
        assert_eq!(args.protocol, "WireGuard");
        assert_eq!(args.action, "Start");
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_unknown_values_still_parse() {
        assert!(matches!(
            Args::parse_from_iter(["vpnctl", "vpn9000", "restart"]),
            Parsed::Run(_)
        ));
    }

    #[test]
    fn test_wrong_argument_count_is_usage() {
        assert!(matches!(Args::parse_from_iter(["vpnctl"]), Parsed::Usage));
        assert!(matches!(
            Args::parse_from_iter(["vpnctl", "wireguard"]),
            Parsed::Usage
        ));
        assert!(matches!(
            Args::parse_from_iter(["vpnctl", "wireguard", "start", "now"]),
            Parsed::Usage
        ));
    }

    #[test]
    fn test_flags() {
        let Parsed::Run(args) =
            Args::parse_from_iter(["vpnctl", "-vv", "--config", "/tmp/c.toml", "ikev2", "stop"])
        else {
            panic!("expected arguments to parse");
        };
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_help_is_not_usage_error() {
        assert!(matches!(
            Args::parse_from_iter(["vpnctl", "--help"]),
            Parsed::Info(_)
        ));
    }
}
