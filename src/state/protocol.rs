//! Tunnel protocol and action types.

/// Supported VPN protocol types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Protocol {
    /// `WireGuard`, driven through `wg-quick`.
    WireGuard,
    /// `OpenVPN`, driven through the `openvpn` binary.
    OpenVPN,
    /// `IKEv2`, driven through strongSwan's `ipsec`.
    IKEv2,
}

impl Protocol {
    /// Every protocol, in command-table order.
    pub const ALL: [Protocol; 3] = [Protocol::WireGuard, Protocol::OpenVPN, Protocol::IKEv2];

    /// Parse a user-supplied protocol name, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "wireguard" => Some(Self::WireGuard),
            "openvpn" => Some(Self::OpenVPN),
            "ikev2" => Some(Self::IKEv2),
            _ => None,
        }
    }

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WireGuard => "wireguard",
            Self::OpenVPN => "openvpn",
            Self::IKEv2 => "ikev2",
        }
    }

    /// Bare product name, e.g. "WireGuard", without the "VPN" suffix of
    /// the [`Display`](std::fmt::Display) label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WireGuard => "WireGuard",
            Self::OpenVPN => "OpenVPN",
            Self::IKEv2 => "IKEv2",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::WireGuard => write!(f, "WireGuard VPN"),
            Protocol::OpenVPN => write!(f, "OpenVPN"),
            Protocol::IKEv2 => write!(f, "IKEv2 VPN"),
        }
    }
}

/// What to do with a tunnel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Bring the tunnel up.
    Start,
    /// Tear the tunnel down.
    Stop,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 2] = [Action::Start, Action::Stop];

    /// Parse a user-supplied action name, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    /// Progress verb, e.g. "Starting".
    #[must_use]
    pub const fn progressive(self) -> &'static str {
        match self {
            Self::Start => "Starting",
            Self::Stop => "Stopping",
        }
    }

    /// Completion verb, e.g. "started".
    #[must_use]
    pub const fn past(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
