//! User configuration.
//!
//! vpnctl works without any configuration file: the defaults reproduce the
//! fixed paths and `sudo` prefix the tool has always used. A TOML file can
//! override them, e.g.
//!
//! ```toml
//! elevation = ["doas"]
//!
//! [paths]
//! openvpn = "/etc/openvpn/office.ovpn"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{bail, Result, WrapErr};
use serde::Deserialize;

use crate::constants;
use crate::state::Protocol;

/// Configuration file locations checked by each protocol before `start`.
///
/// Only `openvpn` is handed to the tool (`openvpn --config <path>`). The
/// `wireguard` and `ikev2` entries only decide which file must exist;
/// `wg-quick` always brings up `wg0` and `ipsec` always uses the `ikev2`
/// connection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigPaths {
    pub wireguard: PathBuf,
    pub openvpn: PathBuf,
    pub ikev2: PathBuf,
}

impl ConfigPaths {
    /// Path of the configuration file belonging to `protocol`.
    #[must_use]
    pub fn for_protocol(&self, protocol: Protocol) -> &Path {
        match protocol {
            Protocol::WireGuard => &self.wireguard,
            Protocol::OpenVPN => &self.openvpn,
            Protocol::IKEv2 => &self.ikev2,
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            wireguard: PathBuf::from(constants::WIREGUARD_CONFIG_PATH),
            openvpn: PathBuf::from(constants::OPENVPN_CONFIG_PATH),
            ikev2: PathBuf::from(constants::IKEV2_CONFIG_PATH),
        }
    }
}

/// Immutable settings handed to the dispatcher at construction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Command prefix used to gain privileges. An empty list runs the tools directly.
    pub elevation: Vec<String>,
    pub paths: ConfigPaths,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            elevation: vec![constants::DEFAULT_ELEVATION.to_string()],
            paths: ConfigPaths::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    Defaults,
    /// The per-user file under the platform config directory.
    UserFile(PathBuf),
    /// A file named with `--config` or `VPNCTL_CONFIG`.
    Explicit(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::UserFile(path) => write!(f, "user file {}", path.display()),
            Self::Explicit(path) => write!(f, "explicit file {}", path.display()),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys,
    /// or names an empty elevation entry.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).wrap_err("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration, preferring an explicit file over the user file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or if any file that is
    /// read fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        Self::load_from(explicit, default_config_path())
    }

    /// [`AppConfig::load`] with the user file location supplied by the caller.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`].
    pub fn load_from(
        explicit: Option<&Path>,
        user_file: Option<PathBuf>,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::read_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        match user_file {
            Some(path) if path.is_file() => {
                let config = Self::read_file(&path)?;
                Ok((config, ConfigSource::UserFile(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    fn read_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).wrap_err_with(|| format!("In config file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.elevation.iter().any(|part| part.trim().is_empty()) {
            bail!(constants::ERR_EMPTY_ELEVATION);
        }
        Ok(())
    }
}

/// `<config dir>/vpnctl/config.toml`, if the platform has a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::APP_NAME).join(constants::CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = AppConfig::default();
        assert_eq!(config.elevation, vec!["sudo".to_string()]);
        assert_eq!(
            config.paths.for_protocol(Protocol::WireGuard),
            Path::new("/etc/wireguard/wg0.conf")
        );
        assert_eq!(
            config.paths.for_protocol(Protocol::OpenVPN),
            Path::new("/etc/openvpn/client.ovpn")
        );
        assert_eq!(
            config.paths.for_protocol(Protocol::IKEv2),
            Path::new("/etc/ipsec.conf")
        );
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
elevation = ["doas"]

[paths]
openvpn = "/etc/openvpn/office.ovpn"
"#,
        )
        .unwrap();

        assert_eq!(config.elevation, vec!["doas".to_string()]);
        assert_eq!(config.paths.openvpn, PathBuf::from("/etc/openvpn/office.ovpn"));
        assert_eq!(config.paths.wireguard, PathBuf::from("/etc/wireguard/wg0.conf"));
    }

    #[test]
    fn test_empty_elevation_list_is_allowed() {
        let config = AppConfig::from_toml("elevation = []").unwrap();
        assert!(config.elevation.is_empty());
    }

    #[test]
    fn test_blank_elevation_entry_rejected() {
        let err = AppConfig::from_toml(r#"elevation = ["sudo", " "]"#).unwrap_err();
        assert!(format!("{err:#}").contains("elevation entries must not be empty"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml("timeout = 5").is_err());
        assert!(AppConfig::from_toml("[paths]\nl2tp = \"/etc/l2tp.conf\"").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "elevation = []\n").unwrap();

        let (config, source) = AppConfig::load(Some(&path)).unwrap();
        assert!(config.elevation.is_empty());
        assert_eq!(source, ConfigSource::Explicit(path));
    }

    #[test]
    fn test_load_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "elevation = [\"doas\"]\n").unwrap();

        let (config, source) = AppConfig::load_from(None, Some(path.clone())).unwrap();
        assert_eq!(config.elevation, vec!["doas".to_string()]);
        assert_eq!(source, ConfigSource::UserFile(path));
    }

    #[test]
    fn test_explicit_file_wins_over_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let user = dir.path().join("config.toml");
        std::fs::write(&explicit, "elevation = []\n").unwrap();
        std::fs::write(&user, "elevation = [\"doas\"]\n").unwrap();

        let (config, source) = AppConfig::load_from(Some(&explicit), Some(user)).unwrap();
        assert!(config.elevation.is_empty());
        assert_eq!(source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn test_absent_user_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) =
            AppConfig::load_from(None, Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);

        let (_, source) = AppConfig::load_from(None, None).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_broken_user_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "elevation = \"sudo\"\n").unwrap();
        assert!(AppConfig::load_from(None, Some(path)).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
