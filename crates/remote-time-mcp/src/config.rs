//! Server Configuration
//!
//! Settings are layered: built-in defaults, then the `PORT` environment
//! variable, then command-line overrides.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the port
const PORT_ENV: &str = "PORT";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Invalid(Box::new(err))
    }
}

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (all interfaces by default)
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Values supplied on the command line. Unset fields leave the lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build the layered provider stack. An empty `PORT` counts as unset.
    pub fn figment(overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ServerConfig::default()));

        if std::env::var_os(PORT_ENV).is_some_and(|value| !value.is_empty()) {
            figment = figment.merge(Env::raw().only(&[PORT_ENV]));
        }

        figment.merge(Serialized::defaults(overrides))
    }

    /// Load configuration from defaults, environment and overrides
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Ok(Self::figment(overrides).extract()?)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_port_without_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: ServerConfig = ServerConfig::figment(&ConfigOverrides::default()).extract()?;
            assert_eq!(config.port, 8080);
            assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
            Ok(())
        });
    }

    #[test]
    fn test_port_from_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "3000");
            let config: ServerConfig = ServerConfig::figment(&ConfigOverrides::default()).extract()?;
            assert_eq!(config.port, 3000);
            assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
            Ok(())
        });
    }

    #[test]
    fn test_cli_override_wins_over_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "3000");
            let overrides = ConfigOverrides { port: Some(9000) };
            let config: ServerConfig = ServerConfig::figment(&overrides).extract()?;
            assert_eq!(config.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn test_only_port_is_read_from_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("HOST", "127.0.0.1");
            let config: ServerConfig = ServerConfig::figment(&ConfigOverrides::default()).extract()?;
            assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
            Ok(())
        });
    }

    #[test]
    fn test_empty_port_uses_default() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "");
            let result = ServerConfig::load(&ConfigOverrides::default());
            assert_eq!(result.map(|c| c.port).ok(), Some(DEFAULT_PORT));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");
            let result = ServerConfig::load(&ConfigOverrides::default());
            assert!(matches!(result, Err(ConfigError::Invalid(_))));
            Ok(())
        });
    }
}
