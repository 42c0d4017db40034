//! Server configuration.
//!
//! Loaded from (later sources win):
//! 1. Default values
//! 2. `PORT` / `HOST` environment variables
//! 3. `GAMEHUB_*` environment variables, e.g. `GAMEHUB_LEADERBOARD_CAPACITY=100`

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origin; `*` allows any. CORS is off when unset.
    #[serde(default)]
    pub cors_origin: Option<String>,

    /// Maximum leaderboard entries kept; unbounded when unset.
    #[serde(default)]
    pub leaderboard_capacity: Option<usize>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: None,
            leaderboard_capacity: None,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["PORT", "HOST"]))
            .merge(Env::prefixed("GAMEHUB_"))
    }

    /// Socket address assembled from `host` and `port`.
    pub fn addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = Config::load()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.port, 3001);
            assert!(config.cors_origin.is_none());
            assert!(config.leaderboard_capacity.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_plain_port_variable() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8080");
            let config = Config::load()?;
            assert_eq!(config.port, 8080);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_variables_override() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8080");
            jail.set_env("GAMEHUB_PORT", "9090");
            jail.set_env("GAMEHUB_LEADERBOARD_CAPACITY", "100");
            jail.set_env("GAMEHUB_CORS_ORIGIN", "http://localhost:5173");
            jail.set_env("GAMEHUB_JSON_LOGS", "true");

            let config = Config::load()?;
            assert_eq!(config.port, 9090);
            assert_eq!(config.leaderboard_capacity, Some(100));
            assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
            assert!(config.json_logs);
            Ok(())
        });
    }

    #[test]
    fn test_bad_port_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "not-a-port");
            assert!(Config::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 4000,
            ..Config::default()
        };
        assert_eq!(config.addr().unwrap(), "127.0.0.1:4000".parse().unwrap());

        let bad = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };
        assert!(bad.addr().is_err());
    }
}
