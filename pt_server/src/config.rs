//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use poker_tracker::roster::{DistributorConfig, RosterPolicy};
use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::PathBuf,
};

/// Default bind address of the tracker.
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5001));

/// Default distributor base URL.
pub const DEFAULT_DISTRIBUTOR_URL: &str = "http://127.0.0.1:5000";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Distributor location and fetch timeout
    pub distributor: DistributorConfig,
    /// What `/get-players` does when the distributor fails
    pub roster_policy: RosterPolicy,
    /// Directory holding `poker_tracker.html` and `images/`
    pub static_dir: PathBuf,
    /// Prometheus exporter address, disabled when unset
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `distributor_override` - Optional distributor URL override (from CLI args)
    /// * `static_dir_override` - Optional static directory override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        distributor_override: Option<String>,
        static_dir_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(addr) => addr,
            None => parse_env_strict("SERVER_BIND")?.unwrap_or(DEFAULT_BIND),
        };

        let base_url = distributor_override
            .or_else(|| std::env::var("DISTRIBUTOR_URL").ok())
            .unwrap_or_else(|| DEFAULT_DISTRIBUTOR_URL.to_string());

        let distributor = DistributorConfig {
            base_url,
            timeout_secs: parse_env_strict("DISTRIBUTOR_TIMEOUT_SECS")?.unwrap_or(5),
        };

        let roster_policy = match std::env::var("ROSTER_POLICY") {
            Ok(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: "ROSTER_POLICY".to_string(),
                reason,
            })?,
            Err(_) => RosterPolicy::default(),
        };

        let static_dir = static_dir_override
            .or_else(|| std::env::var("STATIC_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("static"));

        let metrics_bind = parse_env_strict("METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            distributor,
            roster_policy,
            static_dir,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distributor.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DISTRIBUTOR_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let url = &self.distributor.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "DISTRIBUTOR_URL".to_string(),
                reason: format!("Must be an http(s) URL, got {url:?}"),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: "Must differ from SERVER_BIND".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an optional variable, failing loudly on garbage
fn parse_env_strict<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map(Some).map_err(|e: T::Err| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:5001".parse().unwrap(),
            distributor: DistributorConfig::default(),
            roster_policy: RosterPolicy::Degrade,
            static_dir: PathBuf::from("static"),
            metrics_bind: None,
        }
    }

    #[test]
    fn test_default_bind_listens_on_all_interfaces() {
        assert_eq!(DEFAULT_BIND, "0.0.0.0:5001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_malformed_timeout_is_rejected() {
        // Only this test touches DISTRIBUTOR_TIMEOUT_SECS.
        unsafe { std::env::set_var("DISTRIBUTOR_TIMEOUT_SECS", "five") };
        let result = ServerConfig::from_env(
            Some(DEFAULT_BIND),
            Some(DEFAULT_DISTRIBUTOR_URL.to_string()),
            None,
        );
        unsafe { std::env::remove_var("DISTRIBUTOR_TIMEOUT_SECS") };

        let err = result.unwrap_err();
        assert!(err.to_string().contains("DISTRIBUTOR_TIMEOUT_SECS"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "ROSTER_POLICY".to_string(),
            reason: "unknown".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ROSTER_POLICY"));
        assert!(msg.contains("unknown"));
    }

    #[test]
    fn test_config_validation_accepts_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = config();
        config.distributor.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_non_http_distributor() {
        let mut config = config();
        config.distributor.base_url = "127.0.0.1:5000".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("DISTRIBUTOR_URL"));
    }

    #[test]
    fn test_config_validation_metrics_port_clash() {
        let mut config = config();
        config.metrics_bind = Some(config.bind);

        assert!(config.validate().is_err());
    }
}
