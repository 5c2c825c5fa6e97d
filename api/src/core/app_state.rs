//! Runtime configuration and the state shared by all HTTP handlers.

use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};

use parts_catalog::PartsCatalog;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_CONTEXT_LIFESPAN: u32 = 5;

/// Invalid configuration value found at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse '{value}' as {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

/// Server settings. All fields have defaults via `from_env`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    /// Turns an emitted details context stays alive on the platform.
    pub context_lifespan: u32,
    /// Optional directory whose JSON files override the embedded catalog.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            context_lifespan: DEFAULT_CONTEXT_LIFESPAN,
            catalog_dir: None,
        }
    }
}

impl AppConfig {
    /// Read `PORT`, `BIND_HOST`, `CONTEXT_LIFESPAN` and `CATALOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => parse("PORT", raw, "a port number")?,
            None => DEFAULT_PORT,
        };
        let context_lifespan = match value("CONTEXT_LIFESPAN") {
            Some(raw) => parse("CONTEXT_LIFESPAN", raw, "a positive integer")?,
            None => DEFAULT_CONTEXT_LIFESPAN,
        };
        if context_lifespan == 0 {
            return Err(ConfigError::Zero {
                var: "CONTEXT_LIFESPAN",
            });
        }

        Ok(Self {
            bind_host: value("BIND_HOST").unwrap_or_else(|| DEFAULT_BIND_HOST.to_string()),
            port,
            context_lifespan,
            catalog_dir: value("CATALOG_DIR").map(PathBuf::from),
        })
    }

    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        match self.bind_host.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.bind_host, self.port),
        }
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    raw: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw,
        expected,
    })
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only knowledge base, loaded once at startup.
    pub catalog: Arc<PartsCatalog>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(catalog: PartsCatalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.context_lifespan, 5);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert!(cfg.catalog_dir.is_none());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let cfg = config(&[
            ("PORT", " 8080 "),
            ("BIND_HOST", "::1"),
            ("CONTEXT_LIFESPAN", "2"),
            ("CATALOG_DIR", "/srv/catalog"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr(), "[::1]:8080");
        assert_eq!(cfg.context_lifespan, 2);
        assert_eq!(cfg.catalog_dir, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
        assert!(matches!(
            config(&[("CONTEXT_LIFESPAN", "0")]),
            Err(ConfigError::Zero { .. })
        ));
    }
}
