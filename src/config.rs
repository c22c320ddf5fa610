//! Layered configuration.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. User-level `~/.config/investor-pages/config.toml`
//! 3. Project-level `./investor-pages.toml` (or an explicit `--config` file)
//! 4. Environment variables (`INVESTOR_PAGES_*`, `__` separates nested keys,
//!    e.g. `INVESTOR_PAGES_SERVER__PORT=8080`)

use crate::error::ConfigError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "INVESTOR_PAGES_";
pub const LOCAL_CONFIG_FILE: &str = "investor-pages.toml";

fn default_site() -> String {
    "hotel".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PagesConfig {
    /// Tenant shown when none is requested
    #[serde(default = "default_site")]
    pub default_site: String,

    /// Directory of extra `*.json` tenant files
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Where the terminal UI writes its log (logs are dropped when unset)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            default_site: default_site(),
            content_dir: None,
            log_file: None,
            server: ServerConfig::default(),
        }
    }
}

impl PagesConfig {
    /// Load from defaults, config files and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like `load`, with `explicit` replacing the project-level file.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.check()?;
        Ok(config)
    }

    /// Build the provider chain. Public so tests can layer on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        match explicit {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("investor-pages").join("config.toml"))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.default_site.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_site".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "must be a non-zero port".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_correct() {
        let config = PagesConfig::default();
        assert_eq!(config.default_site, "hotel");
        assert!(config.content_dir.is_none());
        assert!(config.log_file.is_none());
        assert_eq!(config.server.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_check_rejects_zero_port() {
        let mut config = PagesConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.check(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_check_rejects_blank_site() {
        let config = PagesConfig {
            default_site: " ".to_string(),
            ..PagesConfig::default()
        };
        assert!(config.check().is_err());
    }
}
