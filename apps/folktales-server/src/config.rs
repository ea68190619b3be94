//! Layered application configuration: defaults, YAML file, environment

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// File read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/folktales.yaml";

/// Environment prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "FOLKTALES_";

/// Top-level sections read from the environment; other `FOLKTALES_*`
/// variables are left alone
const ENV_SECTIONS: &[&str] = &["server__", "logging__", "tales__"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub tales: tales_service::Config,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(
        default = "default_level",
        deserialize_with = "tales_service::config::scalar_string"
    )]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration; an explicit `path` must exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_PATH),
        };

        Self::figment(file)
            .extract()
            .with_context(|| format!("invalid configuration (file {})", file.display()))
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Yaml::file(file))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter(|key| ENV_SECTIONS.iter().any(|section| key.starts_with(section)))
                    .split("__"),
            )
    }
}
