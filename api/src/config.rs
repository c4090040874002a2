//! Service configuration.
//!
//! Sources, later ones winning: `config/default.*`, `config/{RUN_MODE}.*`,
//! then `STOCK__SECTION__KEY` environment variables.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use stock_core::DataConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Listener settings for the long-running server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
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
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::build(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
                .add_source(config::Environment::with_prefix("STOCK").separator("__")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
