#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const MAX_BODY_BYTES_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Effective server settings after merging flags, file and defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::default(),
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_range("max_body_bytes", self.max_body_bytes, 1, MAX_BODY_BYTES_LIMIT)?;

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
