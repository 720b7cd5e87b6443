use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, ServerSettings, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "trajectory-predictor")]
#[command(about = "HTTP service predicting a projectile's position after 25 steps")]
pub struct CliConfig {
    /// Address to bind (default 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8787)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum accepted request body in bytes (default 65536)
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line flags win over the file, the file wins over defaults.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> ServerSettings {
        let server = file.map(|f| &f.server);
        let logging = file.map(|f| &f.logging);

        ServerSettings {
            host: self
                .host
                .clone()
                .or_else(|| server.and_then(|s| s.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self
                .port
                .or_else(|| server.and_then(|s| s.port))
                .unwrap_or(DEFAULT_PORT),
            max_body_bytes: self
                .max_body_bytes
                .or_else(|| server.and_then(|s| s.max_body_bytes))
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            log_format: if self.json_logs {
                LogFormat::Json
            } else {
                logging.and_then(|l| l.format).unwrap_or_default()
            },
        }
    }
}
