use clap::Parser;
use trajectory_predictor::adapters::http;
use trajectory_predictor::utils::{logger, validation::Validate};
use trajectory_predictor::{CliConfig, LogFormat, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let settings = cli.resolve(file_config.as_ref());

    // 初始化日誌
    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting trajectory-predictor");
    tracing::debug!("Server settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = http::serve(&settings).await {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
