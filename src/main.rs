use anyhow::Context;
use clap::Parser;
use surfs_up::app::server;
use surfs_up::utils::{logger, validation::Validate};
use surfs_up::{CliConfig, ConfigProvider, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting surfs-up climate API");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            start(&config).await
        }
        None => start(&cli).await,
    }
}

async fn start<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    tracing::info!(
        "✅ Configuration validated: database={}, bind={}, pool={}",
        config.database_path(),
        config.bind_address(),
        config.max_connections()
    );

    server::run(config)
        .await
        .with_context(|| format!("server on {} failed", config.bind_address()))
}
