use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

use super::{DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT, MAX_POOL_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "surfs-up")]
#[command(about = "Read-only JSON API over Hawaii climate observations")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATABASE_PATH)]
    pub database: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[arg(short, long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn database_path(&self) -> &str {
        &self.database
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database", &self.database)?;
        validate_non_empty_string("host", &self.host)?;
        validate_range("max_connections", self.max_connections, 1, MAX_POOL_SIZE)?;
        Ok(())
    }
}
