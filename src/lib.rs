pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::SqliteStore;
pub use app::routes::router;
pub use crate::core::service::ClimateService;
pub use domain::ports::{ClimateStore, ConfigProvider};
pub use utils::error::{ClimateError, Result};
