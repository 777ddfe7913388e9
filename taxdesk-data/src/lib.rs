pub mod config;
pub mod loader;

pub use config::{AppConfig, ConfigError, StatisticsConfig};
pub use loader::{RecordLoader, RecordLoaderError};
