//! Shared domain records and application configuration for threadscope.

mod app_config;
mod config;
mod records;
mod taxonomy;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{Analysis, Post, ThemeDetail, TrendReport};
pub use taxonomy::{Community, FocusArea, Theme};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
