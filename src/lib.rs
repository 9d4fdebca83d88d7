pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpFoodApi;
pub use app::{Command, CommandRunner, OutputFormat};
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{dashboard::Dashboard, Food, FoodForm, FoodPatch, NewFood};
pub use utils::error::{DashboardError, Result};
