#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::core::view::DEFAULT_CURRENCY;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// 最終生效的設定（設定檔 + 命令列覆蓋）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub api_url: String,
    /// 沒有設定就不設逾時
    pub timeout_seconds: Option<u64>,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validate_non_empty_string("currency_symbol", &self.currency_symbol)?;
        Ok(())
    }
}
