use crate::config::Settings;
use crate::utils::error::{DashboardError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FOOD_API_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 把檔案裡有設定的值套到 settings 上
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = &self.api.url {
            settings.api_url = url.clone();
        }
        if let Some(timeout) = self.api.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }
        if let Some(symbol) = self.display.as_ref().and_then(|d| d.currency_symbol.as_ref()) {
            settings.currency_symbol = symbol.clone();
        }
    }

    pub fn json_output(&self) -> bool {
        self.display.as_ref().and_then(|d| d.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn resolve(config: &TomlConfig) -> Settings {
        let mut settings = Settings::default();
        config.apply_to(&mut settings);
        settings
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
url = "http://foods.internal:8080/api"
timeout_seconds = 10

[display]
currency_symbol = "US$"
json = true

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = resolve(&config);

        assert_eq!(settings.api_url(), "http://foods.internal:8080/api");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(settings.currency_symbol(), "US$");
        assert!(config.json_output());
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[api]\n").unwrap();
        assert_eq!(resolve(&config), Settings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOOD_DASHBOARD_TEST_URL", "https://catalog.example.com");

        let toml_content = r#"
[api]
url = "${FOOD_DASHBOARD_TEST_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(resolve(&config).api_url, "https://catalog.example.com");

        std::env::remove_var("FOOD_DASHBOARD_TEST_URL");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[api]
url = "${FOOD_DASHBOARD_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = resolve(&config);
        assert_eq!(settings.api_url, "${FOOD_DASHBOARD_SURELY_UNSET}");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[api\nurl = ");
        assert!(matches!(
            result,
            Err(DashboardError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_apply_keeps_unset_values() {
        let config = TomlConfig::from_toml_str("[api]\ntimeout_seconds = 3\n").unwrap();
        let mut settings = Settings {
            api_url: "http://other:1234".to_string(),
            ..Settings::default()
        };

        config.apply_to(&mut settings);

        assert_eq!(settings.api_url, "http://other:1234");
        assert_eq!(settings.timeout_seconds, Some(3));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nurl = \"http://127.0.0.1:3333\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.url.as_deref(), Some("http://127.0.0.1:3333"));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/definitely/not/here/food-dashboard.toml");
        assert!(matches!(result, Err(DashboardError::IoError(_))));
    }
}
