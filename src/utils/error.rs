use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{method} {url} returned status {status}")]
    HttpStatusError {
        method: String,
        url: String,
        status: u16,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No food selected for editing")]
    NoFoodSelected,

    #[error("Food {id} not found")]
    FoodNotFound { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Io,
    Configuration,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ApiError(_) => ErrorCategory::Network,
            DashboardError::HttpStatusError { .. } => ErrorCategory::Api,
            DashboardError::SerializationError(_) => ErrorCategory::Data,
            DashboardError::IoError(_) => ErrorCategory::Io,
            DashboardError::UrlError(_)
            | DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::NoFoodSelected | DashboardError::FoodNotFound { .. } => {
                ErrorCategory::State
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 連線問題通常可以重試
            DashboardError::ApiError(_) => ErrorSeverity::Medium,
            DashboardError::HttpStatusError { status, .. } if *status >= 500 => {
                ErrorSeverity::Medium
            }
            DashboardError::HttpStatusError { .. }
            | DashboardError::SerializationError(_)
            | DashboardError::NoFoodSelected
            | DashboardError::FoodNotFound { .. } => ErrorSeverity::High,
            DashboardError::IoError(_)
            | DashboardError::UrlError(_)
            | DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::ApiError(e) if e.is_timeout() => {
                "The food API did not answer in time".to_string()
            }
            DashboardError::ApiError(_) => "Could not reach the food API".to_string(),
            DashboardError::HttpStatusError { status: 404, .. } => {
                "The food API could not find the requested record".to_string()
            }
            DashboardError::HttpStatusError { status, .. } => {
                format!("The food API rejected the request (status {})", status)
            }
            DashboardError::SerializationError(_) => {
                "The food API answered with an unexpected payload".to_string()
            }
            DashboardError::IoError(e) => format!("File access failed: {}", e),
            DashboardError::UrlError(e) => format!("The API URL is invalid: {}", e),
            DashboardError::ConfigError { message } => message.clone(),
            DashboardError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
            DashboardError::NoFoodSelected => "Select a food before editing it".to_string(),
            DashboardError::FoodNotFound { id } => format!("There is no food with id {}", id),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the API server is running and the --api-url is correct"
            }
            ErrorCategory::Api => "Check the request values and the API server logs",
            ErrorCategory::Data => "Make sure --api-url points at a food catalog API",
            ErrorCategory::Io => "Check the file path and its permissions",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::State => "Run `food-dashboard list` to see the available ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = DashboardError::HttpStatusError {
            method: "GET".to_string(),
            url: "http://localhost:3333/foods".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_client_errors_are_high_severity() {
        let err = DashboardError::HttpStatusError {
            method: "PUT".to_string(),
            url: "http://localhost:3333/foods/9".to_string(),
            status: 404,
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("could not find"));
    }

    #[test]
    fn test_state_errors() {
        let err = DashboardError::FoodNotFound { id: 7 };
        assert_eq!(err.category(), ErrorCategory::State);
        assert_eq!(err.to_string(), "Food 7 not found");
        assert!(err.recovery_suggestion().contains("list"));
    }

    #[test]
    fn test_severity_order() {
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
        assert!(ErrorSeverity::High < ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = DashboardError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
