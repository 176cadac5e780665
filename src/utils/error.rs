use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::ApiError(_) | PageError::TransportError { .. } => ErrorCategory::Network,
            PageError::IoError(_) => ErrorCategory::Io,
            PageError::ConfigError { .. }
            | PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PageError::SerializationError(_) | PageError::InvalidInput { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端機看的簡短訊息，不帶傳輸細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            PageError::ApiError(_) | PageError::TransportError { .. } => {
                "Could not reach the server".to_string()
            }
            PageError::IoError(e) => format!("File access failed: {}", e),
            PageError::SerializationError(_) => "Could not encode the result".to_string(),
            PageError::ConfigError { message } => format!("Configuration problem: {}", message),
            PageError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PageError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PageError::InvalidInput { message } => message.clone(),
        }
    }

    /// 依嚴重程度決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2, // 可重試
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the server is running and the base URL is correct",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Check the value passed on the command line",
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_high_severity() {
        let err = PageError::InvalidInput {
            message: "duration must be a number".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "duration must be a number");
    }

    #[test]
    fn test_transport_error_is_retryable() {
        let err = PageError::TransportError {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_exit_codes_are_never_success() {
        let cases = [
            (
                PageError::TransportError {
                    message: "timed out".to_string(),
                },
                2,
            ),
            (
                PageError::InvalidInput {
                    message: "abc".to_string(),
                },
                1,
            ),
            (
                PageError::ConfigError {
                    message: "missing".to_string(),
                },
                1,
            ),
            (
                PageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "page-glue.toml",
                )),
                3,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "for {}", err);
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_config_value_error_display() {
        let err = PageError::InvalidConfigValueError {
            field: "routes.login_page".to_string(),
            value: "login".to_string(),
            reason: "Path must start with '/'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'login' for 'routes.login_page': Path must start with '/'"
        );
    }
}
