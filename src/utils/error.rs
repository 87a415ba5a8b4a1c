use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Endpoint {url} responded with HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Response is missing field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' has an unexpected type: expected {expected}")]
    InvalidFieldType {
        field: String,
        index: Option<usize>,
        expected: &'static str,
    },

    #[error("A fetch is already in flight")]
    FetchInFlight,

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Storage,
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortalError::ApiError(_) | PortalError::UnexpectedStatus { .. } => {
                ErrorCategory::Network
            }
            PortalError::IoError(_) | PortalError::FileNotFound { .. } => ErrorCategory::Storage,
            PortalError::SerializationError(_)
            | PortalError::MissingField { .. }
            | PortalError::InvalidFieldType { .. } => ErrorCategory::Data,
            PortalError::ConfigError { .. }
            | PortalError::ConfigValidationError { .. }
            | PortalError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortalError::FetchInFlight => ErrorCategory::Concurrency,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::FetchInFlight => ErrorSeverity::Low,
            // 網路錯誤通常可以重試
            PortalError::ApiError(_) | PortalError::UnexpectedStatus { .. } => {
                ErrorSeverity::Medium
            }
            PortalError::SerializationError(_)
            | PortalError::MissingField { .. }
            | PortalError::InvalidFieldType { .. }
            | PortalError::FileNotFound { .. }
            | PortalError::ConfigError { .. }
            | PortalError::ConfigValidationError { .. }
            | PortalError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PortalError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the server is running and the endpoint URL is reachable"
            }
            ErrorCategory::Data => {
                "Check that the endpoint returns a JSON object with an array of strings"
            }
            ErrorCategory::Storage => "Check that the path exists and is readable/writable",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Concurrency => "Wait for the current fetch to finish and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortalError::UnexpectedStatus { status, .. } => {
                format!("The service list could not be loaded (HTTP {})", status)
            }
            PortalError::ApiError(_) => "Could not reach the service endpoint".to_string(),
            PortalError::MissingField { field } => {
                format!("The response did not contain '{}'", field)
            }
            PortalError::InvalidFieldType {
                field,
                index: Some(i),
                ..
            } => format!("Entry {} of '{}' is not text", i, field),
            PortalError::InvalidFieldType { field, .. } => {
                format!("'{}' is not a list", field)
            }
            PortalError::FetchInFlight => "A request is already running".to_string(),
            other => other.to_string(),
        }
    }

    /// 根據錯誤嚴重程度決定退出碼；任何錯誤都不會回傳 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = PortalError::UnexpectedStatus {
            url: "http://localhost/api/services".to_string(),
            status: 500,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);

        let err = PortalError::MissingField {
            field: "services".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);

        assert_eq!(PortalError::FetchInFlight.category(), ErrorCategory::Concurrency);
        assert_eq!(PortalError::FetchInFlight.exit_code(), 1);
    }

    #[test]
    fn test_bad_json_body_is_a_data_error() {
        let err: PortalError = serde_json::from_slice::<serde_json::Value>(b"<html>oops</html>")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("JSON"));
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            PortalError::FetchInFlight,
            PortalError::FileNotFound {
                path: "index.html".to_string(),
            },
            PortalError::ConfigError {
                message: "bad".to_string(),
            },
        ];
        assert!(errors.iter().all(|e| e.exit_code() != 0));
    }

    #[test]
    fn test_user_friendly_message_names_index() {
        let err = PortalError::InvalidFieldType {
            field: "services".to_string(),
            index: Some(2),
            expected: "string",
        };
        assert_eq!(err.user_friendly_message(), "Entry 2 of 'services' is not text");
    }
}
