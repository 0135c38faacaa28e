use crate::domain::taxonomy::selectable_categories;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Advisor request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Validation error on {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Unknown category: {label}")]
    UnknownCategoryError { label: String },

    #[error("Duplicate identifier: {id}")]
    DuplicateIdError { id: String },

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Advisor error: {message}")]
    AdvisorError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
    External,
}

impl CatalogError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFieldError { .. }
            | Self::ValidationError { .. }
            | Self::UnknownCategoryError { .. }
            | Self::DuplicateIdError { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) | Self::StorageError { .. } => {
                ErrorCategory::Storage
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::HttpError(_) | Self::AdvisorError { .. } => ErrorCategory::External,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單筆提交被拒絕，目錄本身不受影響
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::External => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 是否可以只記錄警告並繼續使用記憶體中的資料
    pub fn is_recoverable(&self) -> bool {
        self.severity() != ErrorSeverity::Critical
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingFieldError { field } => format!("Please fill in the {} field", field),
            Self::ValidationError { field, reason } => format!("{} is not valid: {}", field, reason),
            Self::UnknownCategoryError { label } => {
                let known: Vec<&str> = selectable_categories().map(|e| e.name).collect();
                format!("'{}' is not a listed category (choose from {})", label, known.join(", "))
            }
            Self::DuplicateIdError { id } => format!("An entry with id {} already exists", id),
            Self::StorageError { .. } | Self::IoError(_) => {
                "Your change was kept for this session but could not be saved".to_string()
            }
            Self::SerializationError(_) => "Saved data could not be read".to_string(),
            Self::HttpError(_) | Self::AdvisorError { .. } => {
                "The helper could not suggest a category right now".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Correct the highlighted field and submit again",
            ErrorCategory::Storage => "Check that the data directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::External => "Pick a category manually or try the helper again later",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = CatalogError::MissingFieldError {
            field: "name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.is_recoverable());
        assert!(err.user_friendly_message().contains("name"));
    }

    #[test]
    fn test_unknown_category_lists_choices() {
        let err = CatalogError::UnknownCategoryError {
            label: "Astronaut".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("Astronaut"));
        assert!(message.contains("Plumber"));
        assert!(!message.contains("All,"));
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = CatalogError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_storage_error_message_keeps_session() {
        let err = CatalogError::StorageError {
            key: "k".to_string(),
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("this session"));
    }
}
