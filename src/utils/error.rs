use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("No event named '{name}' exists")]
    EventNotFound { name: String },

    #[error("No seats left for '{name}'")]
    NoSeatsAvailable { name: String },

    #[error("'{name}' already took place on {date}")]
    EventAlreadyHeld { name: String, date: DateTime<Utc> },

    #[error("Duplicate event name '{name}' in seed data")]
    DuplicateEvent { name: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid event date '{value}': {message}")]
    DateParseError { value: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Inventory,
    Configuration,
    Network,
    Validation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EventNotFound { .. }
            | Self::NoSeatsAvailable { .. }
            | Self::EventAlreadyHeld { .. } => ErrorCategory::Inventory,
            Self::DuplicateEvent { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::DateParseError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EventNotFound { .. }
            | Self::NoSeatsAvailable { .. }
            | Self::EventAlreadyHeld { .. }
            | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::ApiError(_) | Self::SerializationError(_) => ErrorSeverity::Medium,
            Self::DuplicateEvent { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::DateParseError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::EventNotFound { .. } => {
                "Run `event-portal list` to see the events currently open for registration"
                    .to_string()
            }
            Self::NoSeatsAvailable { .. } => {
                "Pick another event from `event-portal list`; sold-out events reopen only if the organizer adds seats"
                    .to_string()
            }
            Self::EventAlreadyHeld { .. } => {
                "Check the events file for the next edition of this event".to_string()
            }
            Self::DuplicateEvent { name } => format!(
                "Rename or remove one of the '{}' entries in the events file",
                name
            ),
            Self::ApiError(_) => {
                "Check your network connection and the registration endpoint, then retry"
                    .to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => {
                "The registration service returned unexpected JSON; verify the endpoint"
                    .to_string()
            }
            Self::CsvError(_) => "Verify the output destination is writable".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the events file", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add the required '{}' setting to the events file", field)
            }
            Self::DateParseError { .. } => {
                "Use YYYY-MM-DD or a full RFC 3339 timestamp for event dates".to_string()
            }
            Self::ValidationError { .. } => {
                "Fill in every field of the signup form and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EventNotFound { name } => format!("Event '{}' was not found", name),
            Self::NoSeatsAvailable { .. } => "Registration failed. No seats available.".to_string(),
            Self::EventAlreadyHeld { name, .. } => format!("'{}' has already taken place", name),
            Self::ApiError(_) => "Submission error.".to_string(),
            Self::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_errors_are_high_severity() {
        let err = PortalError::NoSeatsAvailable {
            name: "Book Exchange".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Inventory);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_user_friendly_message_matches_portal_wording() {
        let err = PortalError::NoSeatsAvailable {
            name: "Book Exchange".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Registration failed. No seats available."
        );
    }
}
