use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Rate limit exceeded by breach provider")]
    RateLimited,

    #[error("Breach provider returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Caller-visible error kinds. Every [`BreachError`] maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ResourceExhausted,
    Internal,
}

impl ErrorKind {
    /// Machine-readable code used at the serving boundary.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::ResourceExhausted => "resource-exhausted",
            ErrorKind::Internal => "internal",
        }
    }

    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorKind::InvalidArgument)
    }
}

impl BreachError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BreachError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BreachError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            BreachError::RateLimited => ErrorKind::ResourceExhausted,
            _ => ErrorKind::Internal,
        }
    }

    /// Message safe to hand back to a caller. Upstream detail stays in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BreachError::InvalidArgument { message } => message.clone(),
            BreachError::RateLimited => "Rate limit exceeded. Please try again later.".to_string(),
            BreachError::ConfigError { .. }
            | BreachError::InvalidConfigValueError { .. }
            | BreachError::MissingConfigError { .. } => self.to_string(),
            _ => "Failed to check breaches. Please try again later.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BreachError::InvalidArgument { .. } => "Provide a valid email address such as user@example.com",
            BreachError::RateLimited => "Wait a while before retrying; the provider enforces its own rate limit",
            BreachError::UpstreamStatus { .. } | BreachError::MalformedResponse(_) => {
                "The breach provider may be degraded; retry later"
            }
            BreachError::Transport(_) => "Check network connectivity or raise the request timeout",
            BreachError::CsvError(_) | BreachError::IoError(_) => "Retry the command; check the output stream",
            BreachError::ConfigError { .. }
            | BreachError::InvalidConfigValueError { .. }
            | BreachError::MissingConfigError { .. } => "Fix the configuration file or command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, BreachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            BreachError::invalid_argument("Email is required").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(BreachError::RateLimited.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(
            BreachError::UpstreamStatus {
                status: 503,
                body: "down".to_string()
            }
            .kind(),
            ErrorKind::Internal
        );

        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(BreachError::from(parse_error).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_internal_message_hides_upstream_detail() {
        let err = BreachError::UpstreamStatus {
            status: 500,
            body: "stack trace from provider".to_string(),
        };

        let message = err.user_friendly_message();
        assert!(!message.contains("stack trace"));
        assert!(!message.contains("500"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorKind::InvalidArgument.code(), "invalid-argument");
        assert_eq!(ErrorKind::ResourceExhausted.code(), "resource-exhausted");
        assert_eq!(ErrorKind::Internal.code(), "internal");
        assert!(!ErrorKind::InvalidArgument.is_retryable());
        assert!(ErrorKind::ResourceExhausted.is_retryable());
    }
}
