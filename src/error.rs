use thiserror::Error;

/// Main error type for the trip planner core
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    #[error("OpenRouter error: {message}")]
    RemoteService {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid response format: {0}")]
    ResponseFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Convenience constructor for remote failures with no underlying cause
    pub fn remote(message: impl Into<String>) -> Self {
        PlannerError::RemoteService {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying transport or protocol error, preserving its message
    pub fn remote_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PlannerError::RemoteService {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::RateLimit { .. } => true,
            PlannerError::RemoteService { .. } => true,
            PlannerError::Config(_)
            | PlannerError::InvalidArgument(_)
            | PlannerError::Authentication(_)
            | PlannerError::ResponseFormat(_)
            | PlannerError::Validation(_) => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            PlannerError::Authentication(_) => "AUTHENTICATION_ERROR",
            PlannerError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            PlannerError::RemoteService { .. } => "REMOTE_SERVICE_ERROR",
            PlannerError::ResponseFormat(_) => "RESPONSE_FORMAT_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}
