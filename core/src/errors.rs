use thiserror::Error;

/// Shown when `GEMINI_API_KEY` is unset or empty.
pub const MISSING_KEY_MESSAGE: &str =
    "The API key is missing. Please set GEMINI_API_KEY and try again.";

/// Shown for connection failures and non-2xx responses.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// Shown when the response body is not JSON.
pub const FORMAT_FAILURE_MESSAGE: &str = "Oops! Something went wrong with the response format.";

/// Shown when the JSON does not carry a reply text.
pub const SCHEMA_FAILURE_MESSAGE: &str = "I'm sorry, I couldn't process that. Please try again.";

/// Failures of a single recommendation call
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Transport Error: {0}")]
    Transport(String),

    #[error("HTTP Error: {status_code} - {message}")]
    Http { status_code: u16, message: String },

    #[error("Format Error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Schema Error: {0}")]
    Schema(String),
}

impl RecommendError {
    /// The fixed user-visible string substituted for this failure.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            RecommendError::Configuration(_) => MISSING_KEY_MESSAGE,
            RecommendError::Transport(_) | RecommendError::Http { .. } => {
                TRANSPORT_FAILURE_MESSAGE
            }
            RecommendError::Format(_) => FORMAT_FAILURE_MESSAGE,
            RecommendError::Schema(_) => SCHEMA_FAILURE_MESSAGE,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RecommendError::Transport(_) | RecommendError::Http { .. }
        )
    }
}

impl From<reqwest::Error> for RecommendError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter.
        let err = err.without_url();
        if err.is_timeout() {
            RecommendError::Transport(format!("Request timed out: {}", err))
        } else {
            RecommendError::Transport(err.to_string())
        }
    }
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for recommendation calls
pub type RecommendResult<T> = Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_messages_per_kind() {
        let config = RecommendError::Configuration("no key".to_string());
        assert_eq!(config.fallback_message(), MISSING_KEY_MESSAGE);

        let transport = RecommendError::Transport("connection refused".to_string());
        assert_eq!(transport.fallback_message(), TRANSPORT_FAILURE_MESSAGE);
        assert!(transport.is_transport());

        let http = RecommendError::Http {
            status_code: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(http.fallback_message(), TRANSPORT_FAILURE_MESSAGE);
        assert!(http.is_transport());

        let format: RecommendError = serde_json::from_str::<serde_json::Value>("not-json")
            .unwrap_err()
            .into();
        assert_eq!(format.fallback_message(), FORMAT_FAILURE_MESSAGE);
        assert!(!format.is_transport());

        let schema = RecommendError::Schema("No candidates in response".to_string());
        assert_eq!(schema.fallback_message(), SCHEMA_FAILURE_MESSAGE);
    }

    #[test]
    fn test_http_error_display() {
        let err = RecommendError::Http {
            status_code: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error: 500 - boom");
    }
}
