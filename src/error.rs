use thiserror::Error;

/// Prefix that marks a string as a failed extraction at the JSON boundary.
pub const SENTINEL_PREFIX: &str = "Error: ";

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("file error: {0}")]
    File(#[from] FileError),
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Configuration problems. All of these are raised before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var_name} has value '{value}' which is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    #[error("failed to parse config file {path}: {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
    #[error("unsupported table format: '{path}' (expected .csv, .xls or .xlsx)")]
    UnsupportedTableFormat { path: String },
    #[error("table '{path}' must contain a '{column}' column")]
    MissingColumn { path: String, column: String },
    #[error("queue URL is not configured (set QUEUE_URL)")]
    QueueNotConfigured,
}

/// File access errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {path}")]
    NotFound { path: String },
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to send message to {queue_url}: {message}")]
    SendFailed { queue_url: String, message: String },
    #[error("queue {queue_url} accepted the message but returned no message id")]
    MissingMessageId { queue_url: String },
}

/// Why a single extraction failed.
///
/// Callers that need the legacy plain-string contract render this with
/// [`ExtractError::to_sentinel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Bad URL shape or missing field; no network call was made.
    #[error("{message}")]
    InvalidInput { message: String },
    /// Network failure or non-2xx status.
    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },
    /// Document service credentials are absent or malformed.
    #[error("credentials not configured")]
    NotConfigured,
    /// The document id could not be located in the URL.
    #[error("malformed document URL (no '/d/' segment): '{url}'")]
    MalformedUrl { url: String },
    /// The document service answered with an unexpected shape.
    #[error("unexpected document service response: {message}")]
    UpstreamParse { message: String },
}

impl ExtractError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ExtractError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn transport(url: impl Into<String>, source: impl std::fmt::Display) -> Self {
        ExtractError::Transport {
            url: url.into(),
            message: source.to_string(),
        }
    }

    pub fn upstream_parse(source: impl std::fmt::Display) -> Self {
        ExtractError::UpstreamParse {
            message: source.to_string(),
        }
    }

    /// Short stable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::InvalidInput { .. } => "invalid_input",
            ExtractError::Transport { .. } => "transport_failure",
            ExtractError::NotConfigured => "not_configured",
            ExtractError::MalformedUrl { .. } => "malformed_url",
            ExtractError::UpstreamParse { .. } => "upstream_parse_failure",
        }
    }

    pub fn to_sentinel(&self) -> String {
        format!("{}{}", SENTINEL_PREFIX, self)
    }
}

/// Prefix check for consumers that still receive flattened strings.
pub fn is_sentinel(value: &str) -> bool {
    value.starts_with(SENTINEL_PREFIX)
}

// ========== Convenience constructors ==========

impl AppError {
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    pub fn missing_column(path: impl Into<String>, column: impl Into<String>) -> Self {
        AppError::Config(ConfigError::MissingColumn {
            path: path.into(),
            column: column.into(),
        })
    }

    pub fn queue_send_failed(queue_url: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Queue(QueueError::SendFailed {
            queue_url: queue_url.into(),
            message: message.into(),
        })
    }
}

/// Application result alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_round_trip() {
        let err = ExtractError::NotConfigured;
        let flat = err.to_sentinel();
        assert_eq!(flat, "Error: credentials not configured");
        assert!(is_sentinel(&flat));
        assert!(!is_sentinel("credentials not configured"));
    }

    #[test]
    fn test_transport_carries_cause() {
        let err = ExtractError::transport("https://example.com", "connection refused");
        assert_eq!(err.kind(), "transport_failure");
        assert!(err.to_sentinel().contains("connection refused"));
    }
}
