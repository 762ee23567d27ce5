//! Error types for civic-sms.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Report storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Report {id} already exists")]
    Duplicate { id: String },

    #[error("Write failed: {0}")]
    Write(String),
}

/// Notification delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Delivery to {recipient} failed: {reason}")]
    DeliveryFailed { recipient: String, reason: String },

    #[error("Recipient {recipient} rejected notification with status {status}")]
    Rejected { recipient: String, status: u16 },

    #[error("No recipient accepted the notification ({failed} failed)")]
    AllFailed { failed: usize },
}

/// Errors raised while turning an inbound message into a stored report.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No message body")]
    EmptyBody,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_flows_into_pipeline_error() {
        let err: PipelineError = StorageError::Write("throttled".into()).into();
        assert_eq!(err.to_string(), "Storage error: Write failed: throttled");
    }

    #[test]
    fn top_level_wraps_config_error() {
        let err: Error = ConfigError::HttpClient("no TLS backend".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Failed to build HTTP client: no TLS backend"
        );
    }

    #[test]
    fn top_level_wraps_pipeline_error() {
        let err: Error = PipelineError::EmptyBody.into();
        assert_eq!(err.to_string(), "Pipeline error: No message body");
    }
}
