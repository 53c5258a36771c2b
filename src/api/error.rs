use thiserror::Error;

/// Errors returned by the REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the server as invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error: HTTP {status} - {message}")]
    Status { status: u16, message: String },

    /// Body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Get a short message suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_timeout() => "Request timed out".to_string(),
            ClientError::Http(e) if e.is_connect() => "Could not reach the server".to_string(),
            ClientError::Http(e) => format!("Network error: {}", e),
            ClientError::NotFound(_) => "Plate no longer exists on the server".to_string(),
            ClientError::Validation(msg) => format!("Rejected by server: {}", msg),
            ClientError::Status { status, message } if message.is_empty() => {
                format!("Server error ({})", status)
            }
            ClientError::Status { status, message } => {
                format!("Server error ({}): {}", status, message)
            }
            ClientError::Serialization(e) => format!("Unexpected response: {}", e),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
