//! Error types for backend requests.

/// Failure of a single backend request.
///
/// Callers are expected to treat every variant the same way: the request
/// produced no data. The variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}: {body}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            ClientError::Transport { url, .. }
            | ClientError::Http { url, .. }
            | ClientError::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
