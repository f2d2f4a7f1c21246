use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Outcome of a failed document lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The downstream service rejected the request itself (4xx).
    #[error("Downstream client error: {0}")]
    ClientFailure(String),

    /// The downstream service failed, or answered with something we can't read.
    #[error("Downstream server error: {0}")]
    ServerFailure(String),

    /// No HTTP response at all: connect refused, DNS, timeout, broken body.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl DocumentError {
    pub fn is_client_failure(&self) -> bool {
        matches!(self, DocumentError::ClientFailure(_))
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(self, DocumentError::ServerFailure(_))
    }

    pub fn message(&self) -> &str {
        match self {
            DocumentError::ClientFailure(m)
            | DocumentError::ServerFailure(m)
            | DocumentError::Transport(m) => m,
        }
    }
}

impl From<reqwest::Error> for DocumentError {
    fn from(err: reqwest::Error) -> Self {
        DocumentError::Transport(err.to_string())
    }
}

/// The configured downstream base URL can't be used to build document URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid base URL {0}")]
pub struct InvalidBaseUrl(pub String);
