use thiserror::Error;

/// Failure of a call to the wells backend.
///
/// `operation` names the data-access call that failed (e.g. `"fetch_wells"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-success status.
    #[error("{operation} failed: HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    /// The request never produced a response (connect, timeout, ...).
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("{operation} returned an unreadable body: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl FetchError {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Decode { operation, .. } => operation,
        }
    }

    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
