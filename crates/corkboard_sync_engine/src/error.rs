//! Error types for the sync engine.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors produced at the remote store boundary.
///
/// All three degrade to "the operation did not happen": a failed read
/// leaves board state untouched, a failed write is logged and retried only
/// by the next natural write. None of them escape past the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Transport failure on a read or write.
    #[error("network error: {message}")]
    Network {
        /// Underlying transport message.
        message: String,
    },

    /// Response body was malformed or had the wrong document shape.
    #[error("decode error: {message}")]
    Decode {
        /// What failed to decode.
        message: String,
    },

    /// The store answered a write with a non-success status.
    #[error("remote store rejected the write: status {status:?}")]
    RemoteRejection {
        /// The literal status the store reported.
        status: String,
    },
}

impl SyncError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SyncError::network("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = SyncError::RemoteRejection {
            status: "quota_exceeded".into(),
        };
        assert!(err.to_string().contains("quota_exceeded"));
    }
}
