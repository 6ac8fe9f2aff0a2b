//! FastDFS Error Definitions
//!
//! This module defines all error types and error handling utilities for the FastDFS client.
//! Errors are categorized by retryability (§7 of the design): transient errors are safe
//! to retry within an operation's retry budget, terminal errors are surfaced immediately.

use thiserror::Error;

/// Result type alias for FastDFS operations
pub type Result<T> = std::result::Result<T, FastDFSError>;

/// Base error type for all FastDFS errors
#[derive(Error, Debug)]
pub enum FastDFSError {
    /// Client configuration failed validation at `Client::new`
    #[error("invalid client configuration: {0}")]
    ConfigError(String),

    /// Client has been closed
    #[error("client is closed")]
    ClientClosed,

    /// Requested file does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// No storage server is available
    #[error("no storage server available")]
    NoStorageServer,

    /// Connection timeout
    #[error("connection timeout to {0}")]
    ConnectionTimeout(String),

    /// Network I/O timeout
    #[error("network timeout during {0}")]
    NetworkTimeout(String),

    /// File ID format is invalid
    #[error("invalid file ID: {0}")]
    InvalidFileId(String),

    /// Server response is invalid
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// Storage server is offline
    #[error("storage server is offline: {0}")]
    StorageServerOffline(String),

    /// Tracker server is offline
    #[error("tracker server is offline: {0}")]
    TrackerServerOffline(String),

    /// Insufficient storage space
    #[error("insufficient storage space")]
    InsufficientSpace,

    /// File already exists
    #[error("file already exists: {0}")]
    FileAlreadyExists(String),

    /// Invalid metadata format
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Operation is not supported
    #[error("operation not supported: {0}")]
    OperationNotSupported(String),

    /// Invalid argument was provided
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Protocol-level error
    #[error("protocol error (code {code}): {message}")]
    Protocol { code: u8, message: String },

    /// Network-related error
    #[error("network error during {operation} to {addr}: {source}")]
    Network {
        operation: String,
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Caller-supplied cancellation fired while the operation was in flight
    #[error("operation cancelled")]
    Cancelled,
}

impl FastDFSError {
    /// Whether an operation that produced this error may be retried.
    ///
    /// Mirrors the transient/terminal split in the design's error taxonomy: timeouts,
    /// connection resets and protocol glitches are transient; not-found/exists/argument
    /// errors and cancellation are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FastDFSError::ConfigError(_)
            | FastDFSError::ClientClosed
            | FastDFSError::FileNotFound(_)
            | FastDFSError::FileAlreadyExists(_)
            | FastDFSError::InvalidFileId(_)
            | FastDFSError::InvalidMetadata(_)
            | FastDFSError::InvalidArgument(_)
            | FastDFSError::OperationNotSupported(_)
            | FastDFSError::InsufficientSpace
            | FastDFSError::Cancelled => false,

            FastDFSError::NoStorageServer
            | FastDFSError::ConnectionTimeout(_)
            | FastDFSError::NetworkTimeout(_)
            | FastDFSError::InvalidResponse(_)
            | FastDFSError::StorageServerOffline(_)
            | FastDFSError::TrackerServerOffline(_)
            | FastDFSError::Protocol { .. }
            | FastDFSError::Network { .. }
            | FastDFSError::Io(_)
            | FastDFSError::Utf8(_) => true,
        }
    }
}

/// Maps FastDFS protocol status codes to Rust errors
///
/// Status code 0 indicates success (no error).
/// Other status codes are mapped to predefined errors or a Protocol error.
///
/// Common status codes:
///   - 0: Success
///   - 2: File not found (ENOENT)
///   - 6: File already exists (EEXIST)
///   - 22: Invalid argument (EINVAL)
///   - 28: Insufficient space (ENOSPC)
pub fn map_status_to_error(status: u8, context: &str) -> Option<FastDFSError> {
    match status {
        0 => None,
        2 => Some(FastDFSError::FileNotFound(context.to_string())),
        6 => Some(FastDFSError::FileAlreadyExists(context.to_string())),
        22 => Some(FastDFSError::InvalidArgument(context.to_string())),
        28 => Some(FastDFSError::InsufficientSpace),
        _ => Some(FastDFSError::Protocol {
            code: status,
            message: format!("unexpected status code from {}", context),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert!(map_status_to_error(0, "x").is_none());
        assert!(matches!(
            map_status_to_error(2, "x"),
            Some(FastDFSError::FileNotFound(_))
        ));
        assert!(matches!(
            map_status_to_error(6, "x"),
            Some(FastDFSError::FileAlreadyExists(_))
        ));
        assert!(matches!(
            map_status_to_error(22, "x"),
            Some(FastDFSError::InvalidArgument(_))
        ));
        assert!(matches!(
            map_status_to_error(28, "x"),
            Some(FastDFSError::InsufficientSpace)
        ));
        assert!(matches!(
            map_status_to_error(99, "x"),
            Some(FastDFSError::Protocol { code: 99, .. })
        ));
    }

    #[test]
    fn retryability_matches_taxonomy() {
        assert!(!FastDFSError::FileNotFound(String::new()).is_retryable());
        assert!(!FastDFSError::FileAlreadyExists(String::new()).is_retryable());
        assert!(!FastDFSError::InvalidArgument(String::new()).is_retryable());
        assert!(!FastDFSError::InsufficientSpace.is_retryable());
        assert!(!FastDFSError::Cancelled.is_retryable());
        assert!(!FastDFSError::ClientClosed.is_retryable());

        assert!(FastDFSError::NoStorageServer.is_retryable());
        assert!(FastDFSError::ConnectionTimeout(String::new()).is_retryable());
        assert!(FastDFSError::NetworkTimeout(String::new()).is_retryable());
        assert!(FastDFSError::Protocol {
            code: 1,
            message: String::new()
        }
        .is_retryable());
    }
}
