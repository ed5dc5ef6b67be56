//! Error types.
//!
//! # Design
//! The transport has exactly one failure: no in-process server is registered
//! for the target host. Callers should treat it the way they treat a refused
//! connection. Everything else a handler can get wrong (no status, a bogus
//! `Content-Length`) is absorbed with a default rather than reported.
//!
//! `ClientError` adds the ways the convenience client itself can fail.

use thiserror::Error;

/// Errors returned by `Transport::dispatch`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No handler is registered for `host`.
    #[error("server not found: {host}")]
    ServerNotFound { host: String },
}

/// Errors returned by `Client` methods.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request could not be built (bad URI, bad header).
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_not_found_names_the_host() {
        let err = TransportError::ServerNotFound {
            host: "db.test:5432".to_string(),
        };
        assert_eq!(err.to_string(), "server not found: db.test:5432");
    }

    #[test]
    fn client_error_is_transparent_over_transport() {
        let err = ClientError::from(TransportError::ServerNotFound {
            host: "x".to_string(),
        });
        assert_eq!(err.to_string(), "server not found: x");
        assert!(matches!(
            err,
            ClientError::Transport(TransportError::ServerNotFound { .. })
        ));
    }
}
