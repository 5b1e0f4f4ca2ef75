use thiserror::Error;

/// Transport-level failure of one call.
///
/// A completed HTTP response is never an error at this layer, whatever its
/// status code; both endpoints embed their own errors in the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("timeout")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Completion event emitted by the client for the shell to map back into
/// controller messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    PurgeSettled(Result<String, CallError>),
    SubmitSettled(Result<String, CallError>),
}
