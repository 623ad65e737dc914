use thiserror::Error;

/// Errors reported by the external data store.
///
/// The gateway never inspects these beyond logging; the store's message is
/// passed through verbatim to the caller inside a generic envelope.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Network or connection error reaching the store
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The store's response body could not be decoded as JSON
    #[error("Invalid response from store: {0}")]
    Decode(String),
}

/// Errors reported by the authentication/session provider.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Network or connection error reaching the provider
    #[error("Connection error: {0}")]
    Connection(String),

    /// The provider answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The session material attached to the request is malformed
    #[error("Invalid session: {0}")]
    InvalidSession(String),
}

/// Errors produced while handling an expert lookup request.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The required `sub_id` parameter was absent or empty after trimming
    #[error("sub_id parameter is required (comma-separated values)")]
    MissingSubIds,

    /// The `sub_id` list exceeds the configured cap
    #[error("too many sub_id values: {count} (maximum {max})")]
    TooManySubIds { count: usize, max: usize },

    /// The store read failed
    #[error("Failed to fetch experts from database")]
    Store(#[from] StoreError),
}
