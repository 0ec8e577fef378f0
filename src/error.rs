//! Error types for routewire.

use thiserror::Error;

/// Boxed domain error raised by a handler.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for all routewire operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure before a response was received (connection refused,
    /// timeout, non-parsable HTTP).
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// No binding (exact or wildcard) matched the computed dispatch key.
    #[error("no route for key {key} (status {status})")]
    NoRoute {
        /// Debug-formatted dispatch key the navigator produced.
        key: String,
        /// Status code of the unrouted response.
        status: u16,
    },

    /// The response body could not be deserialized into the requested type.
    #[error("failed to decode response body: {source}")]
    Conversion {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Bounded snippet of the raw body, for diagnostics.
        body: String,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The selected handler raised a domain error. The original error is
    /// preserved as the source so callers can downcast and inspect it.
    #[error("request failed: {0}")]
    Handler(#[source] BoxError),

    /// The client builder was misconfigured.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using routewire's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
