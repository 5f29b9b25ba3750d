//! Error types for the networking module

use thiserror::Error;

/// Errors on the request/response path
///
/// Every variant is non-fatal: the response carrying the error is discarded
/// and the previously applied view state stays on screen.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport or JSON decoding failure from reqwest
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The JSON body's `status` field was not 200
    #[error("backend reported application status {status}")]
    Server { status: u16 },

    /// A field required on a success response was absent
    #[error("response is missing the `{field}` field")]
    MissingField { field: &'static str },

    /// A board or moves string was not exactly 64 characters
    #[error("`{field}` must be 64 characters, got {len}")]
    MalformedField { field: &'static str, len: usize },

    /// The request worker thread panicked before producing a result
    #[error("request worker thread panicked")]
    WorkerPanicked,
}

/// Result type alias for networking operations
pub type ClientResult<T> = Result<T, ClientError>;
