//! Error types raised at the port boundaries.

/// Failure to obtain the project list from the data resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
    /// The body was not a JSON list of project records.
    #[error("malformed project data: {0}")]
    Decode(String),
}

/// Failure of the persistent preference storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is available in this browsing context.
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}
