use thiserror::Error;

/// Errors that can occur during window operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An OS window call failed with the given error code.
    #[error("window operation failed: code {0}")]
    Os(i32),

    /// Window operations are not available on this platform.
    #[error("window operations unsupported on this platform")]
    Unsupported,
}

/// Result alias for window operations.
pub type Result<T> = std::result::Result<T, Error>;
