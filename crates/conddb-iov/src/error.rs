//! Error types for conddb-iov

/// Result type for conddb-iov operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conddb-iov operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] conddb_fs::Error),

    #[error("Malformed IOVs line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
