//! Error types for conddb-scenarios

/// Result type for conddb-scenarios operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a generation run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] conddb_fs::Error),

    #[error("IOV index error: {0}")]
    Iov(#[from] conddb_iov::Error),

    #[error("Git error: {0}")]
    Git(#[from] conddb_git::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Exit code for the process exit contract: an external-tool failure
    /// terminates the run with the tool's own code, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Git(e) => e.exit_code(),
            _ => 1,
        }
    }
}
