//! Error types for conddb-git

/// Result type for conddb-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the external git binary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code:?}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

impl Error {
    /// Exit code to terminate the generation run with: the external tool's
    /// own code when it reported one, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}
