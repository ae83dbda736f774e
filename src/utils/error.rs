// src/utils/error.rs
#[derive(Debug, thiserror::Error)]
pub enum FiletrapError {
    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("Daemon error: {0}")]
    DaemonError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FiletrapError>;
