use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures while persisting generated files
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to resolve output path {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriterError {
    /// Path of the file or directory the failure relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            WriterError::Resolve { path, .. }
            | WriterError::CreateDir { path, .. }
            | WriterError::Read { path, .. }
            | WriterError::Write { path, .. } => path,
        }
    }
}

pub type WriterResult<T> = Result<T, WriterError>;
