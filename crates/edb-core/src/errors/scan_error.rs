use std::path::PathBuf;
use thiserror::Error;

use super::error_code::ErrorCode;
use super::{CacheError, ParseError};

/// Errors surfaced by the directory-walk driver and the scan aggregator (C4).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("workspace root {path:?} does not exist")]
    RootNotFound { path: PathBuf },

    #[error("workspace root {path:?} is not a directory")]
    RootNotADirectory { path: PathBuf },

    #[error("failed to read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("scan was cancelled before completion")]
    Cancelled,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl ErrorCode for ScanError {
    fn code(&self) -> &'static str {
        match self {
            ScanError::RootNotFound { .. } => "SCAN_ROOT_NOT_FOUND",
            ScanError::RootNotADirectory { .. } => "SCAN_ROOT_NOT_A_DIRECTORY",
            ScanError::DirectoryRead { .. } => "SCAN_DIRECTORY_READ",
            ScanError::FileRead { .. } => "SCAN_FILE_READ",
            ScanError::InvalidIgnorePattern { .. } => "SCAN_INVALID_IGNORE_PATTERN",
            ScanError::Cancelled => "SCAN_CANCELLED",
            ScanError::Parse(e) => e.code(),
            ScanError::Cache(e) => e.code(),
        }
    }
}
