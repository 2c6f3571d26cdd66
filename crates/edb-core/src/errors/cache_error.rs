use thiserror::Error;

use super::error_code::ErrorCode;

/// Errors raised by the file-metadata cache (C1) and the Cartographer
/// deep-scan cache (C5).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache entry for key {key:?} is malformed: {reason}")]
    CorruptEntry { key: String, reason: String },

    #[error("failed to (de)serialize cache snapshot: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl ErrorCode for CacheError {
    fn code(&self) -> &'static str {
        match self {
            CacheError::CorruptEntry { .. } => "CACHE_CORRUPT_ENTRY",
            CacheError::Serialization { .. } => "CACHE_SERIALIZATION",
        }
    }
}
