use std::path::PathBuf;
use thiserror::Error;

use super::error_code::ErrorCode;

/// Errors raised while acquiring a grammar parser or parsing a single file (C2/C3).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no grammar registered for language {language:?}")]
    UnsupportedLanguage { language: String },

    #[error("tree-sitter failed to set language for {path:?}")]
    LanguageSet { path: PathBuf },

    #[error("tree-sitter produced no tree for {path:?}")]
    EmptyTree { path: PathBuf },

    #[error("file {path:?} exceeds the configured AST size limit ({size} > {limit} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("content for {path:?} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

impl ErrorCode for ParseError {
    fn code(&self) -> &'static str {
        match self {
            ParseError::UnsupportedLanguage { .. } => "PARSE_UNSUPPORTED_LANGUAGE",
            ParseError::LanguageSet { .. } => "PARSE_LANGUAGE_SET",
            ParseError::EmptyTree { .. } => "PARSE_EMPTY_TREE",
            ParseError::FileTooLarge { .. } => "PARSE_FILE_TOO_LARGE",
            ParseError::InvalidUtf8 { .. } => "PARSE_INVALID_UTF8",
        }
    }
}
