use std::path::Path;

use edb_core::errors::ParseError;
use edb_core::facts::{CodeElement, Fact};

use crate::scanner::language_detect::Language;

/// A single parser's output for one file: the CodeElements it found plus
/// any ready-made facts it chose to emit directly (e.g. `code_calls`).
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub elements: Vec<CodeElement>,
    pub facts: Vec<Fact>,
}

/// Implemented once per supported language. `parse` must never panic on
/// malformed input — a parse failure is returned as a [`ParseError`] and
/// the caller still emits the file's topology fact.
pub trait LanguageParser: Send + Sync {
    fn language(&self) -> Language;
    fn parse(&self, source: &[u8], path: &Path) -> Result<ParseResult, ParseError>;
}
