//! Go parser. The original system drives this from Go's own `go/ast`
//! package for precise resolution; this workspace has no such compiler
//! frontend available, so `tree-sitter-go` stands in as the concrete
//! implementation (see DESIGN.md). It is registered separately from the
//! generic [`super::treesitter::TreeSitterParser`] construction so the
//! distinction stays visible at the call site.

use std::path::Path;

use edb_core::errors::ParseError;

use super::traits::{LanguageParser, ParseResult};
use super::treesitter::TreeSitterParser;
use crate::scanner::language_detect::Language;

pub struct GoParser {
    inner: TreeSitterParser,
}

impl GoParser {
    pub fn new() -> Self {
        Self {
            inner: TreeSitterParser::go(),
        }
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for GoParser {
    fn language(&self) -> Language {
        Language::Go
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParseResult, ParseError> {
        self.inner.parse(source, path)
    }
}
