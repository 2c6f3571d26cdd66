//! ParserPool (C3) and the per-language parsers it dispatches to.

pub mod cache;
pub mod go;
pub mod mangle;
pub mod pool;
pub mod traits;
pub mod treesitter;

pub use pool::ParserPool;
pub use traits::{LanguageParser, ParseResult};
