//! Parse cache: Moka in-memory, keyed by `(content_hash, language)` so
//! identical bytes parsed under different languages never collide.

use moka::sync::Cache;

use super::traits::ParseResult;
use crate::scanner::language_detect::Language;

type CacheKey = ([u8; 32], std::mem::Discriminant<Language>);

fn make_key(content_hash: [u8; 32], lang: Language) -> CacheKey {
    (content_hash, std::mem::discriminant(&lang))
}

pub struct ParseCache {
    inner: Cache<CacheKey, ParseResult>,
}

impl ParseCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    pub fn get(&self, content_hash: [u8; 32], lang: Language) -> Option<ParseResult> {
        self.inner.get(&make_key(content_hash, lang))
    }

    pub fn insert(&self, content_hash: [u8; 32], lang: Language, result: ParseResult) {
        self.inner.insert(make_key(content_hash, lang), result);
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}
