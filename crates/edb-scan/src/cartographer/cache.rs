//! Deep-scan cache: keyed by `(contentHash, analyzerVersion)` so a
//! change to the projection logic invalidates every cached entry without
//! touching any file on disk.

use moka::sync::Cache;

use edb_core::facts::Fact;

type CacheKey = ([u8; 32], u32);

pub struct DeepScanCache {
    inner: Cache<CacheKey, Vec<Fact>>,
}

impl DeepScanCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    pub fn get(&self, content_hash: [u8; 32], analyzer_version: u32) -> Option<Vec<Fact>> {
        self.inner.get(&(content_hash, analyzer_version))
    }

    pub fn insert(&self, content_hash: [u8; 32], analyzer_version: u32, facts: Vec<Fact>) {
        self.inner.insert((content_hash, analyzer_version), facts);
    }
}

impl Default for DeepScanCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}
