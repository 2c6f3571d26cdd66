use std::path::PathBuf;
use std::time::SystemTime;

use edb_core::facts::Fact;
use edb_core::FxHashMap;

use super::language_detect::Language;

/// A file found by the directory-walk driver, before hashing/classification.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub size: u64,
    pub mtime: SystemTime,
}

/// Whether a discovered file's content hash was reused from the cache or
/// recomputed this scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Cached `(size, mtimeUnix, contentHash)` for one path, as persisted by
/// the FileCache (C1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedFileMetadata {
    pub size: u64,
    pub mtime_unix: i64,
    pub content_hash: [u8; 32],
}

/// The result of processing one file: its topology fact plus whatever
/// element/call/etc. facts its parser produced, if any.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub content_hash: [u8; 32],
    pub language: Language,
    pub is_test: bool,
    pub cache_status: CacheStatus,
    pub facts: Vec<Fact>,
}

/// One traversed directory.
#[derive(Debug, Clone)]
pub struct DirResult {
    pub path: PathBuf,
    pub basename: String,
}

/// Aggregate counters describing one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub discovery_ms: u64,
    pub processing_ms: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl ScanStats {
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

/// `ScanResult = {fileCount, directoryCount, testFileCount, factsPerLanguage, facts}`.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub file_count: u64,
    pub directory_count: u64,
    pub test_file_count: u64,
    pub facts_per_language: FxHashMap<Language, u64>,
    pub facts: Vec<Fact>,
    pub stats: ScanStats,
}
