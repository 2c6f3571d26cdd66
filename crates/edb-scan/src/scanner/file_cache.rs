//! FileCache (C1): persisted per-workspace mapping from path to
//! `(size, mtimeUnix, contentHash)`, so unchanged files skip rehashing.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use edb_core::errors::CacheError;
use edb_core::FxHashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::types::CachedFileMetadata;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct FileCacheEntry {
    size: u64,
    mtime_unix: i64,
    content_hash: String,
}

/// Shared, internally synchronized. `get`/`update` are safe under
/// concurrent callers: a scan worker calls `get` before hashing and
/// `update` after.
#[derive(Default)]
pub struct FileCache {
    entries: RwLock<FxHashMap<PathBuf, FileCacheEntry>>,
}

impl FileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort load: any deserialization failure yields an empty cache.
    pub fn load(path: &Path) -> Self {
        let Ok(bytes) = std::fs::read(path) else {
            return Self::new();
        };
        let Ok(raw): Result<FxHashMap<PathBuf, FileCacheEntry>, _> = serde_json::from_slice(&bytes)
        else {
            return Self::new();
        };
        Self {
            entries: RwLock::new(raw),
        }
    }

    /// `get(path, fileMeta) -> (hash, hit)`. Hit iff cached size and mtime
    /// both match the observed metadata; no content comparison.
    pub fn get(&self, path: &Path, size: u64, mtime_unix: i64) -> Option<[u8; 32]> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(path)?;
        if entry.size == size && entry.mtime_unix == mtime_unix {
            decode_hash(&entry.content_hash)
        } else {
            None
        }
    }

    /// `update(path, fileMeta, hash)`.
    pub fn update(&self, path: &Path, size: u64, mtime_unix: i64, hash: [u8; 32]) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            path.to_path_buf(),
            FileCacheEntry {
                size,
                mtime_unix,
                content_hash: encode_hash(&hash),
            },
        );
    }

    /// Serialized to `<root>/.nerd/file-cache.json`. Save errors are
    /// reported, never propagated as a scan failure.
    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let entries = self.entries.read().unwrap();
        let bytes = serde_json::to_vec(&*entries).map_err(|source| CacheError::Serialization { source })?;
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, bytes);
        Ok(())
    }

    pub fn snapshot(&self) -> FxHashMap<PathBuf, CachedFileMetadata> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .filter_map(|(path, entry)| {
                decode_hash(&entry.content_hash).map(|hash| {
                    (
                        path.clone(),
                        CachedFileMetadata {
                            size: entry.size,
                            mtime_unix: entry.mtime_unix,
                            content_hash: hash,
                        },
                    )
                })
            })
            .collect()
    }
}

/// Streaming SHA-256 over the file's bytes (I1).
pub fn hash_file(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

fn encode_hash(hash: &[u8; 32]) -> String {
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}

fn decode_hash(hex: &str) -> Option<[u8; 32]> {
    if hex.len() != 64 {
        return None;
    }
    let mut out = [0u8; 32];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let s = std::str::from_utf8(chunk).ok()?;
        out[i] = u8::from_str_radix(s, 16).ok()?;
    }
    Some(out)
}
