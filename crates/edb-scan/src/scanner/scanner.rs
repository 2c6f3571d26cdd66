//! Scanner (C4) — the concurrent core. Bounded worker fan-out with a
//! single-writer aggregator: the driver acquires a semaphore
//! token before spawning a worker so it blocks, rather than spawning
//! unboundedly, when workers are saturated.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_channel as channel;
use edb_core::errors::ScanError;
use edb_core::events::{ScanCompleteEvent, ScanErrorEvent, ScanEventHandler, ScanProgressEvent, ScanStartedEvent};
use edb_core::{CancellationToken, CartographerConfig, FxHashMap, ScanConfig};

use super::file_cache::{hash_file, FileCache};
use super::language_detect::{is_test_file, Language};
use super::types::{CacheStatus, DirResult, FileResult, ScanResult, ScanStats};
use super::walker::Walker;
use crate::cartographer::Cartographer;
use crate::parsers::pool::ParserPool;

pub struct Scanner {
    config: ScanConfig,
    pool: ParserPool,
    cartographer: Cartographer,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_cartographer_config(config, CartographerConfig::default())
    }

    pub fn with_cartographer_config(config: ScanConfig, cartographer_config: CartographerConfig) -> Self {
        Self {
            config,
            pool: ParserPool::new(),
            cartographer: Cartographer::new(cartographer_config),
        }
    }

    /// `scanWorkspace(root, cancelToken) -> ScanResult`.
    pub fn scan_workspace(
        &self,
        root: &Path,
        cache: &FileCache,
        cancel: &CancellationToken,
        handler: &dyn ScanEventHandler,
    ) -> Result<ScanResult, ScanError> {
        let start = Instant::now();
        handler.on_scan_started(ScanStartedEvent {
            root: root.to_path_buf(),
        });

        let walker = Walker::new(&self.config.ignore_patterns)?;
        let n = self.config.effective_max_concurrency();

        // A bounded channel pre-filled with N unit tokens acts as a counting
        // semaphore: acquiring is a blocking recv, releasing is a send.
        let (token_tx, token_rx) = channel::bounded::<()>(n);
        for _ in 0..n {
            token_tx.send(()).expect("fresh bounded channel never full");
        }

        let (file_tx, file_rx) = channel::unbounded::<FileResult>();
        let (dir_tx, dir_rx) = channel::unbounded::<DirResult>();

        let discovered_count = AtomicU64::new(0);
        let dirs_visited = AtomicU64::new(0);

        let discovery_start = Instant::now();
        std::thread::scope(|scope| {
            let walk_result = walker.walk(
                root,
                self.config.effective_follow_symlinks(),
                cancel,
                |dir| {
                    dirs_visited.fetch_add(1, Ordering::Relaxed);
                    let _ = dir_tx.send(dir);
                },
                |file| {
                    if cancel.is_cancelled() {
                        return;
                    }
                    // Blocks here when all N tokens are checked out — this
                    // is the backpressure point.
                    let _ = token_rx.recv();

                    let count = discovered_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if count % 100 == 0 {
                        handler.on_scan_progress(ScanProgressEvent {
                            files_discovered: count,
                            files_processed: count,
                            dirs_visited: dirs_visited.load(Ordering::Relaxed),
                        });
                    }

                    let file_tx = file_tx.clone();
                    let token_tx = token_tx.clone();
                    let cache = &*cache;
                    let pool = &self.pool;
                    let cartographer = &self.cartographer;
                    let config = &self.config;
                    scope.spawn(move || {
                        if let Some(result) =
                            process_file(&file.path, file.size, config, cache, pool, cartographer)
                        {
                            let _ = file_tx.send(result);
                        }
                        // Release the token on completion, success or failure.
                        let _ = token_tx.send(());
                    });
                },
            );
            drop(file_tx);
            drop(dir_tx);
            walk_result
        })?;
        let discovery_ms = discovery_start.elapsed().as_millis() as u64;

        // Single-writer aggregation: this thread (not the workers) owns
        // ScanResult and consumes both channels until they close.
        let mut result = ScanResult::default();
        let mut facts_per_language: FxHashMap<Language, u64> = FxHashMap::default();
        let mut cache_hits = 0u64;
        let mut cache_misses = 0u64;

        for dir in dir_rx {
            result.directory_count += 1;
            result.facts.push(edb_core::Fact::new(
                "directory",
                vec![
                    edb_core::FactArg::str(dir.path.to_string_lossy()),
                    edb_core::FactArg::str(dir.basename),
                ],
            ));
        }

        for file in file_rx {
            result.file_count += 1;
            if file.is_test {
                result.test_file_count += 1;
            }
            match file.cache_status {
                CacheStatus::Hit => cache_hits += 1,
                CacheStatus::Miss => cache_misses += 1,
            }
            *facts_per_language.entry(file.language).or_insert(0) += file.facts.len() as u64;
            result.facts.extend(file.facts);
        }

        result.facts_per_language = facts_per_language;
        result.stats = ScanStats {
            discovery_ms,
            processing_ms: start.elapsed().as_millis() as u64 - discovery_ms,
            cache_hits,
            cache_misses,
        };

        if let Err(err) = cache.save(&root.join(".nerd").join("file-cache.json")) {
            handler.on_scan_error(ScanErrorEvent {
                path: root.to_path_buf(),
                message: err.to_string(),
            });
        }

        handler.on_scan_complete(ScanCompleteEvent {
            files_scanned: result.file_count,
            files_cached: cache_hits,
            files_changed: cache_misses,
            files_removed: 0,
            elapsed: start.elapsed(),
        });

        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        Ok(result)
    }
}

/// Per-file worker steps: cache lookup or hash,
/// detect language/test-ness, emit `file_topology`, optionally parse and
/// run the deep pass over the parsed elements.
fn process_file(
    path: &Path,
    size: u64,
    config: &ScanConfig,
    cache: &FileCache,
    pool: &ParserPool,
    cartographer: &Cartographer,
) -> Option<FileResult> {
    let metadata = std::fs::metadata(path).ok()?;
    let mtime_unix = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    let (hash, cache_status) = match cache.get(path, size, mtime_unix) {
        Some(hash) => (hash, CacheStatus::Hit),
        None => {
            let bytes = std::fs::read(path).ok()?;
            let hash = hash_file(&bytes);
            cache.update(path, size, mtime_unix, hash);
            (hash, CacheStatus::Miss)
        }
    };

    let language = Language::detect(path);
    let is_test = is_test_file(path);

    let mut facts = vec![edb_core::Fact::new(
        "file_topology",
        vec![
            edb_core::FactArg::str(path.to_string_lossy()),
            edb_core::FactArg::str(hex(&hash)),
            edb_core::FactArg::atom(format!("/{}", language.tag())),
            edb_core::FactArg::Int(mtime_unix),
            edb_core::FactArg::atom(if is_test { "/true" } else { "/false" }),
        ],
    )];

    let within_size_limit = config
        .effective_max_ast_file_bytes()
        .map(|limit| size <= limit)
        .unwrap_or(true);

    if !is_test && language.is_parser_supported() && within_size_limit {
        if let Ok(bytes) = std::fs::read(path) {
            match pool.parse(language, path, &bytes) {
                Ok(parsed) => {
                    facts.extend(parsed.facts);
                    let source = String::from_utf8_lossy(&bytes);
                    facts.extend(cartographer.map_file(path, hash, language, &source, &parsed.elements));
                }
                Err(_) => {
                    // Parse error: topology fact stands, parser facts dropped.
                }
            }
        }
    }

    Some(FileResult {
        path: path.to_path_buf(),
        content_hash: hash,
        language,
        is_test,
        cache_status,
        facts,
    })
}

fn hex(bytes: &[u8; 32]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
