//! Integration tests for the Scanner (C4) and FileCache (C1) against a
//! real temp directory tree.

use edb_core::events::NoOpHandler;
use edb_core::{CancellationToken, ScanConfig};
use edb_scan::scanner::{FileCache, Scanner};
use tempfile::TempDir;

fn write(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn scan_discovers_files_and_directories() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/main.rs", "fn main() {}\n");
    write(&dir, "src/lib.rs", "pub fn helper() {}\n");
    write(&dir, "node_modules/pkg/index.js", "module.exports = {};\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert_eq!(result.file_count, 2, "node_modules must be hard-skipped");
    assert!(result
        .facts
        .iter()
        .any(|f| f.predicate == "file_topology" && f.args[0].as_str() == Some(
            dir.path().join("src/main.rs").to_string_lossy().as_ref()
        )));
}

#[test]
fn empty_workspace_yields_one_root_directory_fact() {
    let dir = TempDir::new().unwrap();

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert_eq!(result.file_count, 0);
    assert_eq!(result.directory_count, 1);
    let basename = dir
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap()
        .to_string();
    assert_eq!(result.facts.len(), 1);
    assert_eq!(result.facts[0].predicate, "directory");
    assert_eq!(
        result.facts[0].args[0].as_str(),
        Some(dir.path().to_string_lossy().as_ref())
    );
    assert_eq!(result.facts[0].args[1].as_str(), Some(basename.as_str()));
}

#[test]
fn hard_skip_directories_are_never_descended() {
    let dir = TempDir::new().unwrap();
    write(&dir, "vendor/lib/code.go", "package lib\n");
    write(&dir, ".git/HEAD", "ref: refs/heads/main\n");
    write(&dir, "keep.go", "package main\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert_eq!(result.file_count, 1);
}

#[test]
fn hidden_directory_allow_list_is_descended() {
    let dir = TempDir::new().unwrap();
    write(&dir, ".github/workflows/ci.yml", "name: ci\n");
    write(&dir, ".secret/token.txt", "hunter2\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert_eq!(result.file_count, 1, "only .github's file should surface");
}

#[test]
fn file_cache_hit_reuses_hash_without_rereading() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.rs", "fn a() {}\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();

    let first = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();
    assert_eq!(first.stats.cache_misses, 1);
    assert_eq!(first.stats.cache_hits, 0);

    let second = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();
    assert_eq!(second.stats.cache_hits, 1);
    assert_eq!(second.stats.cache_misses, 0);
}

#[test]
fn rust_source_emits_code_defines_and_calls() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "lib.rs",
        "fn helper() {}\nfn caller() { helper(); }\n",
    );

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert!(result.facts.iter().any(|f| f.predicate == "code_defines"));
    assert!(result.facts.iter().any(|f| f.predicate == "code_calls"));
}

#[test]
fn scan_workspace_emits_symbol_graph_without_a_separate_deep_pass() {
    let dir = TempDir::new().unwrap();
    write(&dir, "lib.rs", "pub fn helper() {}\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    let result = scanner
        .scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler)
        .unwrap();

    assert!(result.facts.iter().any(|f| f.predicate == "file_topology"));
    assert!(result.facts.iter().any(|f| f.predicate == "code_defines"));
    assert!(result.facts.iter().any(|f| f.predicate == "symbol_graph"));
}

#[test]
fn cancellation_before_scan_yields_cancelled_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.rs", "fn a() {}\n");

    let scanner = Scanner::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = scanner.scan_workspace(dir.path(), &cache, &cancel, &NoOpHandler);
    assert!(result.is_err());
}
