use edb_core::events::NoOpHandler;
use edb_core::{CancellationToken, ScanConfig};
use edb_scan::incremental::IncrementalController;
use edb_scan::scanner::FileCache;
use tempfile::TempDir;

#[test]
fn second_run_reports_only_the_added_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();

    let controller = IncrementalController::new(ScanConfig::default());
    let cache = FileCache::new();
    let cancel = CancellationToken::new();

    let first = controller
        .run(
            dir.path(),
            &cache,
            &Default::default(),
            &cancel,
            &NoOpHandler,
        )
        .unwrap();
    assert!(!first.added.is_empty());
    assert!(first.removed.is_empty());

    let snapshot = IncrementalController::snapshot_of(first.added);
    std::fs::write(dir.path().join("b.rs"), "fn b() {}\n").unwrap();

    let second = controller
        .run(dir.path(), &cache, &snapshot, &cancel, &NoOpHandler)
        .unwrap();

    assert!(second
        .added
        .iter()
        .any(|f| f.predicate == "file_topology"
            && f.args[0]
                .as_str()
                .map(|s| s.ends_with("b.rs"))
                .unwrap_or(false)));
}
