use std::path::PathBuf;
use std::time::Duration;

/// Emitted once, before the directory walk begins.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub root: PathBuf,
}

/// Emitted periodically (every 100 files, per the scan driver) while a scan
/// is in flight.
#[derive(Debug, Clone)]
pub struct ScanProgressEvent {
    pub files_discovered: u64,
    pub files_processed: u64,
    pub dirs_visited: u64,
}

/// Emitted once, after the aggregator has drained both result channels.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub files_scanned: u64,
    pub files_cached: u64,
    pub files_changed: u64,
    pub files_removed: u64,
    pub elapsed: Duration,
}

/// Emitted for any per-file error that does not abort the overall scan.
#[derive(Debug, Clone)]
pub struct ScanErrorEvent {
    pub path: PathBuf,
    pub message: String,
}
