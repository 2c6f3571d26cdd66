use super::types::{ScanCompleteEvent, ScanErrorEvent, ScanProgressEvent, ScanStartedEvent};

/// Best-effort, synchronous progress reporting for a scan. All methods have
/// no-op defaults so a caller that only cares about, say, progress can
/// implement a single method.
///
/// This is deliberately separate from `tracing`: handler callbacks drive
/// user-facing progress bars and the like, while `tracing` spans/events
/// carry structured diagnostic detail for operators. Neither crate installs
/// a subscriber; that is left to the binary embedding this library.
pub trait ScanEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: ScanStartedEvent) {}
    fn on_scan_progress(&self, _event: ScanProgressEvent) {}
    fn on_scan_complete(&self, _event: ScanCompleteEvent) {}
    fn on_scan_error(&self, _event: ScanErrorEvent) {}
}

/// A handler that discards every event. Useful as a default when the caller
/// has no progress UI to drive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ScanEventHandler for NoOpHandler {}
