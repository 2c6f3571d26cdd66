//! Scan-progress event types and the handler trait consumers implement to
//! observe a scan without coupling to its internals.

pub mod handler;
pub mod types;

pub use handler::{NoOpHandler, ScanEventHandler};
pub use types::{ScanCompleteEvent, ScanErrorEvent, ScanProgressEvent, ScanStartedEvent};
