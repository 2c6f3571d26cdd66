//! IncrementalController (C7): delta scans against a prior snapshot.

pub mod controller;

pub use controller::{IncrementalController, ScanDelta, Snapshot};
