//! Cartographer (C5): the optional deep-projection pass over parsed
//! elements, with a pluggable data-flow emitter and a content-hash-keyed
//! cache.

pub mod cache;
pub mod cartographer;
pub mod dataflow;

pub use cache::DeepScanCache;
pub use cartographer::Cartographer;
pub use dataflow::{DataFlowEmitter, NoOpDataFlowEmitter};
